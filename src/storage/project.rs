use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Repository-assigned project identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    New,
    UnderReview,
    Feasible,
    NotFeasible,
    Approved,
    Rejected,
}

impl Status {
    pub const ALL: &[Status] = &[
        Status::New,
        Status::UnderReview,
        Status::Feasible,
        Status::NotFeasible,
        Status::Approved,
        Status::Rejected,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::UnderReview => "Under Review",
            Status::Feasible => "Feasible",
            Status::NotFeasible => "Not Feasible",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: &[Priority] = &[
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|priority| priority.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Sales,
    Engineering,
    Production,
    Quality,
    Finance,
    Procurement,
    Logistics,
    Projects,
}

impl Department {
    pub const ALL: &[Department] = &[
        Department::Sales,
        Department::Engineering,
        Department::Production,
        Department::Quality,
        Department::Finance,
        Department::Procurement,
        Department::Logistics,
        Department::Projects,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Engineering => "Engineering",
            Department::Production => "Production",
            Department::Quality => "Quality",
            Department::Finance => "Finance",
            Department::Procurement => "Procurement",
            Department::Logistics => "Logistics",
            Department::Projects => "Projects",
        }
    }

    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|dept| dept.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Who wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub department: Option<Department>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: Option<Author>,
    pub text: String,
    pub date: NaiveDate,
}

/// Press, steel, tooling, quality-plan and toolmaker RFQ data.
///
/// Carried through unchanged by the repository; only the form reads or
/// writes individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturingSpec {
    // Press
    pub press_tonnage: f64,
    pub press_type: String,
    pub bed_size: String,
    pub strokes_per_minute: u32,

    // Steel
    pub steel_grade: String,
    pub thickness_mm: f64,
    pub strip_width_mm: f64,
    pub coil_weight_kg: f64,
    pub yield_strength_mpa: f64,

    // Tool
    pub tool_type: String,
    pub tool_stations: u32,
    pub cavities: u32,
    pub tool_life_strokes: u64,
    pub tool_steel: String,
    pub progressive: bool,

    // Quality plan
    pub cpk_target: f64,
    pub ppap_level: u8,
    pub inspection_frequency: String,
    pub gauge_required: bool,

    // Toolmaker RFQ
    pub toolmaker: String,
    pub quote_amount: f64,
    pub lead_time_weeks: u32,
    pub rfq_sent: bool,
    pub drawing_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub description: String,
    pub expected_volume: String,
    pub target_price: f64,
    pub target_margin: f64,
    /// Free text, never parsed.
    pub delivery_date: String,
    pub technical_requirements: String,
    pub quality_requirements: String,
    pub regulatory_requirements: String,
    pub priority: Priority,
    pub status: Status,
    pub assigned_departments: Vec<Department>,
    pub feasibility_score: u8,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
    pub comments: Vec<Comment>,
    pub created_by: String,
    pub created_date: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub manufacturing: ManufacturingSpec,
}

/// Everything the caller supplies when inserting a project. The repository
/// fills in the id and audit dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub description: String,
    pub expected_volume: String,
    pub target_price: f64,
    #[serde(default)]
    pub target_margin: f64,
    pub delivery_date: String,
    #[serde(default)]
    pub technical_requirements: String,
    #[serde(default)]
    pub quality_requirements: String,
    #[serde(default)]
    pub regulatory_requirements: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub assigned_departments: Vec<Department>,
    pub feasibility_score: u8,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_by: String,
    #[serde(default)]
    pub manufacturing: ManufacturingSpec,
}

impl NewProject {
    pub(crate) fn into_project(self, id: ProjectId, today: NaiveDate) -> Project {
        Project {
            id,
            name: self.name,
            customer_name: self.customer_name,
            customer_contact: self.customer_contact,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            description: self.description,
            expected_volume: self.expected_volume,
            target_price: self.target_price,
            target_margin: self.target_margin,
            delivery_date: self.delivery_date,
            technical_requirements: self.technical_requirements,
            quality_requirements: self.quality_requirements,
            regulatory_requirements: self.regulatory_requirements,
            priority: self.priority,
            status: self.status,
            assigned_departments: self.assigned_departments,
            feasibility_score: self.feasibility_score,
            risk_factors: self.risk_factors,
            opportunities: self.opportunities,
            comments: self.comments,
            created_by: self.created_by,
            created_date: today,
            last_updated: today,
            manufacturing: self.manufacturing,
        }
    }
}

/// Partial update. A field set to `Some` is overwritten; `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub description: Option<String>,
    pub expected_volume: Option<String>,
    pub target_price: Option<f64>,
    pub target_margin: Option<f64>,
    pub delivery_date: Option<String>,
    pub technical_requirements: Option<String>,
    pub quality_requirements: Option<String>,
    pub regulatory_requirements: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub assigned_departments: Option<Vec<Department>>,
    pub feasibility_score: Option<u8>,
    pub risk_factors: Option<Vec<String>>,
    pub opportunities: Option<Vec<String>>,
    pub manufacturing: Option<ManufacturingSpec>,
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ProjectPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites every present field on `project`. Audit fields are the
    /// repository's business and are not touched here.
    pub fn apply_to(self, project: &mut Project) {
        merge(&mut project.name, self.name);
        merge(&mut project.customer_name, self.customer_name);
        merge(&mut project.customer_contact, self.customer_contact);
        merge(&mut project.customer_email, self.customer_email);
        merge(&mut project.customer_phone, self.customer_phone);
        merge(&mut project.description, self.description);
        merge(&mut project.expected_volume, self.expected_volume);
        merge(&mut project.target_price, self.target_price);
        merge(&mut project.target_margin, self.target_margin);
        merge(&mut project.delivery_date, self.delivery_date);
        merge(
            &mut project.technical_requirements,
            self.technical_requirements,
        );
        merge(&mut project.quality_requirements, self.quality_requirements);
        merge(
            &mut project.regulatory_requirements,
            self.regulatory_requirements,
        );
        merge(&mut project.priority, self.priority);
        merge(&mut project.status, self.status);
        merge(&mut project.assigned_departments, self.assigned_departments);
        merge(&mut project.feasibility_score, self.feasibility_score);
        merge(&mut project.risk_factors, self.risk_factors);
        merge(&mut project.opportunities, self.opportunities);
        merge(&mut project.manufacturing, self.manufacturing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        NewProject {
            name: "Bracket".to_string(),
            customer_name: "Acme".to_string(),
            customer_contact: "Jo".to_string(),
            customer_email: "jo@acme.test".to_string(),
            customer_phone: String::new(),
            description: "Stamped bracket".to_string(),
            expected_volume: "10k/yr".to_string(),
            target_price: 1.5,
            target_margin: 12.0,
            delivery_date: "Q3".to_string(),
            technical_requirements: String::new(),
            quality_requirements: String::new(),
            regulatory_requirements: String::new(),
            priority: Priority::Low,
            status: Status::New,
            assigned_departments: vec![Department::Sales],
            feasibility_score: 40,
            risk_factors: vec![],
            opportunities: vec![],
            comments: vec![],
            created_by: "Ana".to_string(),
            manufacturing: ManufacturingSpec::default(),
        }
        .into_project(ProjectId(7), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
    }

    #[test]
    fn test_display_names_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_display(status.display_name()), Some(*status));
        }
        for priority in Priority::ALL {
            assert_eq!(
                Priority::from_display(priority.display_name()),
                Some(*priority)
            );
        }
        for dept in Department::ALL {
            assert_eq!(Department::from_display(dept.display_name()), Some(*dept));
        }
    }

    #[test]
    fn test_from_display_rejects_unknown_text() {
        assert_eq!(Status::from_display("Aproved"), None);
        assert_eq!(Priority::from_display(""), None);
        assert_eq!(Department::from_display("Marketing"), None);
    }

    #[test]
    fn test_from_display_is_case_insensitive() {
        assert_eq!(Status::from_display("under review"), Some(Status::UnderReview));
        assert_eq!(Priority::from_display(" CRITICAL "), Some(Priority::Critical));
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut project = sample();
        let before = project.clone();
        let patch = ProjectPatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut project);
        assert_eq!(project, before);
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut project = sample();
        ProjectPatch {
            status: Some(Status::Approved),
            assigned_departments: Some(vec![Department::Quality, Department::Quality]),
            ..Default::default()
        }
        .apply_to(&mut project);

        assert_eq!(project.status, Status::Approved);
        assert_eq!(
            project.assigned_departments,
            vec![Department::Quality, Department::Quality]
        );
        assert_eq!(project.name, "Bracket");
        assert_eq!(project.priority, Priority::Low);
    }

    #[test]
    fn test_new_project_stamps_audit_dates() {
        let project = sample();
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(project.id, ProjectId(7));
        assert_eq!(project.created_date, today);
        assert_eq!(project.last_updated, today);
    }
}
