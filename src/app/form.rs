use std::path::Path;

use thiserror::Error;

use crate::cursor::CursorBuffer;
use crate::storage::{
    Department, ManufacturingSpec, NewProject, Priority, Project, ProjectId, ProjectPatch, Status,
};

const ATTACHMENT_EXTENSIONS: &[&str] = &["pdf", "dwg", "dxf", "step", "stp", "igs", "iges"];

/// Fields counted by the completeness score given to new projects.
const SCORED_FIELDS: &[FormField] = &[
    FormField::ProjectName,
    FormField::CustomerName,
    FormField::CustomerContact,
    FormField::CustomerEmail,
    FormField::Description,
    FormField::ExpectedVolume,
    FormField::TargetPrice,
    FormField::DeliveryDate,
    FormField::TechnicalRequirements,
    FormField::QualityRequirements,
    FormField::RegulatoryRequirements,
    FormField::Department1,
    FormField::Risk1,
    FormField::Opportunity1,
    FormField::Priority,
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("{0} must be a valid number")]
    InvalidNumber(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
    },
    #[error("Unknown {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },
    #[error("Unsupported drawing file: {0} (expected pdf, dwg, dxf, step or iges)")]
    UnsupportedAttachment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTab {
    General,
    Customer,
    Commercial,
    Requirements,
    Assessment,
    Manufacturing,
}

impl FormTab {
    pub const ALL: &[FormTab] = &[
        FormTab::General,
        FormTab::Customer,
        FormTab::Commercial,
        FormTab::Requirements,
        FormTab::Assessment,
        FormTab::Manufacturing,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            FormTab::General => "General",
            FormTab::Customer => "Customer",
            FormTab::Commercial => "Commercial",
            FormTab::Requirements => "Requirements",
            FormTab::Assessment => "Risks",
            FormTab::Manufacturing => "Manufacturing",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choices {
    Priority,
    Status,
    Department,
}

impl Choices {
    /// Options in cycling order. An empty entry means "none selected".
    #[must_use]
    pub fn options(self) -> Vec<&'static str> {
        match self {
            Choices::Priority => std::iter::once("")
                .chain(Priority::ALL.iter().map(Priority::display_name))
                .collect(),
            Choices::Status => Status::ALL.iter().map(Status::display_name).collect(),
            Choices::Department => std::iter::once("")
                .chain(Department::ALL.iter().map(Department::display_name))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Integer { max: u64 },
    Choice(Choices),
    Attachment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ProjectName,
    Description,
    Priority,
    Status,
    FeasibilityScore,
    Department1,
    Department2,
    Department3,
    CustomerName,
    CustomerContact,
    CustomerEmail,
    CustomerPhone,
    ExpectedVolume,
    TargetPrice,
    TargetMargin,
    DeliveryDate,
    TechnicalRequirements,
    QualityRequirements,
    RegulatoryRequirements,
    Risk1,
    Risk2,
    Risk3,
    Opportunity1,
    Opportunity2,
    Opportunity3,
    PressTonnage,
    PressType,
    SteelGrade,
    Thickness,
    ToolType,
    ToolStations,
    Cavities,
    ToolLife,
    CpkTarget,
    PpapLevel,
    Toolmaker,
    QuoteAmount,
    LeadTimeWeeks,
    DrawingPath,
}

const CREATE_FIELDS: &[FormField] = &[
    FormField::ProjectName,
    FormField::Description,
    FormField::Priority,
    FormField::Department1,
    FormField::Department2,
    FormField::Department3,
    FormField::CustomerName,
    FormField::CustomerContact,
    FormField::CustomerEmail,
    FormField::CustomerPhone,
    FormField::ExpectedVolume,
    FormField::TargetPrice,
    FormField::TargetMargin,
    FormField::DeliveryDate,
    FormField::TechnicalRequirements,
    FormField::QualityRequirements,
    FormField::RegulatoryRequirements,
    FormField::Risk1,
    FormField::Risk2,
    FormField::Risk3,
    FormField::Opportunity1,
    FormField::Opportunity2,
    FormField::Opportunity3,
    FormField::PressTonnage,
    FormField::PressType,
    FormField::SteelGrade,
    FormField::Thickness,
    FormField::ToolType,
    FormField::ToolStations,
    FormField::Cavities,
    FormField::ToolLife,
    FormField::CpkTarget,
    FormField::PpapLevel,
    FormField::Toolmaker,
    FormField::QuoteAmount,
    FormField::LeadTimeWeeks,
    FormField::DrawingPath,
];

const EDIT_FIELDS: &[FormField] = &[
    FormField::ProjectName,
    FormField::Description,
    FormField::Priority,
    FormField::Status,
    FormField::FeasibilityScore,
    FormField::Department1,
    FormField::Department2,
    FormField::Department3,
    FormField::CustomerName,
    FormField::CustomerContact,
    FormField::CustomerEmail,
    FormField::CustomerPhone,
    FormField::ExpectedVolume,
    FormField::TargetPrice,
    FormField::TargetMargin,
    FormField::DeliveryDate,
    FormField::TechnicalRequirements,
    FormField::QualityRequirements,
    FormField::RegulatoryRequirements,
    FormField::Risk1,
    FormField::Risk2,
    FormField::Risk3,
    FormField::Opportunity1,
    FormField::Opportunity2,
    FormField::Opportunity3,
    FormField::PressTonnage,
    FormField::PressType,
    FormField::SteelGrade,
    FormField::Thickness,
    FormField::ToolType,
    FormField::ToolStations,
    FormField::Cavities,
    FormField::ToolLife,
    FormField::CpkTarget,
    FormField::PpapLevel,
    FormField::Toolmaker,
    FormField::QuoteAmount,
    FormField::LeadTimeWeeks,
    FormField::DrawingPath,
];

impl FormField {
    #[must_use]
    pub fn label(self) -> &'static str {
        use FormField::*;
        match self {
            ProjectName => "Project Name",
            Description => "Description",
            Priority => "Priority",
            Status => "Status",
            FeasibilityScore => "Feasibility Score",
            Department1 => "Department 1",
            Department2 => "Department 2",
            Department3 => "Department 3",
            CustomerName => "Customer Name",
            CustomerContact => "Customer Contact",
            CustomerEmail => "Customer Email",
            CustomerPhone => "Customer Phone",
            ExpectedVolume => "Expected Volume",
            TargetPrice => "Target Price",
            TargetMargin => "Target Margin %",
            DeliveryDate => "Delivery Date",
            TechnicalRequirements => "Technical",
            QualityRequirements => "Quality",
            RegulatoryRequirements => "Regulatory",
            Risk1 => "Risk 1",
            Risk2 => "Risk 2",
            Risk3 => "Risk 3",
            Opportunity1 => "Opportunity 1",
            Opportunity2 => "Opportunity 2",
            Opportunity3 => "Opportunity 3",
            PressTonnage => "Press Tonnage",
            PressType => "Press Type",
            SteelGrade => "Steel Grade",
            Thickness => "Thickness (mm)",
            ToolType => "Tool Type",
            ToolStations => "Tool Stations",
            Cavities => "Cavities",
            ToolLife => "Tool Life (strokes)",
            CpkTarget => "Cpk Target",
            PpapLevel => "PPAP Level",
            Toolmaker => "Toolmaker",
            QuoteAmount => "Quote Amount",
            LeadTimeWeeks => "Lead Time (weeks)",
            DrawingPath => "Drawing File",
        }
    }

    #[must_use]
    pub fn tab(self) -> FormTab {
        use FormField::*;
        match self {
            ProjectName | Description | Priority | Status | FeasibilityScore | Department1
            | Department2 | Department3 => FormTab::General,
            CustomerName | CustomerContact | CustomerEmail | CustomerPhone => FormTab::Customer,
            ExpectedVolume | TargetPrice | TargetMargin | DeliveryDate => FormTab::Commercial,
            TechnicalRequirements | QualityRequirements | RegulatoryRequirements => {
                FormTab::Requirements
            }
            Risk1 | Risk2 | Risk3 | Opportunity1 | Opportunity2 | Opportunity3 => {
                FormTab::Assessment
            }
            PressTonnage | PressType | SteelGrade | Thickness | ToolType | ToolStations
            | Cavities | ToolLife | CpkTarget | PpapLevel | Toolmaker | QuoteAmount
            | LeadTimeWeeks | DrawingPath => FormTab::Manufacturing,
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        use FormField::*;
        match self {
            Priority => FieldKind::Choice(Choices::Priority),
            Status => FieldKind::Choice(Choices::Status),
            Department1 | Department2 | Department3 => FieldKind::Choice(Choices::Department),
            CustomerEmail => FieldKind::Email,
            TargetPrice | TargetMargin | PressTonnage | Thickness | CpkTarget | QuoteAmount => {
                FieldKind::Number
            }
            FeasibilityScore => FieldKind::Integer { max: 100 },
            PpapLevel => FieldKind::Integer { max: 5 },
            ToolStations | Cavities | LeadTimeWeeks => FieldKind::Integer {
                max: u64::from(u32::MAX),
            },
            ToolLife => FieldKind::Integer { max: u64::MAX },
            DrawingPath => FieldKind::Attachment,
            _ => FieldKind::Text,
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        use FormField::*;
        matches!(
            self,
            ProjectName
                | CustomerName
                | CustomerContact
                | CustomerEmail
                | Description
                | ExpectedVolume
                | TargetPrice
                | DeliveryDate
                | Priority
                | Status
                | FeasibilityScore
        )
    }
}

/// Typed values pulled out of a valid form.
struct FormValues {
    name: String,
    description: String,
    priority: Priority,
    status: Option<Status>,
    feasibility_score: Option<u8>,
    departments: Vec<Department>,
    customer_name: String,
    customer_contact: String,
    customer_email: String,
    customer_phone: String,
    expected_volume: String,
    target_price: f64,
    target_margin: f64,
    delivery_date: String,
    technical_requirements: String,
    quality_requirements: String,
    regulatory_requirements: String,
    risk_factors: Vec<String>,
    opportunities: Vec<String>,
    manufacturing: ManufacturingSpec,
}

/// Field values for the new-project and edit-project overlays.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    mode: FormMode,
    fields: &'static [FormField],
    values: Vec<CursorBuffer>,
    focused: usize,
    /// Manufacturing data the form has no field for, kept across an edit.
    base_manufacturing: ManufacturingSpec,
}

impl ProjectForm {
    #[must_use]
    pub fn new_project() -> Self {
        Self {
            mode: FormMode::Create,
            fields: CREATE_FIELDS,
            values: vec![CursorBuffer::empty(); CREATE_FIELDS.len()],
            focused: 0,
            base_manufacturing: ManufacturingSpec::default(),
        }
    }

    #[must_use]
    pub fn edit(project: &Project) -> Self {
        let mut form = Self {
            mode: FormMode::Edit(project.id),
            fields: EDIT_FIELDS,
            values: vec![CursorBuffer::empty(); EDIT_FIELDS.len()],
            focused: 0,
            base_manufacturing: project.manufacturing.clone(),
        };
        let m = &project.manufacturing;
        let nth = |items: &[String], i: usize| items.get(i).cloned().unwrap_or_default();
        let dept = |i: usize| {
            project
                .assigned_departments
                .get(i)
                .map(|d| d.display_name().to_string())
                .unwrap_or_default()
        };
        let number = |v: f64| if v == 0.0 { String::new() } else { v.to_string() };
        let integer = |v: u64| if v == 0 { String::new() } else { v.to_string() };

        for field in EDIT_FIELDS {
            use FormField::*;
            let value = match field {
                ProjectName => project.name.clone(),
                Description => project.description.clone(),
                Priority => project.priority.display_name().to_string(),
                Status => project.status.display_name().to_string(),
                FeasibilityScore => project.feasibility_score.to_string(),
                Department1 => dept(0),
                Department2 => dept(1),
                Department3 => dept(2),
                CustomerName => project.customer_name.clone(),
                CustomerContact => project.customer_contact.clone(),
                CustomerEmail => project.customer_email.clone(),
                CustomerPhone => project.customer_phone.clone(),
                ExpectedVolume => project.expected_volume.clone(),
                TargetPrice => project.target_price.to_string(),
                TargetMargin => project.target_margin.to_string(),
                DeliveryDate => project.delivery_date.clone(),
                TechnicalRequirements => project.technical_requirements.clone(),
                QualityRequirements => project.quality_requirements.clone(),
                RegulatoryRequirements => project.regulatory_requirements.clone(),
                Risk1 => nth(&project.risk_factors, 0),
                Risk2 => nth(&project.risk_factors, 1),
                Risk3 => nth(&project.risk_factors, 2),
                Opportunity1 => nth(&project.opportunities, 0),
                Opportunity2 => nth(&project.opportunities, 1),
                Opportunity3 => nth(&project.opportunities, 2),
                PressTonnage => number(m.press_tonnage),
                PressType => m.press_type.clone(),
                SteelGrade => m.steel_grade.clone(),
                Thickness => number(m.thickness_mm),
                ToolType => m.tool_type.clone(),
                ToolStations => integer(u64::from(m.tool_stations)),
                Cavities => integer(u64::from(m.cavities)),
                ToolLife => integer(m.tool_life_strokes),
                CpkTarget => number(m.cpk_target),
                PpapLevel => integer(u64::from(m.ppap_level)),
                Toolmaker => m.toolmaker.clone(),
                QuoteAmount => number(m.quote_amount),
                LeadTimeWeeks => integer(u64::from(m.lead_time_weeks)),
                DrawingPath => m.drawing_path.clone(),
            };
            form.set_value(*field, &value);
        }
        form
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FormField] {
        self.fields
    }

    #[must_use]
    pub fn focused_field(&self) -> FormField {
        self.fields[self.focused]
    }

    #[must_use]
    pub fn active_tab(&self) -> FormTab {
        self.focused_field().tab()
    }

    fn index_of(&self, field: FormField) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }

    #[must_use]
    pub fn buffer(&self, field: FormField) -> Option<&CursorBuffer> {
        self.index_of(field).map(|i| &self.values[i])
    }

    /// Trimmed value of `field`, empty if the form has no such field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.buffer(field).map_or("", CursorBuffer::trimmed)
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        if let Some(i) = self.index_of(field) {
            self.values[i].set_content(value);
        }
    }

    /// Fields on `tab` with their buffers, in display order.
    pub fn fields_in(&self, tab: FormTab) -> impl Iterator<Item = (FormField, &CursorBuffer)> {
        self.fields
            .iter()
            .zip(self.values.iter())
            .filter(move |(f, _)| f.tab() == tab)
            .map(|(f, v)| (*f, v))
    }

    pub fn focus(&mut self, field: FormField) {
        if let Some(i) = self.index_of(field) {
            self.focused = i;
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.fields.len() - 1);
    }

    /// Moves focus to the first field of the next tab.
    pub fn next_tab(&mut self) {
        let tab = self.active_tab().index();
        let next = FormTab::ALL[(tab + 1) % FormTab::ALL.len()];
        self.focus_first_in(next);
    }

    pub fn prev_tab(&mut self) {
        let tab = self.active_tab().index();
        let prev = FormTab::ALL[(tab + FormTab::ALL.len() - 1) % FormTab::ALL.len()];
        self.focus_first_in(prev);
    }

    fn focus_first_in(&mut self, tab: FormTab) {
        if let Some(i) = self.fields.iter().position(|f| f.tab() == tab) {
            self.focused = i;
        }
    }

    /// Text buffer of the focused field. Choice fields are not typed into.
    pub fn focused_buffer_mut(&mut self) -> Option<&mut CursorBuffer> {
        if matches!(self.focused_field().kind(), FieldKind::Choice(_)) {
            return None;
        }
        self.values.get_mut(self.focused)
    }

    /// Steps a choice field through its options. No-op on other fields.
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(choices) = self.focused_field().kind() else {
            return;
        };
        let options = choices.options();
        let current = self.values[self.focused].trimmed();
        let position = options.iter().position(|o| o.eq_ignore_ascii_case(current));
        let len = options.len();
        let next = match position {
            None => 0,
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        };
        self.values[self.focused].set_content(options[next]);
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.focused = 0;
    }

    /// Percentage of the tracked fields that are filled, rounded down.
    #[must_use]
    pub fn completeness_score(&self) -> u8 {
        let filled = SCORED_FIELDS
            .iter()
            .filter(|f| !self.value(**f).is_empty())
            .count();
        u8::try_from(filled * 100 / SCORED_FIELDS.len()).unwrap_or(100)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        self.parse().map(|_| ())
    }

    /// Builds the insert request for a new project.
    pub fn to_new_project(&self, created_by: &str) -> Result<NewProject, FormError> {
        let v = self.parse()?;
        Ok(NewProject {
            name: v.name,
            customer_name: v.customer_name,
            customer_contact: v.customer_contact,
            customer_email: v.customer_email,
            customer_phone: v.customer_phone,
            description: v.description,
            expected_volume: v.expected_volume,
            target_price: v.target_price,
            target_margin: v.target_margin,
            delivery_date: v.delivery_date,
            technical_requirements: v.technical_requirements,
            quality_requirements: v.quality_requirements,
            regulatory_requirements: v.regulatory_requirements,
            priority: v.priority,
            status: Status::New,
            assigned_departments: v.departments,
            feasibility_score: self.completeness_score(),
            risk_factors: v.risk_factors,
            opportunities: v.opportunities,
            comments: Vec::new(),
            created_by: created_by.to_string(),
            manufacturing: v.manufacturing,
        })
    }

    /// Patch holding only the fields whose value differs from `original`.
    pub fn to_patch(&self, original: &Project) -> Result<ProjectPatch, FormError> {
        let v = self.parse()?;
        Ok(ProjectPatch {
            name: changed(&original.name, v.name),
            customer_name: changed(&original.customer_name, v.customer_name),
            customer_contact: changed(&original.customer_contact, v.customer_contact),
            customer_email: changed(&original.customer_email, v.customer_email),
            customer_phone: changed(&original.customer_phone, v.customer_phone),
            description: changed(&original.description, v.description),
            expected_volume: changed(&original.expected_volume, v.expected_volume),
            target_price: changed(&original.target_price, v.target_price),
            target_margin: changed(&original.target_margin, v.target_margin),
            delivery_date: changed(&original.delivery_date, v.delivery_date),
            technical_requirements: changed(
                &original.technical_requirements,
                v.technical_requirements,
            ),
            quality_requirements: changed(&original.quality_requirements, v.quality_requirements),
            regulatory_requirements: changed(
                &original.regulatory_requirements,
                v.regulatory_requirements,
            ),
            priority: changed(&original.priority, v.priority),
            status: v.status.and_then(|s| changed(&original.status, s)),
            assigned_departments: changed(&original.assigned_departments, v.departments),
            feasibility_score: v
                .feasibility_score
                .and_then(|s| changed(&original.feasibility_score, s)),
            risk_factors: changed(&original.risk_factors, v.risk_factors),
            opportunities: changed(&original.opportunities, v.opportunities),
            manufacturing: changed(&original.manufacturing, v.manufacturing),
        })
    }

    fn parse(&self) -> Result<FormValues, FormError> {
        let missing: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|f| f.is_required() && self.value(**f).is_empty())
            .map(|f| f.label())
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let email = self.value(FormField::CustomerEmail);
        if !email.is_empty() && !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }

        for field in self.fields {
            match field.kind() {
                FieldKind::Number => {
                    self.number(*field)?;
                }
                FieldKind::Integer { max } => {
                    self.integer(*field, max)?;
                }
                _ => {}
            }
        }

        let priority = self.choice(FormField::Priority, Priority::from_display)?;
        let status = match self.mode {
            FormMode::Create => None,
            FormMode::Edit(_) => self.choice(FormField::Status, Status::from_display)?,
        };
        let mut departments = Vec::new();
        for field in [
            FormField::Department1,
            FormField::Department2,
            FormField::Department3,
        ] {
            if let Some(dept) = self.choice(field, Department::from_display)? {
                departments.push(dept);
            }
        }

        let drawing = self.value(FormField::DrawingPath);
        if !drawing.is_empty() && !has_drawing_extension(drawing) {
            return Err(FormError::UnsupportedAttachment(drawing.to_string()));
        }

        let feasibility_score = match self.mode {
            FormMode::Create => None,
            FormMode::Edit(_) => Some(self.small(FormField::FeasibilityScore)?),
        };

        let manufacturing = ManufacturingSpec {
            press_tonnage: self.number(FormField::PressTonnage)?,
            press_type: self.value(FormField::PressType).to_string(),
            steel_grade: self.value(FormField::SteelGrade).to_string(),
            thickness_mm: self.number(FormField::Thickness)?,
            tool_type: self.value(FormField::ToolType).to_string(),
            tool_stations: self.medium(FormField::ToolStations)?,
            cavities: self.medium(FormField::Cavities)?,
            tool_life_strokes: self.integer(FormField::ToolLife, u64::MAX)?,
            cpk_target: self.number(FormField::CpkTarget)?,
            ppap_level: self.small(FormField::PpapLevel)?,
            toolmaker: self.value(FormField::Toolmaker).to_string(),
            quote_amount: self.number(FormField::QuoteAmount)?,
            lead_time_weeks: self.medium(FormField::LeadTimeWeeks)?,
            drawing_path: drawing.to_string(),
            ..self.base_manufacturing.clone()
        };

        let text = |field| self.value(field).to_string();
        let list = |fields: [FormField; 3]| {
            fields
                .iter()
                .map(|f| self.value(*f))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        Ok(FormValues {
            name: text(FormField::ProjectName),
            description: text(FormField::Description),
            // Required, so the missing-field check guarantees a value.
            priority: priority.unwrap_or(Priority::Medium),
            status,
            feasibility_score,
            departments,
            customer_name: text(FormField::CustomerName),
            customer_contact: text(FormField::CustomerContact),
            customer_email: text(FormField::CustomerEmail),
            customer_phone: text(FormField::CustomerPhone),
            expected_volume: text(FormField::ExpectedVolume),
            target_price: self.number(FormField::TargetPrice)?,
            target_margin: self.number(FormField::TargetMargin)?,
            delivery_date: text(FormField::DeliveryDate),
            technical_requirements: text(FormField::TechnicalRequirements),
            quality_requirements: text(FormField::QualityRequirements),
            regulatory_requirements: text(FormField::RegulatoryRequirements),
            risk_factors: list([FormField::Risk1, FormField::Risk2, FormField::Risk3]),
            opportunities: list([
                FormField::Opportunity1,
                FormField::Opportunity2,
                FormField::Opportunity3,
            ]),
            manufacturing,
        })
    }

    /// Blank parses as zero.
    fn number(&self, field: FormField) -> Result<f64, FormError> {
        let raw = self.value(field);
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or(FormError::InvalidNumber(field.label()))
    }

    fn integer(&self, field: FormField, max: u64) -> Result<u64, FormError> {
        let raw = self.value(field);
        if raw.is_empty() {
            return Ok(0);
        }
        let n = raw
            .parse::<u64>()
            .map_err(|_| FormError::InvalidNumber(field.label()))?;
        if n > max {
            return Err(FormError::OutOfRange {
                field: field.label(),
                min: 0,
                max,
            });
        }
        Ok(n)
    }

    fn small(&self, field: FormField) -> Result<u8, FormError> {
        let max = match field.kind() {
            FieldKind::Integer { max } => max.min(u64::from(u8::MAX)),
            _ => u64::from(u8::MAX),
        };
        let n = self.integer(field, max)?;
        u8::try_from(n).map_err(|_| FormError::InvalidNumber(field.label()))
    }

    fn medium(&self, field: FormField) -> Result<u32, FormError> {
        let n = self.integer(field, u64::from(u32::MAX))?;
        u32::try_from(n).map_err(|_| FormError::InvalidNumber(field.label()))
    }

    fn choice<T>(
        &self,
        field: FormField,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, FormError> {
        let raw = self.value(field);
        if raw.is_empty() {
            return Ok(None);
        }
        parse(raw).map(Some).ok_or_else(|| FormError::InvalidChoice {
            field: field.label(),
            value: raw.to_string(),
        })
    }
}

fn changed<T: PartialEq>(old: &T, new: T) -> Option<T> {
    (*old != new).then_some(new)
}

fn has_drawing_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ATTACHMENT_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}
