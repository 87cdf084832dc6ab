use chrono::NaiveDate;

use super::project::{
    Author, Comment, Department, ManufacturingSpec, Priority, Project, ProjectId, Status,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn comment(name: &str, department: Department, text: &str, on: NaiveDate) -> Comment {
    Comment {
        author: Some(Author {
            name: name.to_string(),
            department: Some(department),
        }),
        text: text.to_string(),
        date: on,
    }
}

/// Demo projects shown on a fresh start. They take ids 1 and 2.
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            name: "Honda Automotive Components".to_string(),
            customer_name: "Honda Motor Co.".to_string(),
            customer_contact: "Juan Perez".to_string(),
            customer_email: "juan.perez@honda.com".to_string(),
            customer_phone: "+52 55 1234 5678".to_string(),
            description: "Stamped components for a new hybrid vehicle line".to_string(),
            expected_volume: "50,000 pcs/year".to_string(),
            target_price: 25.50,
            target_margin: 15.0,
            delivery_date: "2024-06-30".to_string(),
            technical_requirements: "ISO 9001, IATF 16949, tolerances ±0.1mm".to_string(),
            quality_requirements: "Zero defects, 99.9% reliability".to_string(),
            regulatory_requirements: "Mexican and US automotive standards".to_string(),
            priority: Priority::High,
            status: Status::UnderReview,
            assigned_departments: vec![Department::Engineering, Department::Production],
            feasibility_score: 75,
            risk_factors: vec![
                "High competition".to_string(),
                "Complex technical requirements".to_string(),
            ],
            opportunities: vec![
                "Growing market".to_string(),
                "Strategic customer".to_string(),
            ],
            comments: vec![
                comment(
                    "Carlos Lopez",
                    Department::Engineering,
                    "Technical review completed",
                    date(2024, 1, 18),
                ),
                comment(
                    "Maria Rodriguez",
                    Department::Production,
                    "Production capacity available",
                    date(2024, 1, 19),
                ),
            ],
            created_by: "Ana Garcia".to_string(),
            created_date: date(2024, 1, 15),
            last_updated: date(2024, 1, 20),
            manufacturing: ManufacturingSpec {
                press_tonnage: 400.0,
                press_type: "Servo".to_string(),
                steel_grade: "DP600".to_string(),
                thickness_mm: 1.2,
                tool_type: "Progressive".to_string(),
                tool_stations: 8,
                progressive: true,
                ppap_level: 3,
                ..Default::default()
            },
        },
        Project {
            id: ProjectId(2),
            name: "Samsung Electronic Housings".to_string(),
            customer_name: "Samsung Electronics".to_string(),
            customer_contact: "Kim Lee".to_string(),
            customer_email: "kim.lee@samsung.com".to_string(),
            customer_phone: "+82 2 1234 5678".to_string(),
            description: "Housings for consumer electronic devices".to_string(),
            expected_volume: "100,000 pcs/year".to_string(),
            target_price: 12.75,
            target_margin: 20.0,
            delivery_date: "2024-03-15".to_string(),
            technical_requirements: "UL certification, impact resistance".to_string(),
            quality_requirements: "100% inspection, zero visual defects".to_string(),
            regulatory_requirements: "FCC, CE marking".to_string(),
            priority: Priority::Medium,
            status: Status::Feasible,
            assigned_departments: vec![
                Department::Engineering,
                Department::Quality,
                Department::Production,
            ],
            feasibility_score: 85,
            risk_factors: vec!["Material price volatility".to_string()],
            opportunities: vec![
                "Long-term contract".to_string(),
                "Advanced technology".to_string(),
            ],
            comments: vec![comment(
                "Ana Garcia",
                Department::Sales,
                "Customer very satisfied with the proposal",
                date(2024, 1, 5),
            )],
            created_by: "Roberto Silva".to_string(),
            created_date: date(2023, 11, 1),
            last_updated: date(2024, 1, 10),
            manufacturing: ManufacturingSpec::default(),
        },
    ]
}
