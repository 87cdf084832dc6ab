mod project;
mod repository;
pub mod seed;
mod stats;

pub use project::{
    Author, Comment, Department, ManufacturingSpec, NewProject, Priority, Project, ProjectId,
    ProjectPatch, Status,
};
pub use repository::{
    Clock, DEFAULT_FIRST_ID, Filter, FixedClock, ProjectQuery, ProjectRepository,
    RepositoryChange, SystemClock, UpdateOutcome,
};
pub use stats::DashboardStats;
