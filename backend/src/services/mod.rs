//! Pure computations over a registry snapshot.
//!
//! Nothing in here touches storage: the repository layer hands over a
//! `Vec<Course>` and these functions derive the timetable and the workload
//! summary from it.

pub mod analytics;
pub mod projection;

pub use analytics::summarize_workload;
pub use projection::{flatten_occupancy, project_courses, project_grid};
