//! # FFCS Planner Backend
//!
//! Weekly timetable planning over a fixed institutional slot grid.
//!
//! A student picks courses by typing slot combinations such as `"A1+TA1"`.
//! Each combination is expanded against the static slot catalog into concrete
//! `(day, time range, kind)` occurrences, the registry of courses is projected
//! onto the weekly grid (including dual theory/lab cells) and a workload
//! summary is derived from it.
//!
//! ## Architecture
//!
//! - [`models`]: Slot catalog, grid topology, courses and tasks
//! - [`services`]: Pure grid projection and workload analytics
//! - [`db`]: Repository traits, in-memory and JSON file stores, service layer
//! - [`routes`]: Response types for each view
//! - [`api`]: Public identifiers and re-exported DTOs
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use ffcs_planner::models::{CourseDraft, GridTopology, NewCourse, SlotCatalog};
//! use ffcs_planner::api::CourseId;
//! use ffcs_planner::services::project_courses;
//!
//! let catalog = SlotCatalog::standard();
//! let course = CourseDraft::resolve(&NewCourse::new("AI", "A1"), catalog)
//!     .unwrap()
//!     .into_course(CourseId::new(1));
//! let timetable = project_courses(GridTopology::standard(), &[course]);
//! assert_eq!(timetable.occupied_cells, 1);
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
