//! Data Transfer Objects for the HTTP API.
//!
//! Most response bodies are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Catalog
    SlotInfo, TopologyData,
    // Courses
    Course, CourseListData, NewCourse,
    // Tasks
    NewTask, Task, TaskListData,
    // Timetable
    CellCategory, GridCell, GridRow, TimetableData,
    // Analytics
    WorkloadSummary,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Repository status ("connected", "disconnected" or an error)
    pub repository: String,
}

/// Response of the registry reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCoursesResponse {
    pub removed: usize,
    pub courses: Vec<Course>,
}

/// Response of a task deletion; `deleted` is false when the id was unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub deleted: bool,
    pub tasks: Vec<Task>,
}
