//! High-level registry service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers and tests. This is
//! where requests are validated against the catalog before anything reaches
//! storage, and where registry snapshots are handed to the pure projection
//! and analytics functions.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP handlers / tests                        │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  Service layer (services.rs)                  │
//! │  - Validation and combo expansion             │
//! │  - Snapshot → projection / analytics          │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  Repository traits (repository/)              │
//! └───────────────────┬──────────────────────────┘
//!         ┌───────────┴────────────┐
//! ┌───────▼──────────┐   ┌─────────▼──────────┐
//! │ LocalRepository  │   │ JsonFileRepository │
//! └──────────────────┘   └────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use ffcs_planner::api::NewCourse;
//! use ffcs_planner::db::{services, repositories::LocalRepository};
//! use ffcs_planner::models::SlotCatalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let request = NewCourse::new("AI", "A1+TA1");
//!     let courses = services::add_course(&repo, SlotCatalog::standard(), &request).await?;
//!     println!("{} course(s) registered", courses.len());
//!     Ok(())
//! }
//! ```

use log::{debug, info};

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    Course, CourseDraft, CourseId, NewCourse, NewTask, Task, TaskId, TimetableData,
    ValidationError, WorkloadSummary,
};
use crate::models::{GridTopology, SlotCatalog};
use crate::services::{project_courses, summarize_workload};

/// Errors from operations that validate input before touching storage.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

// ==================== Health ====================

/// Pass-through to the repository's health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Courses ====================

pub async fn list_courses<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Course>> {
    repo.list_courses().await
}

/// Validate and expand a course request, store it and return the updated
/// registry.
///
/// All-or-nothing: when the subject is blank, the combo is empty or any slot
/// name is unknown, nothing is stored and the error lists every offending
/// name.
pub async fn add_course<R: FullRepository + ?Sized>(
    repo: &R,
    catalog: &SlotCatalog,
    request: &NewCourse,
) -> ServiceResult<Vec<Course>> {
    let draft = CourseDraft::resolve(request, catalog).map_err(|e| {
        debug!("Rejected course '{}' ({}): {}", request.subject, request.slot_combo, e);
        e
    })?;

    let course = repo.store_course(draft).await?;
    info!(
        "Service layer: added course {} '{}' [{}]",
        course.id,
        course.subject,
        course.slot_summary()
    );

    Ok(repo.list_courses().await?)
}

/// Delete by id and return the updated registry. An unknown id changes
/// nothing.
pub async fn delete_course<R: FullRepository + ?Sized>(
    repo: &R,
    id: CourseId,
) -> RepositoryResult<Vec<Course>> {
    if repo.delete_course(id).await? {
        info!("Service layer: deleted course {}", id);
    }
    repo.list_courses().await
}

/// Remove every course ("Reset Timetable").
pub async fn clear_courses<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
    let removed = repo.clear_courses().await?;
    info!("Service layer: reset timetable, {} course(s) removed", removed);
    Ok(removed)
}

// ==================== Tasks ====================

pub async fn list_tasks<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Task>> {
    repo.list_tasks().await
}

pub async fn add_task<R: FullRepository + ?Sized>(
    repo: &R,
    request: &NewTask,
) -> ServiceResult<Task> {
    let task = request.validated()?;
    Ok(repo.store_task(task).await?)
}

/// Replace slot and professor of a task. Fails with NotFound for an unknown id.
pub async fn update_task<R: FullRepository + ?Sized>(
    repo: &R,
    id: TaskId,
    request: &NewTask,
) -> ServiceResult<Task> {
    let task = request.validated()?;
    Ok(repo.update_task(id, task).await?)
}

pub async fn delete_task<R: FullRepository + ?Sized>(
    repo: &R,
    id: TaskId,
) -> RepositoryResult<bool> {
    repo.delete_task(id).await
}

// ==================== Derived views ====================

/// Project the current registry onto the grid.
pub async fn get_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    topology: &GridTopology,
) -> RepositoryResult<TimetableData> {
    let courses = repo.list_courses().await?;
    Ok(project_courses(topology, &courses))
}

/// Workload summary of the current registry.
pub async fn get_analytics<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<WorkloadSummary> {
    let courses = repo.list_courses().await?;
    Ok(summarize_workload(&courses))
}

#[cfg(all(test, feature = "local-repo"))]
#[path = "services_tests.rs"]
mod services_tests;
