//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ClearCoursesResponse, CourseListData, DeleteTaskResponse, HealthResponse, NewCourse, NewTask,
    SlotInfo, Task, TaskListData, TimetableData, TopologyData, WorkloadSummary,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CourseId, TaskId};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Catalog & Topology
// =============================================================================

/// GET /v1/catalog/slots
pub async fn list_slots(State(state): State<AppState>) -> HandlerResult<Vec<SlotInfo>> {
    Ok(Json(SlotInfo::all(&state.catalog)))
}

/// GET /v1/catalog/slots/{name}
///
/// The name is matched case-insensitively.
pub async fn get_slot(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<SlotInfo> {
    SlotInfo::lookup(&state.catalog, &name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Slot {} not found", name.trim().to_uppercase())))
}

/// GET /v1/topology
pub async fn get_topology(State(state): State<AppState>) -> HandlerResult<TopologyData> {
    Ok(Json(TopologyData::from(state.topology.as_ref())))
}

// =============================================================================
// Courses
// =============================================================================

/// GET /v1/courses
pub async fn list_courses(State(state): State<AppState>) -> HandlerResult<CourseListData> {
    let courses = db_services::list_courses(state.repository.as_ref()).await?;
    Ok(Json(courses.into()))
}

/// POST /v1/courses
///
/// Expands the slot combo and appends the course. Returns the whole registry;
/// unknown slot names are rejected with 422 and leave it untouched.
pub async fn add_course(
    State(state): State<AppState>,
    payload: Result<Json<NewCourse>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseListData>), AppError> {
    let Json(request) = payload?;
    let courses =
        db_services::add_course(state.repository.as_ref(), &state.catalog, &request).await?;
    Ok((StatusCode::CREATED, Json(courses.into())))
}

/// DELETE /v1/courses/{id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> HandlerResult<CourseListData> {
    let courses = db_services::delete_course(state.repository.as_ref(), id).await?;
    Ok(Json(courses.into()))
}

/// DELETE /v1/courses
///
/// Reset the timetable.
pub async fn clear_courses(State(state): State<AppState>) -> HandlerResult<ClearCoursesResponse> {
    let removed = db_services::clear_courses(state.repository.as_ref()).await?;
    let courses = db_services::list_courses(state.repository.as_ref()).await?;
    Ok(Json(ClearCoursesResponse { removed, courses }))
}

// =============================================================================
// Derived views
// =============================================================================

/// GET /v1/timetable
pub async fn get_timetable(State(state): State<AppState>) -> HandlerResult<TimetableData> {
    let data = db_services::get_timetable(state.repository.as_ref(), &state.topology).await?;
    Ok(Json(data))
}

/// GET /v1/analytics
pub async fn get_analytics(State(state): State<AppState>) -> HandlerResult<WorkloadSummary> {
    let summary = db_services::get_analytics(state.repository.as_ref()).await?;
    Ok(Json(summary))
}

// =============================================================================
// Tasks
// =============================================================================

/// GET /v1/tasks
pub async fn list_tasks(State(state): State<AppState>) -> HandlerResult<TaskListData> {
    let tasks = db_services::list_tasks(state.repository.as_ref()).await?;
    Ok(Json(tasks.into()))
}

/// POST /v1/tasks
pub async fn add_task(
    State(state): State<AppState>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let Json(request) = payload?;
    let task = db_services::add_task(state.repository.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> HandlerResult<Task> {
    let Json(request) = payload?;
    let task = db_services::update_task(state.repository.as_ref(), id, &request).await?;
    Ok(Json(task))
}

/// DELETE /v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> HandlerResult<DeleteTaskResponse> {
    let deleted = db_services::delete_task(state.repository.as_ref(), id).await?;
    let tasks = db_services::list_tasks(state.repository.as_ref()).await?;
    Ok(Json(DeleteTaskResponse { deleted, tasks }))
}
