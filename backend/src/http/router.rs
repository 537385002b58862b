//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing) and
//! returns the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Request bodies are tiny (a subject and a combo string).
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Catalog
        .route("/catalog/slots", get(handlers::list_slots))
        .route("/catalog/slots/{name}", get(handlers::get_slot))
        .route("/topology", get(handlers::get_topology))
        // Course registry
        .route(
            "/courses",
            get(handlers::list_courses)
                .post(handlers::add_course)
                .delete(handlers::clear_courses),
        )
        .route("/courses/{id}", delete(handlers::delete_course))
        // Derived views
        .route("/timetable", get(handlers::get_timetable))
        .route("/analytics", get(handlers::get_analytics))
        // Tasks
        .route("/tasks", get(handlers::list_tasks).post(handlers::add_task))
        .route(
            "/tasks/{id}",
            put(handlers::update_task).delete(handlers::delete_task),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
