//! Registry storage.
//!
//! Abstractions for storing courses and tasks via the Repository pattern, so
//! the in-memory and JSON file backends can be swapped freely.
//!
//! - `services`: High-level operations (use these in your application!)
//! - `repository`: Trait definitions and error types
//! - `repositories::local`: In-memory implementation
//! - `repositories::json_file`: JSON document on disk
//! - `factory`: Builds a repository from a type, the environment or `repository.toml`
//!
//! There is no process-wide repository: callers build one and pass it
//! explicitly (the HTTP layer keeps it in `AppState`).
//!
//! ```ignore
//! use ffcs_planner::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env().await?;
//!     let courses = services::list_courses(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "local-repo", feature = "json-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod config;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{
    add_course, add_task, clear_courses, delete_course, delete_task, get_analytics,
    get_timetable, health_check, list_courses, list_tasks, update_task, ServiceError,
    ServiceResult,
};

pub use config::{JsonStoreConfig, DATA_FILE_ENV, DEFAULT_DATA_FILE};
pub use factory::{RepositoryFactory, RepositoryType, REPOSITORY_TYPE_ENV};
pub use repo_config::RepositoryConfig;
#[cfg(feature = "json-repo")]
pub use repositories::JsonFileRepository;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{
    CourseRepository, EntityRef, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    TaskRepository,
};
