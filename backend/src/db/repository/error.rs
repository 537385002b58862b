//! Error types for repository operations.
//!
//! Every error carries an [`ErrorContext`] naming the failing operation and,
//! when there is one, the course or task it was about.

use std::fmt;

use crate::api::{CourseId, TaskId};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// The registry entry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Course(CourseId),
    Task(TaskId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Course(id) => write!(f, "course={}", id),
            EntityRef::Task(id) => write!(f, "task={}", id),
        }
    }
}

/// Where a repository error happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Repository operation, e.g. `"store_course"`
    pub operation: Option<String>,
    pub entity: Option<EntityRef>,
    /// Free text such as a file path or an io error kind
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Self::default()
        }
    }

    pub fn with_entity(mut self, entity: EntityRef) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    /// `[op=update_task, task=42]`, or nothing when the context is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            self.operation.as_ref().map(|op| format!("op={}", op)),
            self.entity.map(|entity| entity.to_string()),
            self.details.as_ref().map(|d| format!("details={}", d)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            Ok(())
        } else {
            write!(f, "[{}]", parts.join(", "))
        }
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No course or task with the requested id.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Bad `repository.toml`, unknown backend or disabled feature.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// The data file could not be read or written, or the store is down.
    #[error("Storage error: {message} {context}")]
    StorageError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Unknown course id.
    pub fn course_not_found(operation: &str, id: CourseId) -> Self {
        Self::NotFound {
            message: format!("Course {} not found", id),
            context: ErrorContext::new(operation).with_entity(EntityRef::Course(id)),
        }
    }

    /// Unknown task id.
    pub fn task_not_found(operation: &str, id: TaskId) -> Self {
        Self::NotFound {
            message: format!("Task {} not found", id),
            context: ErrorContext::new(operation).with_entity(EntityRef::Task(id)),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn storage(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::StorageError {
            message: message.into(),
            context,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::NotFound { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::StorageError { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::NotFound { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::StorageError { context, .. } => context,
        }
    }

    /// Tag the error with the operation that surfaced it, keeping any
    /// operation already recorded closer to the failure.
    pub fn with_operation(mut self, operation: &str) -> Self {
        let context = self.context_mut();
        if context.operation.is_none() {
            context.operation = Some(operation.to_string());
        }
        self
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::storage(
            err.to_string(),
            ErrorContext::default().with_details(format!("io_error_kind={:?}", err.kind())),
        )
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::storage(
            err.to_string(),
            ErrorContext::default().with_details("serde_json"),
        )
    }
}
