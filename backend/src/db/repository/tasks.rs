//! Task list storage.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{NewTask, Task, TaskId};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Append a task (already trimmed and checked by the caller).
    async fn store_task(&self, task: NewTask) -> RepositoryResult<Task>;

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;

    /// Replace slot and professor of an existing task.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no task has this id
    async fn update_task(&self, id: TaskId, task: NewTask) -> RepositoryResult<Task>;

    /// Returns whether anything was removed.
    async fn delete_task(&self, id: TaskId) -> RepositoryResult<bool>;
}
