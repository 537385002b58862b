//! In-memory local repository implementation.
//!
//! Suitable for unit tests, local development and the default server
//! configuration. Nothing survives a restart.

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

use super::clock::IdClock;
use crate::api::{Course, CourseDraft, CourseId, NewTask, Task, TaskId};
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use ffcs_planner::db::repositories::LocalRepository;
/// use ffcs_planner::db::repository::CourseRepository;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = LocalRepository::new();
///     assert!(repo.list_courses().await.unwrap().is_empty());
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    courses: Vec<Course>,
    tasks: Vec<Task>,
    clock: IdClock,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            tasks: Vec::new(),
            clock: IdClock::default(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing storage failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    pub fn course_count(&self) -> usize {
        self.data.read().courses.len()
    }

    pub fn task_count(&self) -> usize {
        self.data.read().tasks.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::storage(
                "Repository is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_course(&self, draft: CourseDraft) -> RepositoryResult<Course> {
        self.check_health("store_course")?;

        let mut data = self.data.write();
        let id = CourseId::new(data.clock.next());
        let course = draft.into_course(id);
        data.courses.push(course.clone());

        info!("Stored course {} '{}' ({} occurrence(s))", id, course.subject, course.slots.len());
        Ok(course)
    }

    async fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        self.check_health("list_courses")?;
        Ok(self.data.read().courses.clone())
    }

    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course> {
        self.check_health("get_course")?;
        let data = self.data.read();
        data.courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::course_not_found("get_course", id))
    }

    async fn delete_course(&self, id: CourseId) -> RepositoryResult<bool> {
        self.check_health("delete_course")?;
        let mut data = self.data.write();
        let before = data.courses.len();
        data.courses.retain(|c| c.id != id);
        let removed = data.courses.len() != before;
        debug!("Delete course {}: removed={}", id, removed);
        Ok(removed)
    }

    async fn clear_courses(&self) -> RepositoryResult<usize> {
        self.check_health("clear_courses")?;
        let mut data = self.data.write();
        let removed = data.courses.len();
        data.courses.clear();
        info!("Cleared {} course(s)", removed);
        Ok(removed)
    }
}

#[async_trait]
impl TaskRepository for LocalRepository {
    async fn store_task(&self, task: NewTask) -> RepositoryResult<Task> {
        self.check_health("store_task")?;
        let mut data = self.data.write();
        let task = Task::from_request(TaskId::new(data.clock.next()), task);
        data.tasks.push(task.clone());
        debug!("Stored task {}", task.id);
        Ok(task)
    }

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        self.check_health("list_tasks")?;
        Ok(self.data.read().tasks.clone())
    }

    async fn update_task(&self, id: TaskId, task: NewTask) -> RepositoryResult<Task> {
        self.check_health("update_task")?;
        let mut data = self.data.write();
        let slot = data
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RepositoryError::task_not_found("update_task", id))?;
        *slot = slot.replaced_by(task);
        Ok(slot.clone())
    }

    async fn delete_task(&self, id: TaskId) -> RepositoryResult<bool> {
        self.check_health("delete_task")?;
        let mut data = self.data.write();
        let before = data.tasks.len();
        data.tasks.retain(|t| t.id != id);
        Ok(data.tasks.len() != before)
    }
}
