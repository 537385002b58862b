//! JSON file repository.
//!
//! Keeps the whole registry in one key-value JSON document:
//!
//! ```json
//! { "ffcs-courses": [ ... ], "ffcs-tasks": [ ... ] }
//! ```
//!
//! The document is rewritten after every mutation (temp file + rename). A
//! missing file opens as an empty store. A corrupt one is first moved aside to
//! `<file>.corrupt` and then also opens empty, so its bytes survive the next
//! write.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::clock::IdClock;
use crate::api::{Course, CourseDraft, CourseId, NewTask, Task, TaskId};
use crate::db::config::JsonStoreConfig;
use crate::db::repository::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct JsonDocument {
    #[serde(rename = "ffcs-courses", default)]
    courses: Vec<Course>,
    #[serde(rename = "ffcs-tasks", default)]
    tasks: Vec<Task>,
}

impl JsonDocument {
    fn max_id(&self) -> i64 {
        let courses = self.courses.iter().map(|c| c.id.value());
        let tasks = self.tasks.iter().map(|t| t.id.value());
        courses.chain(tasks).max().unwrap_or(0)
    }
}

struct JsonState {
    document: JsonDocument,
    clock: IdClock,
}

/// File-backed repository. One async mutex serialises every read-modify-write.
pub struct JsonFileRepository {
    config: JsonStoreConfig,
    state: Mutex<JsonState>,
}

impl JsonFileRepository {
    /// Open (or lazily create) the store at `config.path`.
    pub async fn open(config: JsonStoreConfig) -> RepositoryResult<Self> {
        let document = load_document(&config.path).await?;
        info!(
            "Opened JSON store {} ({} course(s), {} task(s))",
            config.path.display(),
            document.courses.len(),
            document.tasks.len()
        );

        let clock = IdClock::starting_after(document.max_id());
        Ok(Self {
            config,
            state: Mutex::new(JsonState { document, clock }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Persist `next` and only then make it the live document, so a failed
    /// write leaves the previous state untouched.
    async fn commit(
        &self,
        state: &mut JsonState,
        next: JsonDocument,
        operation: &str,
    ) -> RepositoryResult<()> {
        self.write_document(&next)
            .await
            .map_err(|e| e.with_operation(operation))?;
        state.document = next;
        Ok(())
    }

    async fn write_document(&self, document: &JsonDocument) -> RepositoryResult<()> {
        let content = if self.config.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };

        let path = &self.config.path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, content).await?;
        tokio::fs::rename(&temp_path, path).await?;

        debug!("Wrote JSON store {}", path.display());
        Ok(())
    }
}

async fn load_document(path: &Path) -> RepositoryResult<JsonDocument> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No JSON store at {}, starting empty", path.display());
            return Ok(JsonDocument::default());
        }
        Err(e) => {
            return Err(RepositoryError::storage(
                e.to_string(),
                ErrorContext::new("open_json_store").with_details(path.display().to_string()),
            ))
        }
    };

    if content.trim().is_empty() {
        return Ok(JsonDocument::default());
    }

    match serde_json::from_str(&content) {
        Ok(document) => Ok(document),
        Err(e) => {
            let aside = corrupt_path(path);
            tokio::fs::rename(path, &aside).await.map_err(|io| {
                RepositoryError::from(io).with_operation("quarantine_json_store")
            })?;
            warn!(
                "Unreadable JSON store {} ({}); moved to {}, starting empty",
                path.display(),
                e,
                aside.display()
            );
            Ok(JsonDocument::default())
        }
    }
}

/// Where an unreadable data file is kept: the same path plus `.corrupt`.
fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".corrupt");
    PathBuf::from(name)
}

#[async_trait]
impl CourseRepository for JsonFileRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let parent = self
            .config
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Ok(tokio::fs::metadata(parent).await.is_ok())
    }

    async fn store_course(&self, draft: CourseDraft) -> RepositoryResult<Course> {
        let mut state = self.state.lock().await;
        let course = draft.into_course(CourseId::new(state.clock.next()));

        let mut next = state.document.clone();
        next.courses.push(course.clone());
        self.commit(&mut state, next, "store_course").await?;

        info!("Stored course {} '{}'", course.id, course.subject);
        Ok(course)
    }

    async fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.state.lock().await.document.courses.clone())
    }

    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course> {
        let state = self.state.lock().await;
        state
            .document
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::course_not_found("get_course", id))
    }

    async fn delete_course(&self, id: CourseId) -> RepositoryResult<bool> {
        let mut state = self.state.lock().await;
        if !state.document.courses.iter().any(|c| c.id == id) {
            debug!("Delete course {}: not present", id);
            return Ok(false);
        }

        let mut next = state.document.clone();
        next.courses.retain(|c| c.id != id);
        self.commit(&mut state, next, "delete_course").await?;
        Ok(true)
    }

    async fn clear_courses(&self) -> RepositoryResult<usize> {
        let mut state = self.state.lock().await;
        let removed = state.document.courses.len();

        let mut next = state.document.clone();
        next.courses.clear();
        self.commit(&mut state, next, "clear_courses").await?;

        info!("Cleared {} course(s)", removed);
        Ok(removed)
    }
}

#[async_trait]
impl TaskRepository for JsonFileRepository {
    async fn store_task(&self, task: NewTask) -> RepositoryResult<Task> {
        let mut state = self.state.lock().await;
        let task = Task::from_request(TaskId::new(state.clock.next()), task);

        let mut next = state.document.clone();
        next.tasks.push(task.clone());
        self.commit(&mut state, next, "store_task").await?;
        Ok(task)
    }

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.state.lock().await.document.tasks.clone())
    }

    async fn update_task(&self, id: TaskId, task: NewTask) -> RepositoryResult<Task> {
        let mut state = self.state.lock().await;
        let position = state
            .document
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| RepositoryError::task_not_found("update_task", id))?;

        let mut next = state.document.clone();
        let updated = next.tasks[position].replaced_by(task);
        next.tasks[position] = updated.clone();
        self.commit(&mut state, next, "update_task").await?;
        Ok(updated)
    }

    async fn delete_task(&self, id: TaskId) -> RepositoryResult<bool> {
        let mut state = self.state.lock().await;
        if !state.document.tasks.iter().any(|t| t.id == id) {
            return Ok(false);
        }

        let mut next = state.document.clone();
        next.tasks.retain(|t| t.id != id);
        self.commit(&mut state, next, "delete_task").await?;
        Ok(true)
    }
}
