//! Course registry storage.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Course, CourseDraft, CourseId};

/// Repository trait for the course registry.
///
/// Courses are kept in insertion order; projection relies on that order when
/// two courses claim the same slot.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust. Each
/// mutation is applied atomically: a reader never sees half of an add.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Check whether the backing store is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Append a validated course, assigning it a fresh timestamp id.
    ///
    /// # Returns
    /// * `Ok(Course)` - The stored course including its id
    /// * `Err(RepositoryError)` - If the store could not be updated
    async fn store_course(&self, draft: CourseDraft) -> RepositoryResult<Course>;

    /// Registry snapshot in insertion order.
    async fn list_courses(&self) -> RepositoryResult<Vec<Course>>;

    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no course has this id
    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course>;

    /// Remove a course. Returns whether anything was removed; an unknown id is
    /// not an error.
    async fn delete_course(&self, id: CourseId) -> RepositoryResult<bool>;

    /// Remove every course, returning how many were dropped.
    async fn clear_courses(&self) -> RepositoryResult<usize>;
}
