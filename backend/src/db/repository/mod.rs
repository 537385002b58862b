//! Repository trait definitions.
//!
//! - [`error`]: Error types for repository operations
//! - [`courses`]: The course registry
//! - [`tasks`]: Free-text planning tasks
//!
//! For functions that need both, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn reset<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     repo.clear_courses().await?;
//!     Ok(())
//! }
//! ```

pub mod courses;
pub mod error;
pub mod tasks;

pub use courses::CourseRepository;
pub use error::{EntityRef, ErrorContext, RepositoryError, RepositoryResult};
pub use tasks::TaskRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: CourseRepository + TaskRepository {}

// Blanket implementation: any type implementing both traits is a FullRepository
impl<T> FullRepository for T where T: CourseRepository + TaskRepository {}
