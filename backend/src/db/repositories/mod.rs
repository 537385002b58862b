//! Repository implementations.
//!
//! - [`local`]: In-memory storage for tests and throwaway sessions (`local-repo` feature)
//! - [`json_file`]: Single JSON document on disk (`json-repo` feature)

mod clock;

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "json-repo")]
pub mod json_file;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;

#[cfg(feature = "json-repo")]
pub use json_file::JsonFileRepository;
