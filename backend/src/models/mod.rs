pub mod macros;
pub mod catalog;
pub mod course;
pub mod slot;
pub mod task;
pub mod topology;
pub mod validation;

pub use catalog::*;
pub use course::*;
pub use slot::*;
pub use task::*;
pub use topology::*;
pub use validation::*;
