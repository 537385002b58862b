//! Validation failures reported at the registry boundary.

/// Rejected input. Nothing is stored when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was empty or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// One or more slot names are not in the catalog. Lists every offending
    /// name once, in the order first seen.
    #[error("not a valid FFCS slot: {}", .0.join(", "))]
    UnknownSlots(Vec<String>),
}

impl ValidationError {
    /// Offending slot names, empty for other failures.
    pub fn invalid_slots(&self) -> &[String] {
        match self {
            ValidationError::UnknownSlots(names) => names,
            ValidationError::MissingField(_) => &[],
        }
    }
}
