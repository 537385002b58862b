//! Free-text planning entries (slot + professor wish list).

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;
use crate::api::TaskId;

/// Create or edit request for a task. Both fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub professor: String,
}

impl NewTask {
    pub fn new(slot: impl Into<String>, professor: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            professor: professor.into(),
        }
    }

    /// Trim both fields, rejecting blanks. Slot text is not checked against
    /// the catalog.
    pub fn validated(&self) -> Result<NewTask, ValidationError> {
        let slot = self.slot.trim();
        if slot.is_empty() {
            return Err(ValidationError::MissingField("slot"));
        }
        let professor = self.professor.trim();
        if professor.is_empty() {
            return Err(ValidationError::MissingField("professor"));
        }
        Ok(NewTask::new(slot, professor))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub slot: String,
    pub professor: String,
}

impl Task {
    pub fn from_request(id: TaskId, request: NewTask) -> Self {
        Self {
            id,
            slot: request.slot,
            professor: request.professor,
        }
    }

    /// Same id, new details.
    pub fn replaced_by(&self, request: NewTask) -> Self {
        Self::from_request(self.id, request)
    }
}
