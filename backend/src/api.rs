//! Public API surface for the planner backend.
//!
//! Consolidates identifier types and the DTOs produced by the core services.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::analytics::WorkloadSummary;
pub use crate::routes::catalog::{SlotInfo, TopologyData};
pub use crate::routes::courses::CourseListData;
pub use crate::routes::tasks::TaskListData;
pub use crate::routes::timetable::{CellCategory, GridCell, GridRow, OccupiedSlot, TimetableData};

pub use crate::models::{
    Course, CourseDraft, Day, NewCourse, NewTask, SlotKind, SlotOccurrence, Task,
    ValidationError,
};

crate::define_id_type!(i64, CourseId);
crate::define_id_type!(i64, TaskId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&CourseId::new(42)).unwrap(), "42");
        let id: TaskId = serde_json::from_str("17").unwrap();
        assert_eq!(id.value(), 17);
        assert_eq!(id.to_string(), "17");
        assert_eq!(i64::from(CourseId::from(5)), 5);
        assert_eq!(" 1700000000000".parse::<CourseId>().unwrap().value(), 1700000000000);
        assert!("abc".parse::<TaskId>().is_err());
    }
}
