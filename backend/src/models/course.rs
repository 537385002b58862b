//! Courses and the slot-combination expansion that creates them.

use serde::{Deserialize, Serialize};

use super::catalog::SlotCatalog;
use super::slot::SlotOccurrence;
use super::validation::ValidationError;
use crate::api::{CourseId, OccupiedSlot};

/// Professor recorded when none is given.
pub const DEFAULT_PROFESSOR: &str = "N/A";

/// Joins slot names in a combo string (`"A1+TA1"`).
pub const COMBO_SEPARATOR: char = '+';

/// Split a free-text combo into candidate slot names.
///
/// Uppercases, splits on `+`, trims and drops empty parts. Order and
/// duplicates are kept.
pub fn parse_slot_combo(combo: &str) -> Vec<String> {
    combo
        .to_uppercase()
        .split(COMBO_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Add-course request as submitted by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub slot_combo: String,
    #[serde(default)]
    pub professor: Option<String>,
}

impl NewCourse {
    pub fn new(subject: impl Into<String>, slot_combo: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            slot_combo: slot_combo.into(),
            professor: None,
        }
    }

    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = Some(professor.into());
        self
    }
}

/// A fully validated course that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    subject: String,
    professor: String,
    slot_names: Vec<String>,
    slots: Vec<SlotOccurrence>,
}

impl CourseDraft {
    /// Validate a request and expand its combo against the catalog.
    ///
    /// All-or-nothing: when any name is unknown the whole request is rejected
    /// and every unknown name is reported.
    pub fn resolve(request: &NewCourse, catalog: &SlotCatalog) -> Result<Self, ValidationError> {
        let subject = request.subject.trim();
        if subject.is_empty() {
            return Err(ValidationError::MissingField("subject"));
        }

        let slot_names = parse_slot_combo(&request.slot_combo);
        if slot_names.is_empty() {
            return Err(ValidationError::MissingField("slots"));
        }

        let mut invalid: Vec<String> = Vec::new();
        let mut slots = Vec::new();
        for name in &slot_names {
            match catalog.lookup(name) {
                Some(occurrences) => slots.extend_from_slice(occurrences),
                None if !invalid.contains(name) => invalid.push(name.clone()),
                None => {}
            }
        }
        if !invalid.is_empty() {
            return Err(ValidationError::UnknownSlots(invalid));
        }

        let professor = request
            .professor
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROFESSOR)
            .to_string();

        Ok(Self {
            subject: subject.to_string(),
            professor,
            slot_names,
            slots,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn slot_names(&self) -> &[String] {
        &self.slot_names
    }

    pub fn slots(&self) -> &[SlotOccurrence] {
        &self.slots
    }

    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            subject: self.subject,
            professor: self.professor,
            slot_names: self.slot_names,
            slots: self.slots,
        }
    }
}

/// A course in the registry. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub subject: String,
    pub professor: String,
    pub slot_names: Vec<String>,
    pub slots: Vec<SlotOccurrence>,
}

impl Course {
    /// One projection entry per occurrence, tagged with this course's subject.
    pub fn occupied_slots(&self) -> impl Iterator<Item = OccupiedSlot> + '_ {
        self.slots.iter().map(|slot| OccupiedSlot {
            slot_name: slot.slot_name.clone(),
            subject: self.subject.clone(),
        })
    }

    /// Slot names joined the way they were entered, e.g. `"A1 + TA1"`.
    pub fn slot_summary(&self) -> String {
        self.slot_names.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::{Day, SlotKind};

    #[test]
    fn test_parse_slot_combo() {
        assert_eq!(parse_slot_combo("a1+ta1"), vec!["A1", "TA1"]);
        assert_eq!(parse_slot_combo(" L1 + L2 ++ "), vec!["L1", "L2"]);
        assert_eq!(parse_slot_combo("A1+A1"), vec!["A1", "A1"]);
        assert!(parse_slot_combo(" + ").is_empty());
        assert!(parse_slot_combo("").is_empty());
    }

    #[test]
    fn test_resolve_expands_in_name_order() {
        let catalog = SlotCatalog::standard();
        let draft = CourseDraft::resolve(&NewCourse::new("Compilers", "b1+L7"), catalog).unwrap();
        assert_eq!(draft.slot_names(), ["B1".to_string(), "L7".to_string()]);

        let expected_len =
            catalog.lookup("B1").unwrap().len() + catalog.lookup("L7").unwrap().len();
        assert_eq!(draft.slots().len(), expected_len);
        assert_eq!(draft.slots()[0].slot_name, "B1");
        assert_eq!(draft.slots()[0].day, Day::Tue);
        assert_eq!(draft.slots()[1].day, Day::Thu);
        assert_eq!(draft.slots()[2].kind, SlotKind::Lab);
    }

    #[test]
    fn test_resolve_defaults_professor() {
        let catalog = SlotCatalog::standard();
        let course = CourseDraft::resolve(&NewCourse::new("AI", "A1"), catalog)
            .unwrap()
            .into_course(CourseId::new(7));
        assert_eq!(course.professor, DEFAULT_PROFESSOR);

        let course = CourseDraft::resolve(&NewCourse::new("AI", "A1").with_professor("   "), catalog)
            .unwrap()
            .into_course(CourseId::new(8));
        assert_eq!(course.professor, DEFAULT_PROFESSOR);

        let course =
            CourseDraft::resolve(&NewCourse::new("AI", "A1").with_professor("Dr. X"), catalog)
                .unwrap()
                .into_course(CourseId::new(9));
        assert_eq!(course.professor, "Dr. X");
        assert_eq!(course.id.value(), 9);
    }

    #[test]
    fn test_resolve_rejects_missing_fields() {
        let catalog = SlotCatalog::standard();
        assert_eq!(
            CourseDraft::resolve(&NewCourse::new("  ", "A1"), catalog),
            Err(ValidationError::MissingField("subject"))
        );
        assert_eq!(
            CourseDraft::resolve(&NewCourse::new("AI", " + "), catalog),
            Err(ValidationError::MissingField("slots"))
        );
    }

    #[test]
    fn test_resolve_reports_every_unknown_name() {
        let catalog = SlotCatalog::standard();
        let err = CourseDraft::resolve(&NewCourse::new("AI", "A1+ZZ9+q7+zz9"), catalog).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownSlots(vec!["ZZ9".to_string(), "Q7".to_string()])
        );
    }

    #[test]
    fn test_duplicates_are_expanded_twice() {
        let draft = CourseDraft::resolve(&NewCourse::new("AI", "A1+A1"), SlotCatalog::standard())
            .unwrap();
        assert_eq!(draft.slot_names().len(), 2);
        assert_eq!(draft.slots().len(), 2);
    }

    #[test]
    fn test_occupied_slots_one_per_occurrence() {
        let course = CourseDraft::resolve(&NewCourse::new("Physics", "C1+L13"), SlotCatalog::standard())
            .unwrap()
            .into_course(CourseId::new(1));
        let occupied: Vec<OccupiedSlot> = course.occupied_slots().collect();
        assert_eq!(occupied.len(), 3);
        assert!(occupied.iter().all(|o| o.subject == "Physics"));
        assert_eq!(course.slot_summary(), "C1 + L13");
    }

    #[test]
    fn test_course_json_shape() {
        let course = CourseDraft::resolve(&NewCourse::new("AI", "A1"), SlotCatalog::standard())
            .unwrap()
            .into_course(CourseId::new(1700000000000));
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["id"], 1700000000000i64);
        assert_eq!(value["slotNames"][0], "A1");
        assert_eq!(value["slots"][0]["slotName"], "A1");
        assert_eq!(value["slots"][0]["day"], "MON");

        let back: Course = serde_json::from_value(value).unwrap();
        assert_eq!(back, course);
    }

    #[test]
    fn test_legacy_course_record_parses() {
        let json = r#"{
            "id": 1700000000000,
            "subject": "AI",
            "professor": "N/A",
            "slots": [{"name": "B1", "day": "TUE", "time": "08:00 to 08:50", "type": "theory"}],
            "slotNames": ["B1"]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.slots[0].slot_name, "B1");
        assert_eq!(course.slots[0].kind, SlotKind::Theory);
        assert_eq!(course.occupied_slots().next().unwrap().slot_name, "B1");
    }

    #[test]
    fn test_new_course_request_shape() {
        let request: NewCourse =
            serde_json::from_str(r#"{"subject":"AI","slotCombo":"A1+TA1"}"#).unwrap();
        assert_eq!(request.slot_combo, "A1+TA1");
        assert!(request.professor.is_none());

        // missing fields reach validation instead of failing to parse
        let request: NewCourse = serde_json::from_str(r#"{"subject":"AI"}"#).unwrap();
        assert!(request.slot_combo.is_empty());
    }
}
