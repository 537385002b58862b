//! Day codes, slot kinds and resolved slot occurrences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week as used by the FFCS grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Days counted by the workload histogram.
    pub const WORK_WEEK: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Three-letter uppercase code (`"MON"`, `"TUE"`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
            Day::Sat => "SAT",
            Day::Sun => "SUN",
        }
    }

    pub fn is_work_day(&self) -> bool {
        Self::WORK_WEEK.contains(self)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MON" | "MONDAY" => Ok(Day::Mon),
            "TUE" | "TUESDAY" => Ok(Day::Tue),
            "WED" | "WEDNESDAY" => Ok(Day::Wed),
            "THU" | "THURSDAY" => Ok(Day::Thu),
            "FRI" | "FRIDAY" => Ok(Day::Fri),
            "SAT" | "SATURDAY" => Ok(Day::Sat),
            "SUN" | "SUNDAY" => Ok(Day::Sun),
            other => Err(format!("Unknown day code: {}", other)),
        }
    }
}

/// Which half of a dual cell an occurrence fills.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Theory,
    Lab,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Theory => "theory",
            SlotKind::Lab => "lab",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete (day, time-range, kind) instance of a named slot.
///
/// Only the [`SlotCatalog`](super::catalog::SlotCatalog) constructs these, so
/// `slot_name` is always a catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotOccurrence {
    // Older snapshots used `name`, `time` and `type`.
    #[serde(alias = "name")]
    pub slot_name: String,
    pub day: Day,
    #[serde(alias = "time")]
    pub time_range: String,
    #[serde(alias = "type")]
    pub kind: SlotKind,
}

impl SlotOccurrence {
    pub(crate) fn new(
        slot_name: impl Into<String>,
        day: Day,
        time_range: impl Into<String>,
        kind: SlotKind,
    ) -> Self {
        Self {
            slot_name: slot_name.into(),
            day,
            time_range: time_range.into(),
            kind,
        }
    }

    pub fn is_theory(&self) -> bool {
        self.kind == SlotKind::Theory
    }

    pub fn is_lab(&self) -> bool {
        self.kind == SlotKind::Lab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_round_trips_through_code() {
        for day in [
            Day::Mon,
            Day::Tue,
            Day::Wed,
            Day::Thu,
            Day::Fri,
            Day::Sat,
            Day::Sun,
        ] {
            assert_eq!(day.code().parse::<Day>().unwrap(), day);
        }
        assert_eq!("monday".parse::<Day>().unwrap(), Day::Mon);
        assert!("XYZ".parse::<Day>().is_err());
    }

    #[test]
    fn test_work_week() {
        assert!(Day::Fri.is_work_day());
        assert!(!Day::Sat.is_work_day());
        assert_eq!(Day::WORK_WEEK.len(), 5);
    }

    #[test]
    fn test_day_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Day::Wed).unwrap(), "\"WED\"");
    }

    #[test]
    fn test_occurrence_accepts_legacy_field_names() {
        let json = r#"{"name":"L1","day":"MON","time":"08:00 to 08:50","type":"lab"}"#;
        let occurrence: SlotOccurrence = serde_json::from_str(json).unwrap();
        assert_eq!(occurrence.kind, SlotKind::Lab);
        assert!(occurrence.is_lab());

        assert_eq!(occurrence.slot_name, "L1");
        assert_eq!(occurrence.time_range, "08:00 to 08:50");

        let out = serde_json::to_value(&occurrence).unwrap();
        assert_eq!(out["slotName"], "L1");
        assert_eq!(out["kind"], "lab");
        assert_eq!(out["timeRange"], "08:00 to 08:50");
    }
}
