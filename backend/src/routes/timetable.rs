use serde::{Deserialize, Serialize};

use crate::api::Day;

// =========================================================
// Timetable projection types
// =========================================================

/// Projection input: one entry per slot occurrence of a registered course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedSlot {
    pub slot_name: String,
    pub subject: String,
}

impl OccupiedSlot {
    pub fn new(slot_name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            slot_name: slot_name.into(),
            subject: subject.into(),
        }
    }
}

/// Visual category of a cell, derived only from its two occupancy flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellCategory {
    Empty,
    Theory,
    Lab,
    Both,
}

impl CellCategory {
    pub fn from_flags(theory_active: bool, lab_active: bool) -> Self {
        match (theory_active, lab_active) {
            (false, false) => CellCategory::Empty,
            (true, false) => CellCategory::Theory,
            (false, true) => CellCategory::Lab,
            (true, true) => CellCategory::Both,
        }
    }
}

/// Occupancy of one topology cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub day: Day,
    /// Column index among the non-lunch columns.
    pub column: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_name: Option<String>,
    pub theory_active: bool,
    pub lab_active: bool,
    /// Owning subject, only when it differs from the slot name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_subject: Option<String>,
    pub category: CellCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub day: Day,
    pub cells: Vec<GridCell>,
}

/// Rendered timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableData {
    pub theory_headers: Vec<String>,
    pub lab_headers: Vec<String>,
    /// Cells `0..lunch_column` of each row render before the lunch break.
    pub lunch_column: usize,
    pub rows: Vec<GridRow>,
    /// Number of cells with at least one active half.
    pub occupied_cells: usize,
}

pub const GET_TIMETABLE: &str = "get_timetable";
