//! Weekly grid topology: the fixed matrix of cell labels the timetable is
//! rendered from.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::catalog::{SlotCatalog, LAB_TIME_RANGES, THEORY_TIME_RANGES};
use super::slot::{Day, SlotKind};

/// Separator between the theory and lab halves of a dual label.
pub const DUAL_SEPARATOR: char = '/';

/// Reserved first letter of lab slot names, used only for names the catalog
/// does not know.
pub const LAB_PREFIX: char = 'L';

/// Render position of the lunch break in the standard grid.
pub const STANDARD_LUNCH_COLUMN: usize = 6;

const STANDARD_ROWS: [(Day, [&str; 12]); 5] = [
    (
        Day::Mon,
        [
            "A1/L1", "F1/L2", "D1/L3", "TB1/L4", "TG1/L5", "L6", "A2/L31", "F2/L32", "D2/L33",
            "TB2/L34", "TG2/L35", "L36",
        ],
    ),
    (
        Day::Tue,
        [
            "B1/L7", "G1/L8", "E1/L9", "TC1/L10", "TAA1/L11", "L12", "B2/L37", "G2/L38", "E2/L39",
            "TC2/L40", "TAA2/L41", "L42",
        ],
    ),
    (
        Day::Wed,
        [
            "C1/L13", "F1/L14", "V1/L15", "V2/L16", "TE1/L17", "L18", "C2/L43", "A2/L44",
            "F2/L45", "TD2/L46", "TBB2/L47", "L48",
        ],
    ),
    (
        Day::Thu,
        [
            "D1/L19", "B1/L20", "G1/L21", "TCC1/L22", "V3/L23", "L24", "D2/L49", "B2/L50",
            "G2/L51", "TE2/L52", "TCC2/L53", "L54",
        ],
    ),
    (
        Day::Fri,
        [
            "E1/L25", "C1/L26", "TA1/L27", "TF1/L28", "TD1/L29", "L30", "E2/L55", "C2/L56",
            "TA2/L57", "TF2/L58", "TDD2/L59", "L60",
        ],
    ),
];

/// Errors raised while assembling a custom topology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("row {day} has {found} cells, expected {expected}")]
    RowWidth {
        day: Day,
        expected: usize,
        found: usize,
    },
    #[error("lunch column {lunch_column} is outside 0..={columns}")]
    LunchOutOfRange { lunch_column: usize, columns: usize },
    #[error("day {0} appears more than once")]
    DuplicateDay(Day),
}

/// Parsed form of a cell label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellLabel {
    Theory { name: String },
    Lab { name: String },
    Dual { theory: String, lab: String },
}

impl CellLabel {
    /// Parse a raw label.
    ///
    /// Split on `/`: one part is a theory name unless it is a lab name, two
    /// parts are `theory/lab`. Lab-ness comes from the catalog's kind; unknown
    /// names fall back to the [`LAB_PREFIX`] convention.
    pub fn parse(label: &str, catalog: &SlotCatalog) -> Self {
        let mut parts = label.split(DUAL_SEPARATOR);
        let first = parts.next().unwrap_or_default().to_string();
        match parts.next() {
            Some(second) => CellLabel::Dual {
                theory: first,
                lab: second.to_string(),
            },
            None => {
                let is_lab = match catalog.kind_of(&first) {
                    Some(kind) => kind == SlotKind::Lab,
                    None => first.starts_with(LAB_PREFIX),
                };
                if is_lab {
                    CellLabel::Lab { name: first }
                } else {
                    CellLabel::Theory { name: first }
                }
            }
        }
    }

    pub fn theory_name(&self) -> Option<&str> {
        match self {
            CellLabel::Theory { name } => Some(name),
            CellLabel::Dual { theory, .. } => Some(theory),
            CellLabel::Lab { .. } => None,
        }
    }

    pub fn lab_name(&self) -> Option<&str> {
        match self {
            CellLabel::Lab { name } => Some(name),
            CellLabel::Dual { lab, .. } => Some(lab),
            CellLabel::Theory { .. } => None,
        }
    }
}

/// Time headers for one non-lunch column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumn {
    /// Theory period, absent for lab-only columns.
    pub theory_time: Option<String>,
    pub lab_time: String,
}

impl GridColumn {
    pub fn new(theory_time: Option<&str>, lab_time: &str) -> Self {
        Self {
            theory_time: theory_time.map(str::to_string),
            lab_time: lab_time.to_string(),
        }
    }
}

/// A labelled cell, keeping the raw label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyCell {
    pub label: String,
    pub parsed: CellLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyRow {
    pub day: Day,
    pub cells: Vec<TopologyCell>,
}

/// Static description of the weekly matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTopology {
    columns: Vec<GridColumn>,
    rows: Vec<TopologyRow>,
    lunch_column: usize,
}

impl GridTopology {
    /// The institution's standard grid, parsed against the standard catalog.
    pub fn standard() -> &'static GridTopology {
        static STANDARD: OnceLock<GridTopology> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let rows = STANDARD_ROWS
                .iter()
                .map(|(day, labels)| (*day, labels.iter().map(|l| l.to_string()).collect()))
                .collect();
            Self::assemble(
                standard_columns(),
                STANDARD_LUNCH_COLUMN,
                rows,
                SlotCatalog::standard(),
            )
        })
    }

    /// Build a topology from raw labels, one row per day.
    ///
    /// Every row must have exactly one label per column and no day may repeat.
    pub fn new(
        columns: Vec<GridColumn>,
        lunch_column: usize,
        rows: Vec<(Day, Vec<String>)>,
        catalog: &SlotCatalog,
    ) -> Result<Self, TopologyError> {
        if lunch_column > columns.len() {
            return Err(TopologyError::LunchOutOfRange {
                lunch_column,
                columns: columns.len(),
            });
        }

        let mut seen = Vec::with_capacity(rows.len());
        for (day, labels) in &rows {
            if seen.contains(day) {
                return Err(TopologyError::DuplicateDay(*day));
            }
            seen.push(*day);
            if labels.len() != columns.len() {
                return Err(TopologyError::RowWidth {
                    day: *day,
                    expected: columns.len(),
                    found: labels.len(),
                });
            }
        }

        Ok(Self::assemble(columns, lunch_column, rows, catalog))
    }

    fn assemble(
        columns: Vec<GridColumn>,
        lunch_column: usize,
        rows: Vec<(Day, Vec<String>)>,
        catalog: &SlotCatalog,
    ) -> Self {
        let rows = rows
            .into_iter()
            .map(|(day, labels)| TopologyRow {
                day,
                cells: labels
                    .into_iter()
                    .map(|label| TopologyCell {
                        parsed: CellLabel::parse(&label, catalog),
                        label,
                    })
                    .collect(),
            })
            .collect();

        Self {
            columns,
            rows,
            lunch_column,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.rows.iter().map(|r| r.day)
    }

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[TopologyRow] {
        &self.rows
    }

    pub fn row(&self, day: Day) -> Option<&TopologyRow> {
        self.rows.iter().find(|r| r.day == day)
    }

    pub fn cell(&self, day: Day, column: usize) -> Option<&TopologyCell> {
        self.row(day).and_then(|r| r.cells.get(column))
    }

    /// Render index of the lunch break: cells `0..lunch_column` come before it.
    pub fn lunch_column(&self) -> usize {
        self.lunch_column
    }

    /// Theory headers in column order, skipping lab-only columns.
    pub fn theory_headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter_map(|c| c.theory_time.as_deref())
            .collect()
    }

    pub fn lab_headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.lab_time.as_str()).collect()
    }
}

/// Column `i` carries lab period `i`; the last column of each half is lab-only.
fn standard_columns() -> Vec<GridColumn> {
    let half = LAB_TIME_RANGES.len() / 2;
    let theory_per_half = THEORY_TIME_RANGES.len() / 2;
    LAB_TIME_RANGES
        .iter()
        .enumerate()
        .map(|(i, lab)| {
            let (h, offset) = (i / half, i % half);
            let theory = (offset < theory_per_half)
                .then(|| THEORY_TIME_RANGES[h * theory_per_half + offset]);
            GridColumn::new(theory, lab)
        })
        .collect()
}
