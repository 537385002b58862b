//! Grid projection engine.
//!
//! Overlays the flattened `{slotName, subject}` list on the topology and
//! decides for every cell which halves are occupied and by whom.

use log::debug;
use std::collections::HashMap;

use crate::api::{CellCategory, Course, Day, GridCell, GridRow, OccupiedSlot, TimetableData};
use crate::models::{GridTopology, TopologyCell};

/// One entry per occurrence of every course, in registry order.
pub fn flatten_occupancy(courses: &[Course]) -> Vec<OccupiedSlot> {
    courses.iter().flat_map(Course::occupied_slots).collect()
}

/// Slot name → owning subject. Conflicts are not detected; the first entry
/// for a name wins.
fn subject_index(occupied: &[OccupiedSlot]) -> HashMap<&str, &str> {
    let mut index = HashMap::with_capacity(occupied.len());
    for slot in occupied {
        index
            .entry(slot.slot_name.as_str())
            .or_insert(slot.subject.as_str());
    }
    index
}

/// Subject worth displaying: only when it differs from the slot name.
fn display_subject(name: &str, subject: &str) -> Option<String> {
    (subject != name).then(|| subject.to_string())
}

fn project_cell(
    day: Day,
    column: usize,
    cell: &TopologyCell,
    index: &HashMap<&str, &str>,
) -> GridCell {
    let theory_name = cell.parsed.theory_name();
    let lab_name = cell.parsed.lab_name();

    let theory_hit = theory_name.and_then(|name| index.get(name).map(|subject| (name, *subject)));
    let lab_hit = lab_name.and_then(|name| index.get(name).map(|subject| (name, *subject)));

    let theory_active = theory_hit.is_some();
    let lab_active = lab_hit.is_some();

    GridCell {
        day,
        column,
        label: cell.label.clone(),
        theory_name: theory_name.map(str::to_string),
        lab_name: lab_name.map(str::to_string),
        theory_active,
        lab_active,
        theory_subject: theory_hit.and_then(|(name, subject)| display_subject(name, subject)),
        lab_subject: lab_hit.and_then(|(name, subject)| display_subject(name, subject)),
        category: CellCategory::from_flags(theory_active, lab_active),
    }
}

/// Project occupancy onto every cell of the topology.
///
/// Total over any input: names that match no cell are ignored and an empty
/// list yields an all-empty grid. Calling it twice with the same input gives
/// identical output.
pub fn project_grid(topology: &GridTopology, occupied: &[OccupiedSlot]) -> TimetableData {
    let index = subject_index(occupied);

    let rows: Vec<GridRow> = topology
        .rows()
        .iter()
        .map(|row| GridRow {
            day: row.day,
            cells: row
                .cells
                .iter()
                .enumerate()
                .map(|(column, cell)| project_cell(row.day, column, cell, &index))
                .collect(),
        })
        .collect();

    let occupied_cells = rows
        .iter()
        .flat_map(|row| row.cells.iter())
        .filter(|cell| cell.category != CellCategory::Empty)
        .count();

    debug!(
        "Projected {} occupied slot(s) onto {} row(s), {} cell(s) active",
        occupied.len(),
        rows.len(),
        occupied_cells
    );

    TimetableData {
        theory_headers: topology
            .theory_headers()
            .into_iter()
            .map(str::to_string)
            .collect(),
        lab_headers: topology
            .lab_headers()
            .into_iter()
            .map(str::to_string)
            .collect(),
        lunch_column: topology.lunch_column(),
        rows,
        occupied_cells,
    }
}

/// Convenience wrapper: flatten a registry snapshot and project it.
pub fn project_courses(topology: &GridTopology, courses: &[Course]) -> TimetableData {
    project_grid(topology, &flatten_occupancy(courses))
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod projection_tests;
