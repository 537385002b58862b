//! Workload analytics over the course registry.

use std::collections::BTreeMap;

use crate::api::{Course, Day, SlotKind, WorkloadSummary};

/// Occurrence count divided by the total, with an empty total treated as 1.
fn share(count: usize, total: usize) -> f64 {
    count as f64 / total.max(1) as f64
}

/// Reduce a registry snapshot to its workload summary.
///
/// Every course contributes each of its occurrences once. Days outside the
/// work week are not counted in the histogram.
pub fn summarize_workload(courses: &[Course]) -> WorkloadSummary {
    let mut daily_histogram: BTreeMap<Day, usize> =
        Day::WORK_WEEK.iter().map(|day| (*day, 0)).collect();
    let mut theory_count = 0;
    let mut lab_count = 0;

    for slot in courses.iter().flat_map(|c| c.slots.iter()) {
        match slot.kind {
            SlotKind::Theory => theory_count += 1,
            SlotKind::Lab => lab_count += 1,
        }
        if let Some(count) = daily_histogram.get_mut(&slot.day) {
            *count += 1;
        }
    }

    let total_weekly_hours = theory_count + lab_count;
    let peak_daily_load = daily_histogram.values().copied().max().unwrap_or(0).max(1);

    WorkloadSummary {
        total_courses: courses.len(),
        total_slot_names: courses.iter().map(|c| c.slot_names.len()).sum(),
        theory_count,
        lab_count,
        total_weekly_hours,
        theory_share: share(theory_count, total_weekly_hours),
        lab_share: share(lab_count, total_weekly_hours),
        daily_histogram,
        peak_daily_load,
    }
}

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod analytics_tests;
