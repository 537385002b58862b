use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::Day;

// =========================================================
// Workload analytics types
// =========================================================

/// Workload summary over every registered course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSummary {
    pub total_courses: usize,
    /// Sum of each course's slot-name count (not deduplicated across courses).
    pub total_slot_names: usize,
    pub theory_count: usize,
    pub lab_count: usize,
    /// Theory plus lab occurrences, one period each.
    pub total_weekly_hours: usize,
    /// Theory occurrences over all occurrences (0.0 when there are none).
    pub theory_share: f64,
    pub lab_share: f64,
    /// Occurrences per work-week day; all five days are always present.
    pub daily_histogram: BTreeMap<Day, usize>,
    /// Largest daily count, never below 1 so it can scale a bar chart.
    pub peak_daily_load: usize,
}

pub const GET_ANALYTICS: &str = "get_analytics";
