use serde::{Deserialize, Serialize};
use ts_rs::TS;

// One bar of the weekly stacked-bar dashboard chart: per-tier student
// counts for one class and one week. Never persisted; recomputed per
// query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reports.ts")]
pub struct WeeklySkillDistribution {
    pub class_id: i64,
    pub week_start: chrono::NaiveDate,
    pub week_end: chrono::NaiveDate,
    // students whose aggregated weekly skill is "Tốt"
    pub tot_count: i64,
    // students whose aggregated weekly skill is "Khá"
    pub kha_count: i64,
    // students whose aggregated weekly skill is "Trung bình"
    pub trung_binh_count: i64,
    // all roster students, including those with no recognized votes
    pub total_students: i64,
}
