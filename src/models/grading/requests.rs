use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::PerformanceRecord;

// Task-list save request for a lesson document
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct SaveTaskListRequest {
    pub lesson_id: i64,
    // the raw comma-separated list as entered, not the parsed form;
    // the server is the authority on the stored shape
    pub task_list: String,
}

// Performance upsert request, keyed by (student_id, lesson_id)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct SavePerformanceRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub record: PerformanceRecord,
}
