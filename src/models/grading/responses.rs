use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Server confirmation for a saved task list
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct SaveTaskListResponse {
    // number of tasks the server stored for the lesson
    pub total_task_length: i64,
}
