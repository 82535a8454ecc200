use serde::{Deserialize, Serialize};
use ts_rs::TS;

// An enrolled student
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub class_id: i64,
}

// A class of students
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
}

// One scheduled class meeting, with its own task list and
// performance records
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct Lesson {
    pub id: i64,
    pub class_id: i64,
    pub date: chrono::NaiveDate,
    // comma-separated task list as entered by the operator
    pub task_list: Option<String>,
}
