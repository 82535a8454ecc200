use serde::{Deserialize, Serialize};
use ts_rs::TS;

// One held lesson of a class, as returned by the remote API
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reports.ts")]
pub struct LessonSession {
    pub id: i64,
    pub date: chrono::NaiveDate,
}

// One per-lesson performance entry of a student. `skills` is free
// text; spelling and casing vary between operators.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reports.ts")]
pub struct SkillEntry {
    pub session_id: i64,
    pub skills: String,
}

// All performance entries of one student in one class
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reports.ts")]
pub struct StudentRecordSet {
    pub student_id: i64,
    pub student_name: String,
    pub entries: Vec<SkillEntry>,
}

// Externally fetched snapshot the weekly aggregation runs over
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reports.ts")]
pub struct ClassPerformance {
    pub class_id: i64,
    pub sessions: Vec<LessonSession>,
    pub students: Vec<StudentRecordSet>,
}
