use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::{
    grading::{entities::PerformanceRecord, responses::SaveTaskListResponse},
    reports::entities::{LessonSession, StudentRecordSet},
    roster::entities::Student,
};

pub mod rest_storage;

/// Remote persistence collaborator of the grading core.
///
/// Everything behind this trait lives in the tutoring-center API;
/// the core treats it as a black box. One attempt per call, no
/// retries: failures are surfaced to the operator, who re-triggers
/// manually.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Roster lookup
    // Resolve a student by display name within a class
    async fn resolve_student(&self, class_id: i64, name: &str) -> Result<Option<Student>>;

    /// Task-list persistence
    // Save the raw comma-separated task list of a lesson document,
    // returning the server-confirmed task count
    async fn save_task_list(
        &self,
        lesson_id: i64,
        raw_task_list: &str,
    ) -> Result<SaveTaskListResponse>;

    /// Performance persistence
    // Upsert one performance record, keyed by (student_id, lesson_id);
    // a later save for the same pair replaces the earlier record
    async fn save_performance(&self, record: &PerformanceRecord) -> Result<()>;

    /// Dashboard fetches
    // Lesson sessions of a class within a date range (inclusive)
    async fn list_lesson_sessions(
        &self,
        class_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LessonSession>>;
    // Per-student performance entries of a class
    async fn list_performance_entries(&self, class_id: i64) -> Result<Vec<StudentRecordSet>>;
}

pub fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = rest_storage::RestStorage::from_config()?;
    Ok(Arc::new(storage))
}
