//! Task-list and performance persistence.

use serde_json::Value;
use tracing::debug;

use super::RestStorage;
use crate::errors::Result;
use crate::models::grading::entities::PerformanceRecord;
use crate::models::grading::requests::{SavePerformanceRequest, SaveTaskListRequest};
use crate::models::grading::responses::SaveTaskListResponse;

impl RestStorage {
    /// Save the raw task list onto a lesson document.
    pub(crate) async fn save_task_list_impl(
        &self,
        lesson_id: i64,
        raw_task_list: &str,
    ) -> Result<SaveTaskListResponse> {
        let request = SaveTaskListRequest {
            lesson_id,
            task_list: raw_task_list.to_string(),
        };
        let response = self
            .put_json::<_, SaveTaskListResponse>(
                &format!("/lessons/{lesson_id}/task-list"),
                &request,
            )
            .await?;
        response.into_data()
    }

    /// Upsert one performance record, keyed by (student_id, lesson_id).
    pub(crate) async fn save_performance_impl(&self, record: &PerformanceRecord) -> Result<()> {
        let request = SavePerformanceRequest {
            record: record.clone(),
        };
        let response = self
            .post_json::<_, Value>(
                &format!("/lessons/{}/performances", record.lesson_id),
                &request,
            )
            .await?;
        response.ensure_success()?;
        debug!(
            lesson_id = record.lesson_id,
            student_id = record.student_id,
            "performance record upserted"
        );
        Ok(())
    }
}
