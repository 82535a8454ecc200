//! Dashboard data fetches.

use chrono::NaiveDate;

use super::RestStorage;
use crate::errors::Result;
use crate::models::reports::entities::{LessonSession, StudentRecordSet};

impl RestStorage {
    /// Lesson sessions of a class within an inclusive date range.
    pub(crate) async fn list_lesson_sessions_impl(
        &self,
        class_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LessonSession>> {
        let response = self
            .get_json::<Vec<LessonSession>>(
                &format!("/classes/{class_id}/sessions"),
                &[("from", from.to_string()), ("to", to.to_string())],
            )
            .await?;
        response.into_data()
    }

    /// Per-student performance entries of a class.
    pub(crate) async fn list_performance_entries_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<StudentRecordSet>> {
        let response = self
            .get_json::<Vec<StudentRecordSet>>(
                &format!("/classes/{class_id}/performance-entries"),
                &[],
            )
            .await?;
        response.into_data()
    }
}
