//! REST storage implementation.
//!
//! Thin client over the tutoring-center API. Every call is a single
//! attempt; retry policy belongs to the operator, not this layer.

mod grading;
mod reports;
mod roster;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use ts_rs::TS;

use crate::config::AppConfig;
use crate::errors::{Result, TutorCenterError};
use crate::models::ApiResponse;
use crate::models::grading::entities::PerformanceRecord;
use crate::models::grading::responses::SaveTaskListResponse;
use crate::models::reports::entities::{LessonSession, StudentRecordSet};
use crate::models::roster::entities::Student;
use crate::storage::Storage;

/// REST-backed storage client.
#[derive(Clone)]
pub struct RestStorage {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
    pub(crate) roster_page_size: i64,
}

impl RestStorage {
    /// Build a client from the global configuration.
    pub fn from_config() -> Result<Self> {
        let config = AppConfig::get();
        let storage = Self::new(
            &config.api.base_url,
            &config.api.token,
            Duration::from_secs(config.api.timeout),
            config.grading.roster_page_size,
        )?;
        info!("REST storage initialized, base URL: {}", storage.base_url);
        Ok(storage)
    }

    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
        roster_page_size: i64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TutorCenterError::config(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            roster_page_size,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get_json<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + TS,
    {
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .json::<ApiResponse<T>>()
            .await?;
        Ok(response)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + TS,
    {
        let response = self
            .http
            .put(self.endpoint(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?
            .json::<ApiResponse<T>>()
            .await?;
        Ok(response)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + TS,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?
            .json::<ApiResponse<T>>()
            .await?;
        Ok(response)
    }
}

// Storage trait implementation
#[async_trait::async_trait]
impl Storage for RestStorage {
    async fn resolve_student(&self, class_id: i64, name: &str) -> Result<Option<Student>> {
        self.resolve_student_impl(class_id, name).await
    }

    async fn save_task_list(
        &self,
        lesson_id: i64,
        raw_task_list: &str,
    ) -> Result<SaveTaskListResponse> {
        self.save_task_list_impl(lesson_id, raw_task_list).await
    }

    async fn save_performance(&self, record: &PerformanceRecord) -> Result<()> {
        self.save_performance_impl(record).await
    }

    async fn list_lesson_sessions(
        &self,
        class_id: i64,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    ) -> Result<Vec<LessonSession>> {
        self.list_lesson_sessions_impl(class_id, from, to).await
    }

    async fn list_performance_entries(&self, class_id: i64) -> Result<Vec<StudentRecordSet>> {
        self.list_performance_entries_impl(class_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let storage = RestStorage::new(
            "https://api.tutorcenter.vn/v1/",
            "token",
            Duration::from_secs(10),
            200,
        )
        .unwrap();
        assert_eq!(
            storage.endpoint("/classes/1/students"),
            "https://api.tutorcenter.vn/v1/classes/1/students"
        );
    }
}
