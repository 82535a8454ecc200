use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, TutorCenterError};

/// Response codes used by the remote tutoring-center API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,
}

// Response envelope of the remote tutoring-center API
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }

    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound as i32
    }

    /// Check the code only, for endpoints whose payload is irrelevant.
    pub fn ensure_success(&self) -> Result<()> {
        if !self.is_success() {
            return Err(TutorCenterError::remote_api(format!(
                "remote API returned code {}: {}",
                self.code, self.message
            )));
        }
        Ok(())
    }

    /// Unwrap the payload, mapping any non-success code to an error.
    pub fn into_data(self) -> Result<T> {
        if !self.is_success() {
            return Err(TutorCenterError::remote_api(format!(
                "remote API returned code {}: {}",
                self.code, self.message
            )));
        }
        self.data.ok_or_else(|| {
            TutorCenterError::remote_api("remote API returned success without data")
        })
    }
}
