use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub grading: GradingConfig,
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// Remote tutoring-center API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(skip_serializing, default)] // never echoed back in JSON output
    pub token: String,
    pub timeout: u64, // request timeout (seconds)
}

/// Grading and roster settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub roster_page_size: i64, // page size when fetching class rosters
}
