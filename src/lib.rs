//! TutorCenter - backend core for a tutoring-center management system.
//!
//! Per-lesson
//! homework grading and weekly skill dashboards for classes of students.
//!
//! # Architecture
//! - `config`: configuration management
//! - `errors`: unified error handling
//! - `grading`: task-score ledger, performance classifier, grading session
//! - `logging`: tracing subscriber setup for the host process
//! - `models`: data model definitions
//! - `reports`: weekly skill aggregation for dashboard charts
//! - `storage`: remote persistence layer (REST)
//! - `utils`: validation and text normalization helpers

pub mod config;
pub mod errors;
pub mod grading;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;
pub mod utils;
