pub mod common;
pub mod grading;
pub mod reports;
pub mod roster;
pub mod users;

pub use common::response::{ApiResponse, ErrorCode};
