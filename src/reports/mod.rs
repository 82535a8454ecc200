pub mod weekly;

pub use weekly::{fetch_class_performance, week_window, weekly_series, weekly_skill_distribution};
