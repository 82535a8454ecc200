use std::collections::HashSet;

use crate::errors::{Result, TutorCenterError};

/// Parse a raw comma-separated task list as entered by an operator.
///
/// Entries are trimmed and empty entries dropped, so trailing commas
/// and double commas are harmless. Identifiers are opaque and
/// case-sensitive. An empty result or a duplicate identifier is a
/// validation error; duplicates would leave two grading buttons
/// feeding one ledger slot.
pub fn parse_task_list(raw: &str) -> Result<Vec<String>> {
    let tasks: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect();

    if tasks.is_empty() {
        return Err(TutorCenterError::validation("task list is empty"));
    }

    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(task.as_str()) {
            return Err(TutorCenterError::validation(format!(
                "duplicate task identifier: {task}"
            )));
        }
    }

    Ok(tasks)
}

/// Validate a student-name input, returning the trimmed name.
pub fn validate_student_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TutorCenterError::validation("student name is empty"));
    }
    Ok(trimmed)
}
