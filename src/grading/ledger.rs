//! Cumulative per-task score tracking for one grading attempt.

use crate::errors::{Result, TutorCenterError};
use crate::models::grading::entities::{LedgerSnapshot, ScoreStep};

struct TaskSlot {
    id: String,
    // None = unscored (not attempted). Some(0.0) means attempted and
    // fully wrong; the two must never be conflated.
    score: Option<f64>,
}

/// Ordered task -> score mapping, scoped to one (student, lesson)
/// grading attempt.
///
/// Scores accumulate in the steps of [`ScoreStep`] and saturate at
/// 1.0. All derived quantities are recomputed on every
/// [`snapshot`](Self::snapshot) call; nothing is cached across
/// mutations.
#[derive(Default)]
pub struct TaskScoreLedger {
    slots: Vec<TaskSlot>,
}

impl TaskScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)initialize the ledger with a task list, every task unscored.
    ///
    /// Always discards prior scores, even when called with the same
    /// list: defining a task list starts grading from scratch.
    /// Duplicate identifiers are rejected; identifiers are opaque and
    /// case-sensitive.
    pub fn configure<I, S>(&mut self, tasks: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots: Vec<TaskSlot> = Vec::new();
        for task in tasks {
            let id = task.into();
            if slots.iter().any(|slot| slot.id == id) {
                return Err(TutorCenterError::validation(format!(
                    "duplicate task identifier: {id}"
                )));
            }
            slots.push(TaskSlot { id, score: None });
        }
        self.slots = slots;
        Ok(())
    }

    /// Apply one score increment to a task.
    ///
    /// An unscored task takes the increment as its score; a scored
    /// task accumulates, saturating at 1.0. Unknown tasks are ignored.
    pub fn apply_score(&mut self, task: &str, step: ScoreStep) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == task) {
            slot.score = Some(match slot.score {
                None => step.value(),
                Some(current) => (current + step.value()).min(1.0),
            });
        }
    }

    /// Set a task back to unscored.
    pub fn reset_task(&mut self, task: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == task) {
            slot.score = None;
        }
    }

    /// Set every task back to unscored.
    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.score = None;
        }
    }

    /// Configured task identifiers, in order.
    pub fn task_ids(&self) -> Vec<String> {
        self.slots.iter().map(|slot| slot.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current score of a task, `None` while unscored or unknown.
    pub fn score_of(&self, task: &str) -> Option<f64> {
        self.slots
            .iter()
            .find(|slot| slot.id == task)
            .and_then(|slot| slot.score)
    }

    /// Compute all derived quantities from the current scores.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let mut done_count = 0i64;
        let mut total_score = 0.0f64;
        let mut incorrect_tasks = Vec::new();
        let mut missing_tasks = Vec::new();

        for slot in &self.slots {
            match slot.score {
                Some(score) => {
                    done_count += 1;
                    total_score += score;
                    if score < 1.0 {
                        incorrect_tasks.push(slot.id.clone());
                    }
                }
                None => missing_tasks.push(slot.id.clone()),
            }
        }

        // guard the empty list, averaging over zero tasks is 0
        let average_score = if self.slots.is_empty() {
            0.0
        } else {
            total_score / self.slots.len() as f64
        };

        LedgerSnapshot {
            done_count,
            total_score,
            incorrect_tasks,
            missing_tasks,
            average_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(tasks: &[&str]) -> TaskScoreLedger {
        let mut ledger = TaskScoreLedger::new();
        ledger.configure(tasks.iter().copied()).unwrap();
        ledger
    }

    #[test]
    fn test_configure_starts_unscored() {
        let ledger = ledger_with(&["1a", "2", "3"]);
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.done_count, 0);
        assert_eq!(snapshot.total_score, 0.0);
        assert_eq!(snapshot.missing_tasks, vec!["1a", "2", "3"]);
    }

    #[test]
    fn test_configure_rejects_duplicates() {
        let mut ledger = TaskScoreLedger::new();
        assert!(ledger.configure(["1a", "2", "1a"]).is_err());
    }

    #[test]
    fn test_reconfigure_discards_scores() {
        let mut ledger = ledger_with(&["1a", "2"]);
        ledger.apply_score("1a", ScoreStep::Full);
        ledger.configure(["1a", "2"]).unwrap();
        assert_eq!(ledger.score_of("1a"), None);
    }

    #[test]
    fn test_increments_accumulate_and_saturate() {
        let mut ledger = ledger_with(&["1a"]);
        ledger.apply_score("1a", ScoreStep::Quarter);
        assert_eq!(ledger.score_of("1a"), Some(0.25));
        ledger.apply_score("1a", ScoreStep::Quarter);
        assert_eq!(ledger.score_of("1a"), Some(0.5));
        ledger.apply_score("1a", ScoreStep::ThreeQuarters);
        assert_eq!(ledger.score_of("1a"), Some(1.0));
        ledger.apply_score("1a", ScoreStep::Full);
        assert_eq!(ledger.score_of("1a"), Some(1.0));
    }

    #[test]
    fn test_zero_step_marks_task_done() {
        let mut ledger = ledger_with(&["1a"]);
        ledger.apply_score("1a", ScoreStep::Zero);
        // attempted and fully wrong, not missing
        assert_eq!(ledger.score_of("1a"), Some(0.0));
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.done_count, 1);
        assert_eq!(snapshot.incorrect_tasks, vec!["1a"]);
        assert!(snapshot.missing_tasks.is_empty());
    }

    #[test]
    fn test_unknown_task_is_ignored() {
        let mut ledger = ledger_with(&["1a"]);
        ledger.apply_score("9z", ScoreStep::Full);
        assert_eq!(ledger.snapshot().done_count, 0);
    }

    #[test]
    fn test_snapshot_derivations() {
        let mut ledger = ledger_with(&["task1", "task2", "task3"]);
        ledger.apply_score("task1", ScoreStep::Full);
        ledger.apply_score("task2", ScoreStep::Half);

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.done_count, 2);
        assert_eq!(snapshot.total_score, 1.5);
        assert_eq!(snapshot.incorrect_tasks, vec!["task2"]);
        assert_eq!(snapshot.missing_tasks, vec!["task3"]);
        assert_eq!(snapshot.average_score, 0.5);
    }

    #[test]
    fn test_empty_ledger_average_is_zero() {
        let ledger = TaskScoreLedger::new();
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.average_score, 0.0);
        assert!(snapshot.average_score.is_finite());
    }

    #[test]
    fn test_reset_task_and_reset_all() {
        let mut ledger = ledger_with(&["1a", "2"]);
        ledger.apply_score("1a", ScoreStep::Full);
        ledger.apply_score("2", ScoreStep::Half);

        ledger.reset_task("1a");
        assert_eq!(ledger.score_of("1a"), None);
        assert_eq!(ledger.score_of("2"), Some(0.5));

        ledger.reset_all();
        assert_eq!(ledger.snapshot().done_count, 0);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let mut ledger = ledger_with(&["1a"]);
        for step in ScoreStep::ALL {
            ledger.apply_score("1a", step);
            let score = ledger.score_of("1a").unwrap();
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
