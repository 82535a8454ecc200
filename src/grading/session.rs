//! One grading interaction: a chosen lesson, a configured task list,
//! and one student at a time.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{Result, TutorCenterError};
use crate::grading::classifier::classify;
use crate::grading::ledger::TaskScoreLedger;
use crate::models::grading::entities::{
    LedgerSnapshot, PerformanceRecord, ScoreStep, TASK_JOIN_SEPARATOR,
};
use crate::models::roster::entities::Lesson;
use crate::models::users::entities::Operator;
use crate::storage::Storage;
use crate::utils::{parse_task_list, validate_student_name};

/// Orchestrates grading for one lesson: task-list configuration, the
/// score ledger, classification, and submission of finalized records.
///
/// All mutating operations take `&mut self`, so one call always runs
/// to completion on the session's state before the next is accepted;
/// the UI layer is responsible for not re-triggering a save that is
/// still in flight.
pub struct GradingSession {
    storage: Arc<dyn Storage>,
    operator: Operator,
    lesson: Lesson,
    ledger: TaskScoreLedger,
    // last known-good raw task list, the rollback target when a
    // task-list save fails
    task_list_raw: String,
    student_name: String,
}

impl GradingSession {
    /// Open a grading session for a lesson.
    ///
    /// The operator identity must already be resolved by the host's
    /// auth layer; roles that cannot grade are rejected here. A task
    /// list already stored on the lesson document seeds the ledger.
    pub fn new(storage: Arc<dyn Storage>, operator: Operator, lesson: Lesson) -> Result<Self> {
        if !operator.role.can_grade() {
            return Err(TutorCenterError::authorization(format!(
                "role '{}' cannot grade lessons",
                operator.role
            )));
        }

        let mut ledger = TaskScoreLedger::new();
        let mut task_list_raw = String::new();
        if let Some(raw) = lesson.task_list.as_deref() {
            match parse_task_list(raw) {
                Ok(tasks) => {
                    ledger.configure(tasks)?;
                    task_list_raw = raw.to_string();
                }
                Err(e) => {
                    // a lesson without a usable stored list starts unconfigured
                    warn!(
                        lesson_id = lesson.id,
                        "ignoring stored task list: {}",
                        e.message()
                    );
                }
            }
        }

        Ok(Self {
            storage,
            operator,
            lesson,
            ledger,
            task_list_raw,
            student_name: String::new(),
        })
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// The raw task list currently shown to the operator.
    pub fn task_list_raw(&self) -> &str {
        &self.task_list_raw
    }

    pub fn ledger(&self) -> &TaskScoreLedger {
        &self.ledger
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn set_student_name(&mut self, name: impl Into<String>) {
        self.student_name = name.into();
    }

    pub fn apply_score(&mut self, task: &str, step: ScoreStep) {
        self.ledger.apply_score(task, step);
    }

    pub fn reset_task(&mut self, task: &str) {
        self.ledger.reset_task(task);
    }

    pub fn reset_all(&mut self) {
        self.ledger.reset_all();
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    /// Parse, apply and persist a new task list for the lesson.
    ///
    /// The ledger is reconfigured optimistically (discarding any
    /// in-progress scores, a redefined list always starts grading from
    /// scratch), then the raw list is pushed to the lesson document.
    /// If the save fails the previous list is restored, so the
    /// operator never sees a half-applied edit. Returns the
    /// server-confirmed task count.
    pub async fn set_task_list(&mut self, raw: &str) -> Result<i64> {
        let tasks = parse_task_list(raw)?;

        // record the inverse patch before the optimistic apply
        let prev_raw = std::mem::take(&mut self.task_list_raw);
        let prev_tasks = self.ledger.task_ids();

        self.ledger.configure(tasks)?;
        self.task_list_raw = raw.to_string();

        match self.storage.save_task_list(self.lesson.id, raw).await {
            Ok(response) => {
                self.lesson.task_list = Some(raw.to_string());
                info!(
                    lesson_id = self.lesson.id,
                    operator = %self.operator.name,
                    tasks = response.total_task_length,
                    "task list saved"
                );
                Ok(response.total_task_length)
            }
            Err(e) => {
                // roll back the displayed list; the scores it carried
                // were already discarded by the reconfigure above
                self.task_list_raw = prev_raw;
                if let Err(rollback_err) = self.ledger.configure(prev_tasks) {
                    warn!(
                        lesson_id = self.lesson.id,
                        "task-list rollback failed: {}",
                        rollback_err.message()
                    );
                }
                Err(e)
            }
        }
    }

    /// Finalize the current ledger for the named student and persist
    /// the performance record.
    ///
    /// Validation failures (empty or unknown student name) leave all
    /// grading state untouched. After the save attempt the ledger and
    /// the student-name input are cleared on success and on
    /// persistence failure alike, ready for the next student.
    pub async fn submit(&mut self) -> Result<PerformanceRecord> {
        let name = validate_student_name(&self.student_name)?.to_string();

        let student = self
            .storage
            .resolve_student(self.lesson.class_id, &name)
            .await?
            .ok_or_else(|| {
                TutorCenterError::student_not_found(format!(
                    "no student named '{name}' in class {}",
                    self.lesson.class_id
                ))
            })?;

        let snapshot = self.ledger.snapshot();
        let classification = classify(snapshot.average_score);

        let record = PerformanceRecord {
            student_id: student.id,
            student_name: student.name,
            lesson_id: self.lesson.id,
            done_count: snapshot.done_count,
            total_score: snapshot.total_score,
            incorrect_tasks: snapshot.incorrect_tasks.join(TASK_JOIN_SEPARATOR),
            missing_tasks: snapshot.missing_tasks.join(TASK_JOIN_SEPARATOR),
            presentation: classification.presentation,
            skill: classification.skill,
            comment: classification.comment,
        };

        let saved = self.storage.save_performance(&record).await;

        // cleared regardless of the save outcome
        self.ledger.reset_all();
        self.student_name.clear();

        match saved {
            Ok(()) => {
                info!(
                    lesson_id = self.lesson.id,
                    student_id = record.student_id,
                    "performance record saved"
                );
                Ok(record)
            }
            Err(e) => Err(e),
        }
    }
}
