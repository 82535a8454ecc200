use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Separator used when task identifier lists are flattened into the
/// text fields of a performance record.
pub const TASK_JOIN_SEPARATOR: &str = "; ";

// Score increment applied by one grading button press.
//
// Scores accumulate in quarter steps and saturate at 1.0; a task that
// was never touched stays "unscored", which is distinct from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum ScoreStep {
    Zero,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl ScoreStep {
    pub const ALL: [ScoreStep; 5] = [
        ScoreStep::Zero,
        ScoreStep::Quarter,
        ScoreStep::Half,
        ScoreStep::ThreeQuarters,
        ScoreStep::Full,
    ];

    pub fn value(self) -> f64 {
        match self {
            ScoreStep::Zero => 0.0,
            ScoreStep::Quarter => 0.25,
            ScoreStep::Half => 0.5,
            ScoreStep::ThreeQuarters => 0.75,
            ScoreStep::Full => 1.0,
        }
    }
}

// Qualitative skill tier. The Vietnamese labels are domain enumerants
// and are preserved verbatim on the wire.
//
// Ordering is tier order (Trung bình < Khá < Tốt); weekly aggregation
// relies on it for its lower-tier tie-break.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum SkillTier {
    #[serde(rename = "Trung bình")]
    TrungBinh,
    #[serde(rename = "Khá")]
    Kha,
    #[serde(rename = "Tốt")]
    Tot,
}

impl SkillTier {
    pub const ALL: [SkillTier; 3] = [SkillTier::TrungBinh, SkillTier::Kha, SkillTier::Tot];

    pub fn label(self) -> &'static str {
        match self {
            SkillTier::TrungBinh => "Trung bình",
            SkillTier::Kha => "Khá",
            SkillTier::Tot => "Tốt",
        }
    }
}

impl std::fmt::Display for SkillTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Presentation label derived from the same average score as the skill
// tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum Presentation {
    #[serde(rename = "Khá")]
    Kha,
    #[serde(rename = "Tốt")]
    Tot,
}

impl Presentation {
    pub fn label(self) -> &'static str {
        match self {
            Presentation::Kha => "Khá",
            Presentation::Tot => "Tốt",
        }
    }
}

impl std::fmt::Display for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative labels derived from one ledger's average score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct PerformanceClassification {
    pub presentation: Presentation,
    pub skill: SkillTier,
    pub comment: String,
}

/// Derived quantities of a score ledger, recomputed on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct LedgerSnapshot {
    // tasks with any score applied
    pub done_count: i64,
    // sum of all applied scores
    pub total_score: f64,
    // tasks scored but below full marks
    pub incorrect_tasks: Vec<String>,
    // tasks never scored
    pub missing_tasks: Vec<String>,
    // total score over the full task-list length (0 for an empty list)
    pub average_score: f64,
}

// The persisted unit of grading: one student's result for one lesson.
// Saving again for the same (student, lesson) pair replaces the
// earlier record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct PerformanceRecord {
    pub student_id: i64,
    pub student_name: String,
    pub lesson_id: i64,
    pub done_count: i64,
    pub total_score: f64,
    pub incorrect_tasks: String,
    pub missing_tasks: String,
    pub presentation: Presentation,
    pub skill: SkillTier,
    pub comment: String,
}

impl PerformanceRecord {
    /// Task identifiers recovered from the flattened incorrect-task text.
    pub fn incorrect_task_ids(&self) -> Vec<&str> {
        Self::split_task_text(&self.incorrect_tasks)
    }

    /// Task identifiers recovered from the flattened missing-task text.
    pub fn missing_task_ids(&self) -> Vec<&str> {
        Self::split_task_text(&self.missing_tasks)
    }

    fn split_task_text(text: &str) -> Vec<&str> {
        text.split(TASK_JOIN_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_step_values() {
        let values: Vec<f64> = ScoreStep::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_skill_tier_order() {
        assert!(SkillTier::TrungBinh < SkillTier::Kha);
        assert!(SkillTier::Kha < SkillTier::Tot);
    }

    #[test]
    fn test_skill_tier_labels() {
        assert_eq!(SkillTier::TrungBinh.label(), "Trung bình");
        assert_eq!(SkillTier::Kha.label(), "Khá");
        assert_eq!(SkillTier::Tot.label(), "Tốt");
    }

    #[test]
    fn test_split_task_text() {
        let record = PerformanceRecord {
            student_id: 1,
            student_name: "Nguyễn Văn An".to_string(),
            lesson_id: 7,
            done_count: 2,
            total_score: 1.5,
            incorrect_tasks: "1a; Bài 2".to_string(),
            missing_tasks: String::new(),
            presentation: Presentation::Kha,
            skill: SkillTier::Kha,
            comment: String::new(),
        };
        assert_eq!(record.incorrect_task_ids(), vec!["1a", "Bài 2"]);
        assert!(record.missing_task_ids().is_empty());
    }
}
