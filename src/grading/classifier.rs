//! Qualitative performance labels derived from an average score.

use crate::models::grading::entities::{PerformanceClassification, Presentation, SkillTier};

/// Canned comment for the "Trung bình" tier.
pub const COMMENT_TRUNG_BINH: &str =
    "Con cần cố gắng hơn, chú ý hoàn thành đầy đủ bài tập về nhà.";
/// Canned comment for the "Khá" tier.
pub const COMMENT_KHA: &str = "Con làm bài khá, cần xem lại những bài còn sai.";
/// Canned comment for the "Tốt" tier.
pub const COMMENT_TOT: &str = "Con làm bài tốt, tiếp tục phát huy nhé!";
/// Canned comment for good skill but only fair presentation.
pub const COMMENT_TOT_KHA: &str = "Con nắm bài tốt nhưng cần trình bày cẩn thận hơn.";

/// Derive presentation, skill tier and comment from an average score
/// in [0, 1].
///
/// Pure and total: every input maps to exactly one classification, no
/// side effects.
pub fn classify(average_score: f64) -> PerformanceClassification {
    let (presentation, skill) = if average_score <= 0.3 {
        (Presentation::Kha, SkillTier::TrungBinh)
    } else if average_score < 0.7 {
        (Presentation::Kha, SkillTier::Kha)
    } else {
        (Presentation::Tot, SkillTier::Tot)
    };

    PerformanceClassification {
        presentation,
        skill,
        comment: comment_for(skill, presentation).to_string(),
    }
}

/// Comment lookup keyed on the derived labels.
fn comment_for(skill: SkillTier, presentation: Presentation) -> &'static str {
    // skill and presentation come from the same score thresholds, so
    // skill == Tốt always pairs with presentation == Tốt and this arm
    // cannot fire; the table keeps all four canned strings anyway.
    if skill == SkillTier::Tot && presentation == Presentation::Kha {
        return COMMENT_TOT_KHA;
    }

    match skill {
        SkillTier::TrungBinh => COMMENT_TRUNG_BINH,
        SkillTier::Kha => COMMENT_KHA,
        SkillTier::Tot => COMMENT_TOT,
    }
}
