//! Vietnamese text normalization for free-text skill labels.
//!
//! Operators type skill labels by hand, with or without diacritics and
//! in any casing; matching must accept "Tốt", "tot", "TRUNG BINH" and
//! so on.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::grading::entities::SkillTier;

/// Folded spelling -> tier lookup table.
static SKILL_LOOKUP: Lazy<HashMap<&'static str, SkillTier>> = Lazy::new(|| {
    HashMap::from([
        ("tot", SkillTier::Tot),
        ("kha", SkillTier::Kha),
        ("trung binh", SkillTier::TrungBinh),
    ])
});

/// Lowercase the input and strip Vietnamese diacritics.
pub fn fold_diacritics(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

/// Map a free-text skill field to a tier.
///
/// Interior whitespace is collapsed before lookup. Unrecognized or
/// empty text yields `None` - no vote, not an error.
pub fn parse_skill_text(text: &str) -> Option<SkillTier> {
    let folded = fold_diacritics(text.trim());
    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    SKILL_LOOKUP.get(collapsed.as_str()).copied()
}
