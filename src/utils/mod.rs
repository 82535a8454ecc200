pub mod normalize;
pub mod validate;

pub use normalize::{fold_diacritics, parse_skill_text};
pub use validate::{parse_task_list, validate_student_name};
