pub mod student_id;
pub mod validated_json;

pub use student_id::StudentId;
pub use validated_json::{JsonBodyLimit, ValidatedJson};
