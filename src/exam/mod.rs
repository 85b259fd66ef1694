//! Exams: per-attempt question sessions and grading.

pub mod grading;
pub mod session;
pub mod types;

pub use grading::{grade_attempt, is_correct};
pub use session::build_session;
pub use types::{ExamAnswer, ExamConfig, ExamOption, ExamQuestion, ExamSession, GradeResult};
