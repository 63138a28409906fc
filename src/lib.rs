// src/lib.rs

pub mod error;
pub mod grading;
pub mod models;
pub mod redaction;

// Re-export the two core operations and their types for convenience
pub use error::AppError;
pub use grading::{AnswerSheet, GradeReport, QuestionResult, grade};
pub use redaction::{QuestionView, QuizView, redact};
