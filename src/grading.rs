// src/grading.rs

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::{error::AppError, models::quiz::Quiz};

/// Submitted answers: a mapping from question id (or zero-based position, as
/// a decimal string) to the chosen answer text.
///
/// Clients submit by either key, so lookup resolves by question id first and
/// falls back to the position only when the id key is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet(HashMap<String, String>);

impl AnswerSheet {
    /// Builds an answer sheet from a loosely-typed request value.
    ///
    /// Fails with `InvalidInput` when the value is missing (`null`), is not a
    /// JSON object, or maps a key to a non-string answer.
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => {
                return Err(AppError::InvalidInput("Answers are required".to_owned()));
            }
            _ => {
                return Err(AppError::InvalidInput(
                    "Answers must be an object mapping question ids to choices".to_owned(),
                ));
            }
        };

        let mut answers = HashMap::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(answer) => {
                    answers.insert(key.clone(), answer.clone());
                }
                _ => {
                    return Err(AppError::InvalidInput(format!(
                        "Answer for \"{}\" must be a string",
                        key
                    )));
                }
            }
        }

        Ok(Self(answers))
    }

    /// Resolves the submitted answer for a question: by id, then by position.
    /// An empty string stored under the id counts as answered and does not
    /// fall through to the position key.
    fn resolve(&self, question_id: &str, index: usize) -> Option<&str> {
        self.0
            .get(question_id)
            .or_else(|| self.0.get(&index.to_string()))
            .map(String::as_str)
    }
}

impl From<HashMap<String, String>> for AnswerSheet {
    fn from(answers: HashMap<String, String>) -> Self {
        Self(answers)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Per-question outcome of a graded submission.
/// `user_answer` is `None` when the question was skipped, which is reported
/// distinctly from an answered-but-wrong empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Aggregate outcome of a graded submission. `results` follows question order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    pub results: Vec<QuestionResult>,
}

/// Grades a submission against a quiz.
///
/// * Resolves each answer by question id, then by zero-based position.
/// * Correctness is exact string equality; no trimming or case folding.
/// * `score` is `100 * correct / total`, rounded half-up to an integer.
///
/// Pure and stateless: the quiz is only borrowed, and the same inputs always
/// produce an identical report. The non-empty-questions invariant is checked
/// here rather than trusted, so a degenerate quiz fails instead of dividing
/// by zero.
pub fn grade(quiz: &Quiz, answers: &AnswerSheet) -> Result<GradeReport, AppError> {
    let total = quiz.questions.len() as u32;
    if total == 0 {
        return Err(AppError::InvalidInput(
            "Quiz has no questions to grade".to_owned(),
        ));
    }

    let mut correct = 0u32;
    let mut results = Vec::with_capacity(quiz.questions.len());

    for (index, question) in quiz.questions.iter().enumerate() {
        let user_answer = answers.resolve(&question.id, index);
        let is_correct = user_answer == Some(question.correct_answer.as_str());
        if is_correct {
            correct += 1;
        }
        results.push(QuestionResult {
            question: question.question.clone(),
            user_answer: user_answer.map(str::to_owned),
            correct_answer: question.correct_answer.clone(),
            is_correct,
        });
    }

    // Integer round-half-up of 100 * correct / total
    let score = (200 * correct + total) / (2 * total);

    tracing::debug!(quiz_id = %quiz.id, score, correct, total, "graded quiz submission");

    Ok(GradeReport {
        score,
        correct,
        total,
        results,
    })
}
