// src/redaction.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::quiz::{Question, Quiz};

/// DTO for sending a question to a client.
/// `correct_answer` is dropped from the JSON entirely when redacted, so a
/// non-privileged caller never sees the key at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

/// DTO for sending a quiz to a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub questions: Vec<QuestionView>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn question_view(question: &Question, privileged: bool) -> QuestionView {
    QuestionView {
        id: question.id.clone(),
        question: question.question.clone(),
        choices: question.choices.clone(),
        correct_answer: privileged.then(|| question.correct_answer.clone()),
    }
}

/// Projects a quiz into the view a caller is allowed to see.
///
/// Non-privileged callers get every question with its correct answer omitted;
/// privileged callers get the full record. The stored quiz is only borrowed
/// and never mutated.
pub fn redact(quiz: &Quiz, privileged: bool) -> QuizView {
    QuizView {
        id: quiz.id.clone(),
        module_id: quiz.module_id.clone(),
        title: quiz.title.clone(),
        questions: quiz
            .questions
            .iter()
            .map(|q| question_view(q, privileged))
            .collect(),
        created_by: quiz.created_by.clone(),
        created_at: quiz.created_at,
        updated_at: quiz.updated_at,
    }
}
