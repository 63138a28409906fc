// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// One multiple-choice item inside a quiz.
///
/// The invariant `correct_answer` equals exactly one of `choices` is enforced
/// when the owning quiz is created or updated, not re-checked at grading time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Stable identifier, usable as an answer-map key.
    pub id: String,
    pub question: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
}

/// An ordered set of questions attached to one module.
///
/// References its module by identity only. Deleting a module neither cascades
/// to nor blocks on its quizzes; referential integrity is owned by the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub questions: Vec<Question>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for one question in a creation or update payload.
/// Serialize is needed so the derived length check on a question list can
/// report the offending value in its validation error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[validate(length(min = 1, max = 1000, message = "Question text is required"))]
    pub question: String,
    #[validate(custom(function = validate_choices))]
    pub choices: Vec<String>,
    #[validate(length(min = 1, max = 500, message = "Correct answer is required"))]
    pub correct_answer: String,
}

/// DTO for creating a new quiz.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "At least one question is required"))]
    pub questions: Vec<QuestionDraft>,
}

/// DTO for updating a quiz. A question list, when present, replaces the
/// stored sequence wholesale.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizUpdate {
    #[validate(length(min = 1, max = 200, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "At least one question is required"))]
    pub questions: Option<Vec<QuestionDraft>>,
}

fn validate_choices(choices: &[String]) -> Result<(), validator::ValidationError> {
    if choices.len() < 2 {
        return Err(validator::ValidationError::new("at_least_two_choices"));
    }
    for choice in choices {
        if choice.is_empty() {
            return Err(validator::ValidationError::new("choice_cannot_be_empty"));
        }
        if choice.len() > 500 {
            return Err(validator::ValidationError::new("choice_too_long"));
        }
    }
    Ok(())
}

/// Validates drafts and mints stored questions with fresh stable ids.
fn build_questions(drafts: Vec<QuestionDraft>) -> Result<Vec<Question>, AppError> {
    let mut questions = Vec::with_capacity(drafts.len());
    for draft in drafts {
        if let Err(validation_errors) = draft.validate() {
            return Err(AppError::InvalidInput(validation_errors.to_string()));
        }
        if !draft.choices.contains(&draft.correct_answer) {
            return Err(AppError::InvalidInput(format!(
                "Correct answer \"{}\" must be one of the choices",
                draft.correct_answer
            )));
        }
        questions.push(Question {
            id: Uuid::new_v4().to_string(),
            question: draft.question,
            choices: draft.choices,
            correct_answer: draft.correct_answer,
        });
    }
    Ok(questions)
}

impl Quiz {
    /// Builds a quiz from a validated draft, minting ids for the quiz and
    /// every question.
    pub fn from_draft(
        module_id: &str,
        draft: QuizDraft,
        created_by: &str,
    ) -> Result<Self, AppError> {
        if let Err(validation_errors) = draft.validate() {
            return Err(AppError::InvalidInput(validation_errors.to_string()));
        }

        let questions = build_questions(draft.questions)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            module_id: module_id.to_owned(),
            title: draft.title,
            questions,
            created_by: created_by.to_owned(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update. Replacement questions go through the same
    /// validation as creation and receive fresh ids.
    pub fn apply_update(&mut self, update: QuizUpdate) -> Result<(), AppError> {
        if let Err(validation_errors) = update.validate() {
            return Err(AppError::InvalidInput(validation_errors.to_string()));
        }

        // Validate the replacement sequence fully before touching any field
        let replacement = match update.questions {
            Some(drafts) => Some(build_questions(drafts)?),
            None => None,
        };

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(questions) = replacement {
            self.questions = questions;
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}
