// src/models/module.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Kind of learning content a module carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Pdf,
    Video,
}

impl ContentType {
    /// Infers the content kind from a file name or path extension.
    /// Returns `None` for extensions the platform does not recognize.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(ContentType::Pdf),
            "mp4" | "mov" | "avi" => Some(ContentType::Video),
            _ => None,
        }
    }
}

/// A unit of learning content with metadata.
///
/// `file_url` is optional: text-only modules have no attached file. When a
/// file is attached, `content_type` is kept consistent with it at
/// construction and update time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub content_type: ContentType,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new module.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDraft {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 5000, message = "Description is required"))]
    pub description: String,
    pub file_url: Option<String>,
    pub content_type: Option<ContentType>,
}

/// DTO for updating a module. Present fields replace the stored ones.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleUpdate {
    #[validate(length(min = 1, max = 200, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Description cannot be empty"))]
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub content_type: Option<ContentType>,
}

impl Module {
    /// Builds a module from a validated draft.
    ///
    /// An attached file's extension decides the content kind; a declared kind
    /// is used only when the file extension is absent or unrecognized.
    pub fn from_draft(draft: ModuleDraft, created_by: &str) -> Result<Self, AppError> {
        if let Err(validation_errors) = draft.validate() {
            return Err(AppError::InvalidInput(validation_errors.to_string()));
        }

        let content_type = draft
            .file_url
            .as_deref()
            .and_then(ContentType::from_file_name)
            .or(draft.content_type)
            .unwrap_or_default();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            file_url: draft.file_url,
            content_type,
            created_by: created_by.to_owned(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update, replacing the fields the update carries.
    /// A newly attached file re-resolves the content kind.
    pub fn apply_update(&mut self, update: ModuleUpdate) -> Result<(), AppError> {
        if let Err(validation_errors) = update.validate() {
            return Err(AppError::InvalidInput(validation_errors.to_string()));
        }

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(content_type) = update.content_type {
            self.content_type = content_type;
        }
        if let Some(file_url) = update.file_url {
            if let Some(kind) = ContentType::from_file_name(&file_url) {
                self.content_type = kind;
            }
            self.file_url = Some(file_url);
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}
