use std::borrow::Cow;

use thiserror::Error;

/// Top-level error type returned by the monkey repositories.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Validation failed for one or more fields.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// Underlying Redis command failed.
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Connection settings could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A monkey referenced by id or name does not exist.
    #[error("monkey not found: {entity}")]
    NotFound { entity: String },

    /// Another monkey already holds the value of a unique field.
    #[error("unique constraint violation: {field} '{value}' already belongs to monkey {existing_id}")]
    UniqueConstraintViolation {
        field: String,
        value: String,
        existing_id: u64,
    },

    /// Stored or scripted data could not be (de)serialized.
    #[error("{message}")]
    Other { message: Cow<'static, str> },
}

impl RepoError {
    pub fn not_found(entity: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Collection of validation issues encountered while preparing a mutation.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true when any issue was raised for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

/// Detailed validation failure for a single field.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
