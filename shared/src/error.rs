use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

use crate::quiz_flow::QuizError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Validation failed")]
    ValidationFailed,
    #[error("Operation not allowed in the current state")]
    InvalidState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

impl From<QuizError> for Error {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::UnexpectedQuestion { .. } => {
                Self::with_details(ErrorCode::InvalidInput, "That question is not being asked right now", err.to_string())
            }
            _ => Self::new(ErrorCode::InvalidState, err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
