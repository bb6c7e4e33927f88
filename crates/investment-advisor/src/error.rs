//! Error Types for the Investment Advisor

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid profile: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
    
    #[error("Projected value is out of range for a {years}-year horizon")]
    ProjectionOutOfRange { years: u32 },
    
    #[error("Insight generation failed: {0}")]
    Generation(#[from] planner_core::LlmError),
    
    #[error("Insight task aborted: {0}")]
    TaskAborted(#[from] tokio::task::JoinError),
    
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    /// Per-field problems when this is a validation error
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// A single rejected profile field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
    
    pub fn missing(field: &'static str) -> Self {
        Self::new(field, "is required")
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
