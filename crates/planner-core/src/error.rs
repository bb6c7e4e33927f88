//! Error Types

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Text-generation error types
#[derive(Error, Debug)]
pub enum LlmError {
    /// LLM provider error
    #[error("Provider error: {0}")]
    Provider(String),
    
    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
}
