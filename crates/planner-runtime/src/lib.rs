//! # planner-runtime
//!
//! Text-generation providers for the investment planner.
//!
//! ## Providers
//!
//! - **Ollama** (default): Local LLM inference via Ollama
//! - **Mock**: Scripted replies or failures for demos and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planner_runtime::{OllamaConfig, OllamaProvider};
//!
//! let provider: Arc<dyn LlmProvider> = Arc::new(OllamaProvider::from_config(OllamaConfig::default()));
//! let augmenter = InsightAugmenter::new(provider, "llama3.2");
//! ```

pub mod mock;

#[cfg(feature = "ollama")]
pub mod ollama;

pub use mock::MockProvider;

#[cfg(feature = "ollama")]
pub use ollama::{OllamaConfig, OllamaProvider};

// Re-export core types for convenience
pub use planner_core::{GenerationOptions, LlmError, LlmProvider, Message, Result, Role};
