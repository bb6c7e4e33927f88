//! # planner-core
//!
//! Provider-agnostic text-generation abstraction used by the investment planner.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    investment-advisor                        │
//! │  ┌─────────────────┐        ┌────────────────────────────┐  │
//! │  │ InsightAugmenter│───────▶│   LlmProvider (Strategy)   │  │
//! │  └─────────────────┘        └────────────────────────────┘  │
//! └──────────────────────────────────────│──────────────────────┘
//!                                        ▼
//!                         Ollama │ Mock (planner-runtime)
//! ```
//!
//! The `LlmProvider` trait lets the advisor swap model backends without
//! touching the allocation or insight logic.

pub mod provider;
pub mod message;
pub mod error;

pub use error::{LlmError, Result};
pub use message::{Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider, ModelInfo};
