//! LLM Provider Strategy Pattern
//!
//! Defines a common interface for text-generation backends (Ollama, a scripted
//! mock, hosted APIs) so callers never depend on a concrete client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planner_core::provider::{GenerationOptions, LlmProvider};
//!
//! let provider = OllamaProvider::from_config(OllamaConfig::default());
//! let options = GenerationOptions { max_tokens: 200, ..Default::default() };
//! let text = provider.generate("Describe this profile", &options).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "llama3.2", "mistral")
    pub model: String,
    
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    
    /// Top-p nucleus sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    
    /// System prompt sent ahead of the user prompt
    #[serde(default)]
    pub system_prompt: Option<String>,
}

const fn default_temperature() -> f32 { 0.7 }
const fn default_max_tokens() -> u32 { 2048 }
const fn default_top_p() -> f32 { 0.9 }

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "llama3.2".into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            system_prompt: None,
        }
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text
    pub content: String,
    
    /// Model that generated this response
    pub model: String,
}

/// A model the provider can serve
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new text-generation backends.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Check if the provider is available and configured correctly
    async fn health_check(&self) -> Result<bool>;
    
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;
    
    /// List available models
    async fn list_models(&self) -> Result<Vec<ModelInfo>>;
    
    /// Single-prompt text generation.
    ///
    /// Prepends `options.system_prompt` when set. The completion text is
    /// returned as produced, even when empty.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &options.system_prompt {
            messages.push(Message::system(system.clone()));
        }
        messages.push(Message::user(prompt));
        
        let completion = self.complete(&messages, options).await?;
        tracing::debug!(
            model = %completion.model,
            chars = completion.content.len(),
            "Text generation finished"
        );
        
        Ok(completion.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Echoes back what it was asked, recording the message roles.
    struct EchoProvider {
        reply: String,
        seen_roles: Mutex<Vec<crate::message::Role>>,
    }

    #[async_trait]
    impl LlmProvider for EchoProvider {
        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            self.seen_roles
                .lock()
                .unwrap()
                .extend(messages.iter().map(|m| m.role));
            Ok(Completion {
                content: self.reply.clone(),
                model: options.model.clone(),
            })
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>> {
            Ok(Vec::new())
        }
    }

    fn echo(reply: &str) -> EchoProvider {
        EchoProvider { reply: reply.into(), seen_roles: Mutex::new(Vec::new()) }
    }

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(opts.max_tokens, 2048);
        assert_eq!(opts.model, "llama3.2");
        assert!(opts.system_prompt.is_none());
    }

    #[tokio::test]
    async fn test_generate_prepends_system_prompt() {
        let provider = echo("Hold bonds.");
        let options = GenerationOptions {
            system_prompt: Some("Be brief.".into()),
            ..Default::default()
        };

        let text = provider.generate("profile", &options).await.unwrap();

        assert_eq!(text, "Hold bonds.");
        let roles = provider.seen_roles.lock().unwrap().clone();
        assert_eq!(roles, vec![crate::message::Role::System, crate::message::Role::User]);
    }

    #[tokio::test]
    async fn test_generate_passes_blank_completion_through() {
        let provider = echo("");
        let text = provider
            .generate("profile", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "");
        let roles = provider.seen_roles.lock().unwrap().clone();
        assert_eq!(roles, vec![crate::message::Role::User]);
    }
}
