//! Mock Provider
//!
//! For testing and demo purposes. Replies with a scripted text or fails on
//! every call, without touching the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use planner_core::{
    error::{LlmError, Result},
    message::Message,
    provider::{Completion, GenerationOptions, LlmProvider, ModelInfo},
};

/// Canned reply used by [`MockProvider::default`]
pub const DEMO_REPLY: &str = "A steady monthly contribution combined with a diversified \
    portfolio keeps this plan on track. Review the allocation once a year.";

#[derive(Clone, Debug)]
enum Script {
    Reply(String),
    Fail(String),
    Panic(String),
}

/// Scripted provider with a call counter
pub struct MockProvider {
    script: Script,
    latency: Option<Duration>,
    calls: AtomicUsize,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::replying(DEMO_REPLY)
    }
}

impl MockProvider {
    /// Always answer with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            latency: None,
            calls: AtomicUsize::new(0),
        }
    }
    
    /// Always fail with a provider error carrying `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(reason.into()),
            latency: None,
            calls: AtomicUsize::new(0),
        }
    }
    
    /// Panic inside every completion, like a provider with a bug
    pub fn panicking(message: impl Into<String>) -> Self {
        Self {
            script: Script::Panic(message.into()),
            latency: None,
            calls: AtomicUsize::new(0),
        }
    }
    
    /// Simulate inference time on every call
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
    
    /// Number of completions requested so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn health_check(&self) -> Result<bool> {
        Ok(matches!(self.script, Script::Reply(_)))
    }
    
    async fn complete(
        &self,
        _messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        
        match &self.script {
            Script::Reply(text) => Ok(Completion {
                content: text.clone(),
                model: options.model.clone(),
            }),
            Script::Fail(reason) => Err(LlmError::Provider(reason.clone())),
            Script::Panic(message) => panic!("{message}"),
        }
    }
    
    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        Ok(vec![ModelInfo { id: "mock".into() }])
    }
}
