//! Application State

use std::sync::Arc;

use investment_advisor::InvestmentService;
use planner_core::LlmProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Text-generation provider (Ollama, mock)
    pub provider: Arc<dyn LlmProvider>,
    
    /// Allocation + insight pipeline built on `provider`
    pub service: InvestmentService,
    
    /// Reported by the health endpoint
    pub project_name: Arc<str>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>, model: &str, project_name: &str) -> Self {
        Self {
            service: InvestmentService::with_provider(Arc::clone(&provider), model),
            provider,
            project_name: Arc::from(project_name),
        }
    }
}
