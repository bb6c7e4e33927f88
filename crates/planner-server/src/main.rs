//! Investment planner HTTP server
//!
//! Axum-based server exposing the allocation calculator and the insight
//! augmenter as a JSON API, and serving the WASM frontend.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use planner_core::LlmProvider;
use planner_runtime::{MockProvider, OllamaProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ProviderKind, Settings};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "Loaded settings");
    if settings.has_weak_secret() {
        tracing::warn!("⚠ SECRET_KEY is shorter than 32 bytes");
    }

    // Initialize text-generation provider
    let provider: Arc<dyn LlmProvider> = match settings.provider {
        ProviderKind::Ollama => Arc::new(OllamaProvider::from_config(settings.ollama.clone())),
        ProviderKind::Mock => {
            tracing::warn!("⚠ Using scripted mock provider - insights are canned");
            Arc::new(MockProvider::default())
        }
    };

    // Verify model backend
    match provider.health_check().await {
        Ok(true) => {
            tracing::info!("✓ Model backend reachable");
            if let Ok(models) = provider.list_models().await {
                for model in models {
                    tracing::info!("  Model: {}", model.id);
                }
            }
        }
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ Model backend not available - fallback insights will be served");
            tracing::warn!("  Make sure Ollama is running: ollama serve");
        }
    }

    let state = AppState::new(provider, &settings.model, &settings.project_name);
    let app = routes::router(state, &settings);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 {} running on http://{}", settings.project_name, settings.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                      - Health check");
    tracing::info!("  POST /api/investments/recommend   - Allocation + insights");
    tracing::info!("  POST /api/investments/statistics  - Projected value");
    tracing::info!("  POST /api/ai-insights/generate    - Insights only");
    tracing::info!("  Model: {}", settings.model);
    tracing::info!("");
    
    axum::serve(listener, app).await?;
    
    Ok(())
}
