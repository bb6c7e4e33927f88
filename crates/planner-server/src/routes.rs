//! Router Assembly

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::{CorsOrigins, Settings};
use crate::handlers::{generate_insights, health_check, recommend, statistics};
use crate::state::AppState;

pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any);
    
    match origins {
        CorsOrigins::Any => cors.allow_origin(Any),
        CorsOrigins::List(list) => cors.allow_origin(AllowOrigin::list(list.iter().cloned())),
    }
}

pub fn router(state: AppState, settings: &Settings) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_check))
        
        // Investments
        .route("/api/investments/recommend", post(recommend))
        .route("/api/investments/statistics", post(statistics))
        
        // Insights
        .route("/api/ai-insights/generate", post(generate_insights))
        
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(&settings.static_dir))
        
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
