//! Server Configuration
//!
//! Settings come from the environment (after `.env` is loaded). None of them
//! change computed allocations or insights.

use axum::http::HeaderValue;
use planner_runtime::OllamaConfig;
use thiserror::Error;

const DEFAULT_PROJECT_NAME: &str = "Investment Planning AI";
const DEFAULT_MODEL: &str = "llama3.2";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_STATIC_DIR: &str = "static";
const MIN_SECRET_LEN: usize = 32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),
    
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Which text-generation backend to use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Ollama,
    Mock,
}

/// Allowed CORS origins
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Clone)]
pub struct Settings {
    pub project_name: String,
    pub secret_key: String,
    pub cors_origins: CorsOrigins,
    /// Model identifier handed to the provider
    pub model: String,
    pub provider: ProviderKind,
    pub ollama: OllamaConfig,
    pub bind_addr: String,
    pub static_dir: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    
    /// Build settings from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret_key = lookup("SECRET_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("SECRET_KEY"))?;
        
        let cors_origins = parse_cors_origins(
            &lookup("BACKEND_CORS_ORIGINS").unwrap_or_else(|| "*".into()),
        )?;
        
        let provider = match lookup("LLM_PROVIDER").as_deref() {
            None | Some("ollama") => ProviderKind::Ollama,
            Some("mock") => ProviderKind::Mock,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LLM_PROVIDER",
                    value: other.into(),
                });
            }
        };
        
        Ok(Self {
            project_name: lookup("PROJECT_NAME").unwrap_or_else(|| DEFAULT_PROJECT_NAME.into()),
            secret_key,
            cors_origins,
            model: lookup("MODEL_PATH").unwrap_or_else(|| DEFAULT_MODEL.into()),
            provider,
            ollama: OllamaConfig::from_lookup(&lookup),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()),
        })
    }
    
    pub fn has_weak_secret(&self) -> bool {
        self.secret_key.len() < MIN_SECRET_LEN
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("project_name", &self.project_name)
            .field("secret_key", &"<redacted>")
            .field("cors_origins", &self.cors_origins)
            .field("model", &self.model)
            .field("provider", &self.provider)
            .field("ollama", &self.ollama)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    
    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }
    
    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                key: "BACKEND_CORS_ORIGINS",
                value: origin.into(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
