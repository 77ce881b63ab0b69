pub mod models;

pub use models::create_model;

/// Summarizer configuration. With no API key the factory hands back the
/// dummy model, so the rest of the system works offline.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model_name: std::env::var("DEVSTREAM_MODEL").ok(),
            base_url: std::env::var("DEVSTREAM_MODEL_BASE_URL").ok(),
        }
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::Config;
    pub use ds_core::{Result, Summarizer, SummaryRequest};
}
