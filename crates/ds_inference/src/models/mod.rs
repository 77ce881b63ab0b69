use std::sync::Arc;

use ds_core::Summarizer;

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Pick a summarizer for the given config: the OpenAI-compatible client when
/// an API key is present, the dummy model otherwise.
pub fn create_model(config: &Config) -> Arc<dyn Summarizer> {
    match &config.api_key {
        Some(key) if !key.is_empty() => Arc::new(OpenAiModel::new(
            key.clone(),
            config.model_name.clone(),
            config.base_url.clone(),
        )),
        _ => {
            tracing::info!("no API key configured, using dummy summarizer");
            Arc::new(DummyModel)
        }
    }
}
