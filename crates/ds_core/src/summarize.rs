use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// What the summarize endpoint forwards to the model: the article's title,
/// its normalized content and its canonical URL.
///
/// Fields default to empty so a missing field and an empty one are the same
/// case for the caller's validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: String,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a plain-text summary of one article.
    async fn summarize(&self, request: &SummaryRequest) -> Result<String>;
}
