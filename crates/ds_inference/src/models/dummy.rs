use async_trait::async_trait;
use ds_core::{Result, Summarizer, SummaryRequest};

const SUMMARY_WORDS: usize = 40;

/// Deterministic offline summarizer: the first words of the content.
#[derive(Debug, Default)]
pub struct DummyModel;

#[async_trait]
impl Summarizer for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        let words: Vec<&str> = request
            .content
            .split_whitespace()
            .take(SUMMARY_WORDS)
            .collect();
        Ok(words.join(" "))
    }
}
