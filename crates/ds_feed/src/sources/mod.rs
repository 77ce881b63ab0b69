use ds_core::FeedSource;

use crate::scan::RawEntry;

pub mod dev;
pub mod hn;

/// Description text after source-specific processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDescription {
    pub content: String,
    pub comment_url: Option<String>,
}

/// Per-source processing rules, selected once per normalization call.
pub trait SourceProcessor: Send + Sync {
    fn source(&self) -> FeedSource;

    /// Turn the entry's raw description fields into display text.
    fn description(&self, entry: &RawEntry) -> ProcessedDescription;

    /// Last-resort image lookup, after the generic strategies have failed.
    fn fallback_image(&self, _entry: &RawEntry) -> Option<String> {
        None
    }
}

pub fn for_source(source: FeedSource) -> &'static dyn SourceProcessor {
    match source {
        FeedSource::Dev => &dev::DevProcessor,
        FeedSource::Hn => &hn::HnProcessor,
    }
}
