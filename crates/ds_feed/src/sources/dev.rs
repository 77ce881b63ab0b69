use ds_core::FeedSource;

use crate::sanitize;
use crate::scan::RawEntry;
use crate::sources::{ProcessedDescription, SourceProcessor};

/// Generic blog-feed rules: prefer the description field, fall back to
/// encoded content, then plain content, and sanitize whatever was chosen.
pub struct DevProcessor;

impl SourceProcessor for DevProcessor {
    fn source(&self) -> FeedSource {
        FeedSource::Dev
    }

    fn description(&self, entry: &RawEntry) -> ProcessedDescription {
        let raw = if !entry.description.is_empty() {
            &entry.description
        } else if !entry.content_encoded.is_empty() {
            &entry.content_encoded
        } else {
            &entry.content
        };
        ProcessedDescription {
            content: sanitize::clean(raw),
            comment_url: None,
        }
    }

    fn fallback_image(&self, entry: &RawEntry) -> Option<String> {
        if !entry.social_image.is_empty() {
            Some(entry.social_image.clone())
        } else if !entry.cover_image.is_empty() {
            Some(entry.cover_image.clone())
        } else {
            None
        }
    }
}
