use std::sync::LazyLock;

use regex::Regex;

use crate::scan::RawEntry;
use crate::sources::SourceProcessor;

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]+src\s*=\s*['"]([^'"]+)['"]"#).unwrap()
});

/// Resolve the entry's illustrative image. Strategies run in priority order
/// and the first non-empty URL wins:
/// media namespace attribute, image enclosure, first `<img>` in the raw
/// content, then the source-specific fallback.
pub fn resolve(entry: &RawEntry, processor: &dyn SourceProcessor) -> Option<String> {
    if !entry.media_url.is_empty() {
        return Some(entry.media_url.clone());
    }

    if entry.enclosure_type.starts_with("image/") && !entry.enclosure_url.is_empty() {
        return Some(entry.enclosure_url.clone());
    }

    let raw = entry.raw_content();
    if !raw.is_empty() {
        if let Some(captures) = IMG_SRC.captures(raw) {
            return Some(captures[1].to_string());
        }
    }

    processor.fallback_image(entry)
}
