use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // One generic tag matcher, no nested-tag awareness. Also eats a tag left
    // open at the end of the text.
    Regex::new(r"</?[^>]+(>|$)").unwrap()
});

/// Remove all markup tags.
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Decode the six named entities the feeds actually emit. No general
/// numeric-entity decoding.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}

/// Strip markup, then decode entities.
pub fn clean(text: &str) -> String {
    decode_entities(&strip_tags(text))
}
