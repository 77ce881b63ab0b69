use std::sync::LazyLock;

use ds_core::FeedSource;
use regex::Regex;

use crate::scan::RawEntry;
use crate::sources::{ProcessedDescription, SourceProcessor};

static CDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").unwrap());
static COMMENT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a href="(https://news\.ycombinator\.com/item\?id=[^"]+)">"#).unwrap()
});
static POINTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p>Points: (\d+)</p>").unwrap());
static ARTICLE_URL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p>Article URL:.*?</p>").unwrap());
static COMMENTS_URL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p>Comments URL:.*?</p>").unwrap());
static POINTS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p>Points:.*?</p>").unwrap());
static COMMENT_COUNT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p># Comments:.*?</p>").unwrap());
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p>(.*?)</p>").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HnDescription {
    pub content: String,
    pub comment_url: Option<String>,
    pub points: Option<String>,
}

/// Pull body text, discussion link and score out of the stereotyped hnrss
/// description template.
///
/// The template carries four metadata paragraphs (`Article URL:`,
/// `Comments URL:`, `Points:`, `# Comments:`) and sometimes a body paragraph
/// before them. When nothing but metadata is present the body is synthesized
/// from the score, so the content is always non-empty.
pub fn process_description(description: &str) -> HnDescription {
    let mut content = CDATA.replace_all(description, "$1").into_owned();

    let comment_url = COMMENT_LINK
        .captures(&content)
        .map(|c| c[1].to_string());
    let points = POINTS.captures(&content).map(|c| c[1].to_string());

    content = ARTICLE_URL_LINE.replace(&content, "").into_owned();
    content = COMMENTS_URL_LINE.replace(&content, "").into_owned();
    content = POINTS_LINE.replace(&content, "").into_owned();
    content = COMMENT_COUNT_LINE.replace(&content, "").into_owned();

    let body = match PARAGRAPH.captures(&content) {
        Some(c) => c[1].to_string(),
        None => match &points {
            Some(p) => format!("{} points on Hacker News", p),
            None => "Discussion on Hacker News".to_string(),
        },
    };

    HnDescription {
        content: body,
        comment_url,
        points,
    }
}

pub struct HnProcessor;

impl SourceProcessor for HnProcessor {
    fn source(&self) -> FeedSource {
        FeedSource::Hn
    }

    fn description(&self, entry: &RawEntry) -> ProcessedDescription {
        let processed = process_description(&entry.description);
        ProcessedDescription {
            content: processed.content,
            comment_url: processed.comment_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA_ONLY: &str = concat!(
        "<![CDATA[",
        "<p>Article URL: <a href=\"https://example.com/story\">https://example.com/story</a></p>",
        "<p>Comments URL: <a href=\"https://news.ycombinator.com/item?id=41000000\">",
        "https://news.ycombinator.com/item?id=41000000</a></p>",
        "<p>Points: 42</p>",
        "<p># Comments: 17</p>",
        "]]>"
    );

    #[test]
    fn test_metadata_only_falls_back_to_points() {
        let processed = process_description(METADATA_ONLY);
        assert_eq!(processed.content, "42 points on Hacker News");
        assert_eq!(processed.points.as_deref(), Some("42"));
        assert_eq!(
            processed.comment_url.as_deref(),
            Some("https://news.ycombinator.com/item?id=41000000")
        );
    }

    #[test]
    fn test_body_paragraph_survives_metadata_stripping() {
        let description = concat!(
            "<p>Ask HN: how do you test parsers?</p>",
            "<p>Article URL: <a href=\"https://example.com\">x</a></p>",
            "<p>Comments URL: <a href=\"https://news.ycombinator.com/item?id=41000001\">x</a></p>",
            "<p>Points: 7</p>",
            "<p># Comments: 3</p>",
        );
        let processed = process_description(description);
        assert_eq!(processed.content, "Ask HN: how do you test parsers?");
    }

    #[test]
    fn test_no_points_no_body_generic_placeholder() {
        let processed = process_description("<p>Comments URL: x</p>");
        assert_eq!(processed.content, "Discussion on Hacker News");
        assert!(processed.points.is_none());
    }

    #[test]
    fn test_cdata_unwrapped() {
        let processed = process_description("<![CDATA[<p>hello</p>]]>");
        assert_eq!(processed.content, "hello");
    }
}
