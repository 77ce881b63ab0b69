use chrono::Utc;
use ds_core::{Article, FeedSource};

use crate::scan::{self, RawEntry};
use crate::sources;
use crate::{image, tags};

const MAX_CONTENT_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

/// Normalize a raw feed document into uniform articles, one per entry, in
/// document order. Ordering and filtering are caller responsibilities.
///
/// Fails soft: a malformed document yields an empty list. Missing fields get
/// literal defaults, so every article carries a non-empty title, link and
/// pubDate.
pub fn normalize_feed(xml: &str, source: FeedSource) -> Vec<Article> {
    let entries = scan::scan_entries(xml.as_bytes());
    tracing::debug!("normalizing {} entries from {}", entries.len(), source);
    entries
        .into_iter()
        .map(|entry| normalize_entry(entry, source))
        .collect()
}

fn normalize_entry(entry: RawEntry, source: FeedSource) -> Article {
    let title = if entry.title.is_empty() {
        "No title".to_string()
    } else {
        entry.title.clone()
    };
    let link = if entry.link.is_empty() {
        "#".to_string()
    } else {
        entry.link.clone()
    };
    let pub_date = if entry.pub_date.is_empty() {
        Utc::now().to_rfc2822()
    } else {
        entry.pub_date.clone()
    };

    let processor = sources::for_source(source);
    let processed = processor.description(&entry);
    let content = truncate(&processed.content);

    let image = image::resolve(&entry, processor);
    let tags = tags::extract_tags(&content);

    Article {
        title,
        link,
        pub_date,
        description: content.clone(),
        content,
        image,
        tags,
        source,
        comment_url: processed.comment_url,
    }
}

/// Cut to 200 characters with a trailing ellipsis. Character count, not a
/// word boundary; consumers depend on the exact cut and the "..." literal.
fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_CONTENT_CHARS {
        let cut: String = text.chars().take(MAX_CONTENT_CHARS).collect();
        format!("{}{}", cut.trim(), ELLIPSIS)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>DEV Community</title>
    <item>
      <title>Shipping a React app</title>
      <link>https://dev.to/alex/shipping-a-react-app</link>
      <pubDate>Mon, 01 Jan 2024 10:00:00 +0000</pubDate>
      <description><![CDATA[<p>Notes on shipping a React app with TypeScript.</p>]]></description>
      <cover_image>https://cdn.dev.to/cover.png</cover_image>
    </item>
    <item>
      <description>An entry missing everything else</description>
    </item>
  </channel>
</rss>"#;

    const HN_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <item>
      <title>Show HN: A tiny feed reader</title>
      <link>https://example.com/reader</link>
      <pubDate>Tue, 02 Jan 2024 09:00:00 +0000</pubDate>
      <description><![CDATA[
<p>Article URL: <a href="https://example.com/reader">https://example.com/reader</a></p>
<p>Comments URL: <a href="https://news.ycombinator.com/item?id=41000000">https://news.ycombinator.com/item?id=41000000</a></p>
<p>Points: 42</p>
<p># Comments: 17</p>
]]></description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_well_formed_entry() {
        let articles = normalize_feed(DEV_FEED, FeedSource::Dev);
        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert_eq!(first.title, "Shipping a React app");
        assert_eq!(first.link, "https://dev.to/alex/shipping-a-react-app");
        assert_eq!(
            first.content,
            "Notes on shipping a React app with TypeScript."
        );
        assert_eq!(first.description, first.content);
        assert_eq!(first.tags, vec!["react", "typescript"]);
        assert_eq!(first.image.as_deref(), Some("https://cdn.dev.to/cover.png"));
        assert!(first.comment_url.is_none());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let articles = normalize_feed(DEV_FEED, FeedSource::Dev);
        let bare = &articles[1];
        assert_eq!(bare.title, "No title");
        assert_eq!(bare.link, "#");
        assert!(!bare.pub_date.is_empty());
        assert_eq!(bare.content, "An entry missing everything else");
    }

    #[test]
    fn test_hn_metadata_only_entry() {
        let articles = normalize_feed(HN_FEED, FeedSource::Hn);
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.content, "42 points on Hacker News");
        assert_eq!(
            article.comment_url.as_deref(),
            Some("https://news.ycombinator.com/item?id=41000000")
        );
        // Tags come from the fallback string, which matches nothing.
        assert!(article.tags.is_empty());
    }

    #[test]
    fn test_hn_body_paragraph_truncated_like_any_other_source() {
        let body = "y".repeat(250);
        let xml = format!(
            "<rss><channel><item>\
             <title>Ask HN: long form</title>\
             <link>https://example.com/long</link>\
             <pubDate>Tue, 02 Jan 2024 09:00:00 +0000</pubDate>\
             <description><![CDATA[<p>{}</p>\
             <p>Comments URL: <a href=\"https://news.ycombinator.com/item?id=41000001\">x</a></p>\
             <p>Points: 9</p>]]></description>\
             </item></channel></rss>",
            body
        );
        let articles = normalize_feed(&xml, FeedSource::Hn);
        let content = &articles[0].content;
        assert_eq!(content.chars().count(), 203);
        assert!(content.ends_with("..."));
        assert!(content.starts_with("yyy"));
        assert_eq!(
            articles[0].comment_url.as_deref(),
            Some("https://news.ycombinator.com/item?id=41000001")
        );
    }

    #[test]
    fn test_truncation_bound() {
        let body: String = "x".repeat(500);
        let xml = format!(
            "<rss><channel><item><title>t</title><link>l</link>\
             <pubDate>Mon, 01 Jan 2024 10:00:00 +0000</pubDate>\
             <description>{}</description></item></channel></rss>",
            body
        );
        let articles = normalize_feed(&xml, FeedSource::Dev);
        let content = &articles[0].content;
        assert!(content.chars().count() <= 203);
        assert!(content.ends_with("..."));
        assert!(content.starts_with("xxx"));
    }

    #[test]
    fn test_short_content_untouched() {
        let articles = normalize_feed(DEV_FEED, FeedSource::Dev);
        assert!(!articles[0].content.ends_with("..."));
    }

    #[test]
    fn test_idempotent_for_dated_entries() {
        let first = normalize_feed(DEV_FEED, FeedSource::Dev);
        let second = normalize_feed(DEV_FEED, FeedSource::Dev);
        assert_eq!(first[0], second[0]);
    }

    #[test]
    fn test_malformed_feed_yields_empty() {
        let articles = normalize_feed("<rss><channel><item>", FeedSource::Dev);
        assert!(articles.is_empty());
        let articles = normalize_feed("not xml at all", FeedSource::Hn);
        assert!(articles.is_empty());
    }
}
