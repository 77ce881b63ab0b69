use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// One `<item>` as found in the document, before normalization.
///
/// Every field defaults to empty; empty means absent. Text and CDATA chunks
/// inside an element are concatenated, and only the first occurrence of a
/// given element is kept.
#[derive(Debug, Default, Clone)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub description: String,
    pub content_encoded: String,
    pub content: String,
    pub social_image: String,
    pub cover_image: String,
    pub media_url: String,
    pub enclosure_url: String,
    pub enclosure_type: String,
}

impl RawEntry {
    /// Raw markup used for image extraction: prefers the encoded-content
    /// field, then plain content, then the description.
    pub fn raw_content(&self) -> &str {
        if !self.content_encoded.is_empty() {
            &self.content_encoded
        } else if !self.content.is_empty() {
            &self.content
        } else {
            &self.description
        }
    }
}

/// Scan a feed document for its entries.
///
/// Fails soft: a reader error yields an empty list (a corrupt feed degrades
/// the aggregate view, it must not abort it). Entries come back in document
/// order.
pub fn scan_entries(xml: &[u8]) -> Vec<RawEntry> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current: Option<RawEntry> = None;
    let mut text = String::new();
    // Element nesting below <item>; text resets only at direct children so
    // markup nested inside a field keeps its surrounding text, like a DOM
    // textContent lookup would.
    let mut item_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" {
                    current = Some(RawEntry::default());
                    item_depth = 0;
                } else if let Some(ref mut entry) = current {
                    item_depth += 1;
                    if item_depth == 1 {
                        text.clear();
                    }
                    capture_attributes(entry, &name, &e);
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if let Some(ref mut entry) = current {
                    capture_attributes(entry, &name, &e);
                }
            }
            Ok(Event::Text(e)) => {
                if current.is_some() {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(e)) => {
                if current.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                    text.clear();
                } else if let Some(ref mut entry) = current {
                    if item_depth == 1 {
                        assign_field(entry, &name, &text);
                        text.clear();
                    }
                    item_depth = item_depth.saturating_sub(1);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!("feed scan failed, dropping document: {}", e);
                return Vec::new();
            }
            _ => {}
        }
        buf.clear();
    }

    entries
}

fn assign_field(entry: &mut RawEntry, element: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    let field = match element {
        "title" => &mut entry.title,
        "link" => &mut entry.link,
        "pubDate" => &mut entry.pub_date,
        "description" => &mut entry.description,
        "content:encoded" | "encoded" => &mut entry.content_encoded,
        "content" => &mut entry.content,
        "social_image" => &mut entry.social_image,
        "cover_image" => &mut entry.cover_image,
        _ => return,
    };
    // First occurrence wins, as with a querySelector lookup.
    if field.is_empty() {
        field.push_str(text);
    }
}

fn capture_attributes(entry: &mut RawEntry, element: &str, e: &quick_xml::events::BytesStart) {
    match element {
        "media:content" | "media:thumbnail" => {
            if entry.media_url.is_empty() {
                if let Some(url) = attribute_value(e, "url") {
                    entry.media_url = url;
                }
            }
        }
        "enclosure" => {
            if entry.enclosure_url.is_empty() {
                if let Some(url) = attribute_value(e, "url") {
                    entry.enclosure_url = url;
                }
                if let Some(kind) = attribute_value(e, "type") {
                    entry.enclosure_type = kind;
                }
            }
        }
        _ => {}
    }
}

fn attribute_value(e: &quick_xml::events::BytesStart, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key.as_bytes())
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Sample</title>
    <item>
      <title>First post</title>
      <link>https://example.com/first</link>
      <pubDate>Mon, 01 Jan 2024 10:00:00 +0000</pubDate>
      <description><![CDATA[<p>Hello &amp; welcome</p>]]></description>
      <media:thumbnail url="https://cdn.example.com/thumb.png"/>
    </item>
    <item>
      <title>Second post</title>
      <link>https://example.com/second</link>
      <pubDate>Tue, 02 Jan 2024 10:00:00 +0000</pubDate>
      <description>Plain text body</description>
      <enclosure url="https://cdn.example.com/pic.jpg" type="image/jpeg" length="1234"/>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_scan_items_in_document_order() {
        let entries = scan_entries(FEED.as_bytes());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First post");
        assert_eq!(entries[1].title, "Second post");
    }

    #[test]
    fn test_cdata_kept_verbatim() {
        let entries = scan_entries(FEED.as_bytes());
        assert_eq!(entries[0].description, "<p>Hello &amp; welcome</p>");
    }

    #[test]
    fn test_channel_title_not_captured_as_item_title() {
        let entries = scan_entries(FEED.as_bytes());
        assert_ne!(entries[0].title, "Sample");
    }

    #[test]
    fn test_media_and_enclosure_attributes() {
        let entries = scan_entries(FEED.as_bytes());
        assert_eq!(entries[0].media_url, "https://cdn.example.com/thumb.png");
        assert_eq!(entries[1].enclosure_url, "https://cdn.example.com/pic.jpg");
        assert_eq!(entries[1].enclosure_type, "image/jpeg");
    }

    #[test]
    fn test_malformed_document_yields_empty() {
        let entries = scan_entries(b"<rss><channel><item><title>Broken</channel>");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_markup_nested_in_field_keeps_surrounding_text() {
        let xml = r#"<rss><channel><item>
            <title>Breaking <b>news</b> roundup</title>
            <link>https://example.com/roundup</link>
        </item></channel></rss>"#;
        let entries = scan_entries(xml.as_bytes());
        assert!(entries[0].title.starts_with("Breaking"));
        assert!(entries[0].title.contains("news"));
        assert!(entries[0].title.ends_with("roundup"));
        assert_eq!(entries[0].link, "https://example.com/roundup");
    }

    #[test]
    fn test_content_encoded_variants() {
        let xml = r#"<rss><channel><item>
            <content:encoded><![CDATA[<b>rich</b>]]></content:encoded>
        </item></channel></rss>"#;
        let entries = scan_entries(xml.as_bytes());
        assert_eq!(entries[0].content_encoded, "<b>rich</b>");
        assert_eq!(entries[0].raw_content(), "<b>rich</b>");
    }
}
