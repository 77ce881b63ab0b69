use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ds_core::{Article, PinnedArticle};

/// Lenient publication-date parse for ranking only. The article keeps its
/// source-native string; an unparseable date simply ranks last.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Pin-aware ordering over a merged article list: pinned articles first,
/// most recently pinned on top, then everything else by publication recency.
/// The sort is stable, so document order breaks ties.
pub fn rank(articles: &mut [Article], pins: &[PinnedArticle]) {
    let pinned_at: HashMap<&str, i64> = pins
        .iter()
        .map(|pin| (pin.link.as_str(), pin.pinned_at))
        .collect();

    articles.sort_by_cached_key(|article| match pinned_at.get(article.link.as_str()) {
        Some(&at) => (0u8, Reverse(at), Reverse(0)),
        None => {
            let ts = parse_pub_date(&article.pub_date)
                .map(|dt| dt.timestamp_millis())
                .unwrap_or(i64::MIN);
            (1u8, Reverse(0), Reverse(ts))
        }
    });
}

/// Case-insensitive substring search over title, description and content.
/// A blank query matches everything.
pub fn matches_query(article: &Article, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    article.title.to_lowercase().contains(&query)
        || article.description.to_lowercase().contains(&query)
        || article.content.to_lowercase().contains(&query)
}
