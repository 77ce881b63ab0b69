use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which of the two supported feeds an article came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    /// Dev.to developer blog feed.
    Dev,
    /// Hacker News front page, via hnrss.org.
    Hn,
}

impl FeedSource {
    pub const ALL: [FeedSource; 2] = [FeedSource::Dev, FeedSource::Hn];

    pub fn slug(&self) -> &'static str {
        match self {
            FeedSource::Dev => "dev",
            FeedSource::Hn => "hn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedSource::Dev => "Dev.to",
            FeedSource::Hn => "Hacker News",
        }
    }

    pub fn feed_url(&self) -> &'static str {
        match self {
            FeedSource::Dev => "https://dev.to/feed",
            FeedSource::Hn => "https://hnrss.org/frontpage",
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FeedSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(FeedSource::Dev),
            "hn" => Ok(FeedSource::Hn),
            other => Err(Error::InvalidSource(other.to_string())),
        }
    }
}

/// Uniform post-normalization article record.
///
/// `link` is the identity key: deduplication, pinning and sort stability all
/// key off it. `description` and `content` carry the same sanitized text;
/// downstream consumers read one or the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Publication timestamp in source-native string form. Not normalized
    /// here; ranking parses it leniently and falls back to the raw string.
    pub pub_date: String,
    pub description: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub source: FeedSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_url: Option<String>,
}

/// A user pin. `title` is a denormalized snapshot taken at pin time;
/// `pinned_at` is milliseconds since the epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedArticle {
    pub link: String,
    pub title: String,
    pub pinned_at: i64,
}
