pub mod aggregate;
pub mod image;
pub mod normalize;
pub mod sanitize;
pub mod scan;
pub mod sources;
pub mod tags;

pub use normalize::normalize_feed;
pub use scan::RawEntry;

pub mod prelude {
    pub use crate::aggregate::{matches_query, rank};
    pub use crate::normalize::normalize_feed;
    pub use ds_core::{Article, FeedSource, PinnedArticle};
}
