pub mod error;
pub mod models;
pub mod storage;
pub mod summarize;

pub use error::Error;
pub use models::{Article, FeedSource, PinnedArticle};
pub use storage::PinStore;
pub use summarize::{Summarizer, SummaryRequest};

pub type Result<T> = std::result::Result<T, Error>;
