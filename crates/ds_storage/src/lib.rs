pub mod backends;
pub mod board;

pub use backends::json::JsonFileStore;
pub use backends::memory::MemoryStore;
pub use board::PinBoard;

pub mod prelude {
    pub use crate::{JsonFileStore, MemoryStore, PinBoard};
    pub use ds_core::{PinStore, PinnedArticle, Result};
}
