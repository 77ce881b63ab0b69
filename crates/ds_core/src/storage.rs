use async_trait::async_trait;

use crate::models::PinnedArticle;
use crate::Result;

/// Persistence seam for pinned-article state.
///
/// The whole pin set is loaded and saved as one unit, mirroring the single
/// storage key the browser client uses. Implementations must treat a
/// corrupted stored value as an empty set rather than failing.
#[async_trait]
pub trait PinStore: Send + Sync {
    /// Load all pins, oldest first.
    async fn load(&self) -> Result<Vec<PinnedArticle>>;

    /// Replace the stored pin set.
    async fn save(&self, pins: &[PinnedArticle]) -> Result<()>;
}
