use std::path::PathBuf;

use async_trait::async_trait;
use ds_core::{PinStore, PinnedArticle, Result};

/// File-backed pin store: one JSON array in one file, the same layout the
/// browser client kept under its single localStorage key.
///
/// A missing file is an empty set. A corrupt or non-array value is logged
/// and treated as empty; the next save overwrites it.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PinStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<PinnedArticle>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<PinnedArticle>>(&raw) {
            Ok(pins) => Ok(pins),
            Err(e) => {
                tracing::warn!(
                    "corrupt pin store at {}, resetting to empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, pins: &[PinnedArticle]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let raw = serde_json::to_string(pins)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}
