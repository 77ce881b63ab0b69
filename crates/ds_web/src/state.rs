use std::sync::Arc;

use ds_core::Summarizer;
use ds_storage::PinBoard;

pub struct AppState {
    pub http: reqwest::Client,
    pub summarizer: Arc<dyn Summarizer>,
    pub pins: PinBoard,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn Summarizer>, pins: PinBoard) -> Self {
        Self {
            http: reqwest::Client::new(),
            summarizer,
            pins,
        }
    }
}
