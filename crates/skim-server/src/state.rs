//! Application state shared across all handlers.

use skim_core::SkimConfig;
use skim_nlp::Vocabulary;
use skim_summarizer::{Summarizer, SummaryOrder};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state. The summarizer (and its vocabulary) is
/// built once here; failure is a startup error, never a request error.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
    pub config: Arc<SkimConfig>,
    pub media_dir: PathBuf,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: SkimConfig) -> skim_core::Result<Self> {
        let vocab = Arc::new(Vocabulary::new(&config.summarizer.language)?);
        let order = if config.summarizer.preserve_order {
            SummaryOrder::Original
        } else {
            SummaryOrder::ByScore
        };
        let summarizer = Arc::new(Summarizer::new(vocab).with_order(order));

        let media_dir = PathBuf::from(&config.media.output_dir);
        std::fs::create_dir_all(&media_dir)?;

        Ok(Self {
            summarizer,
            config: Arc::new(config),
            media_dir,
            start_time: Instant::now(),
        })
    }
}
