use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkimConfig {
    pub server: ServerConfig,
    pub summarizer: SummarizerConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Stopword language code ("en", "de", ...).
    pub language: String,
    /// Ratio used when a request omits `summary_ratio`.
    pub default_ratio: f64,
    /// Emit selected sentences in original reading order instead of
    /// score order.
    pub preserve_order: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory where trimmed audio and resized images are written,
    /// served back under /static.
    pub output_dir: String,
}

impl Default for SkimConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            summarizer: SummarizerConfig {
                language: "en".into(),
                default_ratio: 0.3,
                preserve_order: false,
            },
            media: MediaConfig {
                output_dir: "static".into(),
            },
        }
    }
}

impl SkimConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }
}
