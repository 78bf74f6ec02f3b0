use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cannot read photo store at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Photo store contains invalid JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
