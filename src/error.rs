//! Error types for dataset loading and country selection.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a dataset load can fail. Never escapes `Loader::load_initial_data`;
/// it is logged and turned into `LoadState::Failed` there.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("network error while fetching {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed dataset payload")]
    Parse(#[from] serde_json::Error),
}

/// The requested country name matches no entry of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("country not found: {0}")]
pub struct CountryNotFound(pub String);
