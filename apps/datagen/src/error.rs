use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed feature collection: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("feature id {0:?} is not a 5-digit county code")]
    InvalidFeatureId(String),

    #[error("failed to encode county index: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
