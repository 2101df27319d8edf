// File: crates/decade-chart/src/error.rs
// Summary: Error type for loading chart documents.

use std::path::PathBuf;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed chart document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid year value: {0}")]
    InvalidYear(String),
}

impl ChartError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn invalid_year(raw: impl Into<String>) -> Self {
        Self::InvalidYear(raw.into())
    }
}
