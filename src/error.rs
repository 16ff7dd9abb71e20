use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or writing portfolio files.
///
/// Rendering itself is total; only the file boundary can fail.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project data in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
