//! Project dataset loading.
//!
//! The dataset is a JSON array of project records, authored by hand next to
//! the page shell. Loading is the only fallible step before rendering.

use std::fs;
use std::path::Path;

use crate::error::{PortfolioError, Result};
use crate::projects::ProjectRecord;

/// Parse a JSON array of project records.
pub fn parse_projects(json: &str) -> Result<Vec<ProjectRecord>> {
    parse_with_origin(json, "<inline>")
}

/// Read and parse the dataset at `path`.
pub fn load_projects(path: impl AsRef<Path>) -> Result<Vec<ProjectRecord>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let projects = parse_with_origin(&json, &path.display().to_string())?;
    tracing::info!("Loaded {} projects from {}", projects.len(), path.display());
    Ok(projects)
}

fn parse_with_origin(json: &str, origin: &str) -> Result<Vec<ProjectRecord>> {
    serde_json::from_str(json).map_err(|source| PortfolioError::Parse {
        origin: origin.to_string(),
        source,
    })
}
