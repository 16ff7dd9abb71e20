//! Render configuration from environment variables.
//!
//! | Variable        | Default              |
//! |-----------------|----------------------|
//! | `PROJECTS_PATH` | `data/projects.json` |
//! | `PAGE_PATH`     | `data/index.html`    |
//! | `OUTPUT_PATH`   | `dist/index.html`    |

use std::path::PathBuf;

pub const DEFAULT_PROJECTS_PATH: &str = "data/projects.json";
pub const DEFAULT_PAGE_PATH: &str = "data/index.html";
pub const DEFAULT_OUTPUT_PATH: &str = "dist/index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// JSON project dataset.
    pub projects_path: PathBuf,
    /// Page shell containing the insertion points.
    pub page_path: PathBuf,
    /// Where the mounted page is written.
    pub output_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            projects_path: PathBuf::from(DEFAULT_PROJECTS_PATH),
            page_path: PathBuf::from(DEFAULT_PAGE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RenderConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset or empty keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            projects_path: get("PROJECTS_PATH", DEFAULT_PROJECTS_PATH),
            page_path: get("PAGE_PATH", DEFAULT_PAGE_PATH),
            output_path: get("OUTPUT_PATH", DEFAULT_OUTPUT_PATH),
        }
    }
}
