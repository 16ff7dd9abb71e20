//! Portfolio Renderer
//!
//! Renders a portfolio page's project listings from a static dataset.
//!
//! - `projects/`: project records, category partition and ordering
//! - `render/`: HTML fragment builders and `ProjectRenderer`
//! - `page`: insertion points and mounting into a page shell
//! - `interactions`: menu, navbar and lazy-image state transitions
//! - `data`, `config`, `error`: dataset loading, env config, error type

pub mod projects;
pub mod render;
pub mod page;
pub mod interactions;
pub mod data;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use projects::{Category, ProjectRecord};
pub use render::{ProjectRenderer, RenderedSections};
pub use page::{mount, HtmlDocument, InsertionHost, InsertionPoint, MountReport};
pub use data::{load_projects, parse_projects};
pub use config::RenderConfig;
pub use error::PortfolioError;
