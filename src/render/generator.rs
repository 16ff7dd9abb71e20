//! Project renderer
//!
//! Entry point for turning the project dataset into the three page fragments.
//!
//! Public API (consumed by the `render_portfolio` binary and the page mounter):
//! - ProjectRenderer::new() -> Self
//! - ProjectRenderer::render_all(projects) -> RenderedSections

use serde::Serialize;

use crate::projects::{partition_by_category, ProjectRecord};
use super::archive::{archive_card, archive_row};
use super::featured::featured_article;

/// Separator between consecutive fragments within a section.
const FRAGMENT_SEPARATOR: &str = "\n";

/// Rendered markup for each insertion point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedSections {
    pub featured_html: String,
    pub archive_rows_html: String,
    pub archive_cards_html: String,
}

/// Project renderer - stateless HTML generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectRenderer;

impl ProjectRenderer {
    /// Create a new project renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render every project into its section.
    ///
    /// Featured projects become articles; archive projects become both a table
    /// row and a mobile card. Each section is ordered by `order` (stable).
    /// The input is only borrowed, and the same input always yields the same output.
    pub fn render_all(&self, projects: &[ProjectRecord]) -> RenderedSections {
        let parts = partition_by_category(projects);

        tracing::debug!(
            "Rendering {} featured and {} archive projects",
            parts.featured.len(),
            parts.archive.len()
        );

        RenderedSections {
            featured_html: join_fragments(parts.featured.iter().map(|p| featured_article(p))),
            archive_rows_html: join_fragments(parts.archive.iter().map(|p| archive_row(p))),
            archive_cards_html: join_fragments(parts.archive.iter().map(|p| archive_card(p))),
        }
    }
}

fn join_fragments(fragments: impl Iterator<Item = String>) -> String {
    fragments.collect::<Vec<_>>().join(FRAGMENT_SEPARATOR)
}
