//! HTML fragment builders
//!
//! One builder per fragment type, composed by `ProjectRenderer`:
//! - `media`: embedded player or lazy image
//! - `featured`: full project article
//! - `archive`: desktop table row + mobile card
//!
//! Text fields are inserted verbatim. The dataset is authored alongside the
//! page and may carry inline markup (e.g. `<strong>` in descriptions).

pub mod media;
pub mod featured;
pub mod archive;
pub mod generator;

pub use media::media_fragment;
pub use featured::featured_article;
pub use archive::{archive_card, archive_row, archive_tags, ARCHIVE_TAG_LIMIT};
pub use generator::{ProjectRenderer, RenderedSections};
