//! Project dataset model.
//!
//! - `types`: `ProjectRecord` and its nested values
//! - `partition`: category split + stable ordering

pub mod types;
pub mod partition;

pub use types::{
    non_empty, ActionLink, Category, LayoutVariant, Media, MediaKind, ProjectRecord,
    ToolStackEntry,
};
pub use partition::{partition_by_category, Partitioned};
