//! Project record types.
//!
//! Records are deserialized from the portfolio dataset (a JSON array whose
//! keys follow the page script's naming: `type`, `descriptionShort`,
//! `demoButton`, ...). Field names on the Rust side describe what the
//! renderer does with each value.

use serde::{Deserialize, Serialize};

/// Which listing a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Featured,
    Archive,
}

/// Mirrored arrangement of a featured article. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutVariant {
    #[serde(rename = "reverse")]
    Reversed,
    #[default]
    #[serde(rename = "normal", other)]
    Normal,
}

impl LayoutVariant {
    /// Class modifier appended to `project-item` (including its leading space).
    pub fn class_modifier(&self) -> &'static str {
        match self {
            LayoutVariant::Normal => "",
            LayoutVariant::Reversed => " reverse",
        }
    }
}

/// Media kind. Anything unrecognised lands on `Unknown` and renders as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[serde(rename = "youtube")]
    Embed,
    #[default]
    #[serde(alias = "gif")]
    Image,
    #[serde(other)]
    Unknown,
}

/// Visual attached to a featured project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    /// Video id for embeds, image URL otherwise.
    #[serde(rename = "src", default)]
    pub source: String,
    #[serde(rename = "alt", default)]
    pub alt_text: String,
}

/// Call-to-action link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub label: String,
}

/// One tool-stack entry: icon class plus visible label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolStackEntry {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub label: String,
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub domain: String,
    #[serde(rename = "descriptionShort", default)]
    pub short_description: String,
    #[serde(rename = "description", default)]
    pub long_description: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub show_subtitle: bool,
    #[serde(default)]
    pub microcopy: Option<String>,
    #[serde(default)]
    pub show_microcopy: bool,
    #[serde(rename = "layout", default)]
    pub layout_variant: LayoutVariant,
    /// May contain gaps (`null` or empty strings) from upstream data.
    #[serde(default)]
    pub features: Vec<Option<String>>,
    #[serde(default)]
    pub tech_tags: Vec<String>,
    #[serde(default)]
    pub tool_stack: Vec<ToolStackEntry>,
    #[serde(default)]
    pub media: Media,
    #[serde(rename = "demoButton", default)]
    pub primary_action: ActionLink,
    #[serde(rename = "codeButton", default)]
    pub secondary_action: ActionLink,
}

impl ProjectRecord {
    /// Minimal record with every optional part empty.
    pub fn new(category: Category, order: i64, title: impl Into<String>) -> Self {
        Self {
            category,
            order,
            title: title.into(),
            domain: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            badge: String::new(),
            subtitle: None,
            show_subtitle: false,
            microcopy: None,
            show_microcopy: false,
            layout_variant: LayoutVariant::Normal,
            features: Vec::new(),
            tech_tags: Vec::new(),
            tool_stack: Vec::new(),
            media: Media::default(),
            primary_action: ActionLink::default(),
            secondary_action: ActionLink::default(),
        }
    }

    /// Subtitle text, if enabled and non-empty.
    pub fn visible_subtitle(&self) -> Option<&str> {
        gated_text(self.show_subtitle, self.subtitle.as_deref())
    }

    /// Microcopy text, if enabled and non-empty.
    pub fn visible_microcopy(&self) -> Option<&str> {
        gated_text(self.show_microcopy, self.microcopy.as_deref())
    }

    /// Feature bullets with gaps removed, in input order.
    pub fn visible_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter_map(|f| f.as_deref())
            .filter(|f| non_empty(f))
    }
}

/// Text counts as present only when it has at least one character.
pub fn non_empty(text: &str) -> bool {
    !text.is_empty()
}

fn gated_text(enabled: bool, text: Option<&str>) -> Option<&str> {
    match text {
        Some(t) if enabled && non_empty(t) => Some(t),
        _ => None,
    }
}
