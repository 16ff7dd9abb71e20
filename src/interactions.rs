//! Page interactions as plain state transitions.
//!
//! The browser glue (click, scroll and intersection listeners) only has to
//! apply what these types compute:
//! - `MenuState`: mobile menu open/closed and its icon glyph
//! - `NavbarStyle`: navbar background/shadow and scroll-indicator visibility
//! - `LazyImageTracker`: which deferred images have entered the viewport

use rustc_hash::FxHashSet;

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Mobile menu panel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Link inside the panel clicked.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Visibility class for the panel.
    pub fn panel_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }

    /// Glyph class for the menu button icon.
    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "ph-x"
        } else {
            "ph-list"
        }
    }
}

/// Navbar presentation for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
    pub scroll_indicator_hidden: bool,
}

impl NavbarStyle {
    pub const RESTING: NavbarStyle = NavbarStyle {
        background: "rgba(10, 10, 12, 0.85)",
        box_shadow: "none",
        scroll_indicator_hidden: false,
    };

    pub const SCROLLED: NavbarStyle = NavbarStyle {
        background: "rgba(10, 10, 12, 0.95)",
        box_shadow: "0 2px 20px rgba(0,0,0,0.5)",
        scroll_indicator_hidden: true,
    };

    pub fn for_scroll_offset(scroll_y: f64) -> Self {
        if scroll_y > SCROLL_THRESHOLD_PX {
            Self::SCROLLED
        } else {
            Self::RESTING
        }
    }
}

/// Deferred images awaiting their first viewport intersection.
#[derive(Debug, Clone, Default)]
pub struct LazyImageTracker {
    observed: FxHashSet<String>,
}

impl LazyImageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe every `<img ... loading="lazy">` in `html`, keyed by `src`.
    pub fn from_markup(html: &str) -> Self {
        let mut tracker = Self::new();
        for src in lazy_image_sources(html) {
            tracker.observe(src);
        }
        tracker
    }

    pub fn observe(&mut self, src: impl Into<String>) {
        self.observed.insert(src.into());
    }

    pub fn is_observed(&self, src: &str) -> bool {
        self.observed.contains(src)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Apply a batch of `(src, is_intersecting)` entries.
    ///
    /// Returns the sources that became loaded, in entry order. Each is
    /// unobserved, so it is reported at most once.
    pub fn on_intersections<'a, I>(&mut self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .filter_map(|(src, _)| self.observed.take(src))
            .collect()
    }
}

/// `src` values of lazily loaded images in document order.
pub fn lazy_image_sources(html: &str) -> Vec<&str> {
    let mut sources = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find("<img") {
        let tag = &rest[start..];
        let Some(end) = tag.find('>') else { break };
        let tag = &tag[..end];
        if tag.contains(r#"loading="lazy""#) {
            if let Some(src) = attribute_value(tag, "src") {
                sources.push(src);
            }
        }
        rest = &rest[start + end..];
    }

    sources
}

fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}
