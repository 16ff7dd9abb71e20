//! Page mounting.
//!
//! Rendering produces strings; putting them into a document is the host's
//! job. `InsertionHost` is that seam. `HtmlDocument` implements it over a
//! page shell held as a string, which is what the CLI writes out.
//!
//! A missing insertion point is never an error: that section is skipped and
//! reported in `MountReport::skipped`.

use std::ops::Range;

use serde::Serialize;

use crate::render::RenderedSections;

/// Named locations in the page that receive rendered fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InsertionPoint {
    Featured,
    ArchiveTable,
    ArchiveCards,
}

impl InsertionPoint {
    pub const ALL: [InsertionPoint; 3] = [
        InsertionPoint::Featured,
        InsertionPoint::ArchiveTable,
        InsertionPoint::ArchiveCards,
    ];

    /// Element id in the page shell.
    pub fn id(&self) -> &'static str {
        match self {
            InsertionPoint::Featured => "featured-container",
            InsertionPoint::ArchiveTable => "archive-tbody",
            InsertionPoint::ArchiveCards => "mobile-archive-container",
        }
    }

    /// The rendered section destined for this point.
    pub fn select<'a>(&self, sections: &'a RenderedSections) -> &'a str {
        match self {
            InsertionPoint::Featured => &sections.featured_html,
            InsertionPoint::ArchiveTable => &sections.archive_rows_html,
            InsertionPoint::ArchiveCards => &sections.archive_cards_html,
        }
    }
}

/// Something that can replace the contents of an element by id.
pub trait InsertionHost {
    /// Replace the children of element `id` with `html`.
    /// Returns `false` when no such element exists.
    fn replace_contents(&mut self, id: &str, html: &str) -> bool;
}

/// Which insertion points were filled and which were absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MountReport {
    pub applied: Vec<InsertionPoint>,
    pub skipped: Vec<InsertionPoint>,
}

impl MountReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Write every rendered section into `host`, skipping absent targets.
pub fn mount<H: InsertionHost + ?Sized>(sections: &RenderedSections, host: &mut H) -> MountReport {
    let mut report = MountReport::default();

    for point in InsertionPoint::ALL {
        if host.replace_contents(point.id(), point.select(sections)) {
            report.applied.push(point);
        } else {
            tracing::warn!("Insertion point #{} not found, skipping", point.id());
            report.skipped.push(point);
        }
    }

    report
}

/// HTML page held in memory, addressable by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
}

impl HtmlDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    pub fn has_target(&self, id: &str) -> bool {
        self.inner_range(id).is_some()
    }

    /// Current children of element `id`, if present.
    pub fn contents_of(&self, id: &str) -> Option<&str> {
        self.inner_range(id).map(|r| &self.source[r])
    }

    /// Byte range between the element's opening tag and its matching close.
    fn inner_range(&self, id: &str) -> Option<Range<usize>> {
        let src = self.source.as_str();

        let attr = [format!("id=\"{id}\""), format!("id='{id}'")]
            .iter()
            .find_map(|needle| find_attribute(src, needle))?;

        let tag_start = src[..attr].rfind('<')?;
        let name_end = src[tag_start + 1..]
            .find(|c: char| c.is_whitespace() || c == '>' || c == '/')?;
        let name = &src[tag_start + 1..tag_start + 1 + name_end];
        if name.is_empty() {
            return None;
        }

        let open_close = attr + src[attr..].find('>')?;
        if src[..open_close].ends_with('/') {
            // <div id="x"/> has no children to replace
            return None;
        }
        let inner_start = open_close + 1;

        let open_pat = format!("<{name}");
        let close_pat = format!("</{name}>");
        let mut depth = 1usize;
        let mut cursor = inner_start;

        loop {
            let rest = &src[cursor..];
            let close = rest.find(&close_pat)?;
            match find_open_tag(rest, &open_pat) {
                Some(open) if open < close => {
                    depth += 1;
                    cursor += open + open_pat.len();
                }
                _ => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(inner_start..cursor + close);
                    }
                    cursor += close + close_pat.len();
                }
            }
        }
    }
}

impl InsertionHost for HtmlDocument {
    fn replace_contents(&mut self, id: &str, html: &str) -> bool {
        match self.inner_range(id) {
            Some(range) => {
                self.source.replace_range(range, html);
                true
            }
            None => false,
        }
    }
}

/// Position of `needle` as a standalone attribute (not e.g. `data-id="..."`).
///
/// Matches inside `<!-- -->` comments are skipped. Matches inside another
/// attribute's quoted value (`title='x id="y"'`) are not detected.
fn find_attribute(src: &str, needle: &str) -> Option<usize> {
    src.match_indices(needle)
        .map(|(i, _)| i)
        .find(|&i| src[..i].ends_with(char::is_whitespace) && !inside_comment(src, i))
}

fn inside_comment(src: &str, pos: usize) -> bool {
    let before = &src[..pos];
    match before.rfind("<!--") {
        Some(open) => !before[open..].contains("-->"),
        None => false,
    }
}

/// Position of an opening tag `pat` (`<div`), excluding longer names like `<divider`.
fn find_open_tag(haystack: &str, pat: &str) -> Option<usize> {
    haystack
        .match_indices(pat)
        .map(|(i, _)| i)
        .find(|&i| haystack[i + pat.len()..].starts_with(|c: char| c.is_whitespace() || c == '>'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<html><body>
<section><div id="featured-container" class="grid"><p>placeholder</p></div></section>
<table><tbody id="archive-tbody"></tbody></table>
<div class="mobile" id='mobile-archive-container'><div><div>old</div></div></div>
<footer>end</footer>
</body></html>"#;

    fn sections() -> RenderedSections {
        RenderedSections {
            featured_html: "<article>F</article>".to_string(),
            archive_rows_html: "<tr>R</tr>".to_string(),
            archive_cards_html: "<div>C</div>".to_string(),
        }
    }

    #[test]
    fn test_mount_all_targets() {
        let mut doc = HtmlDocument::new(SHELL);
        let report = mount(&sections(), &mut doc);

        assert!(report.is_complete());
        assert_eq!(report.applied, InsertionPoint::ALL.to_vec());
        assert_eq!(doc.contents_of("featured-container"), Some("<article>F</article>"));
        assert_eq!(doc.contents_of("archive-tbody"), Some("<tr>R</tr>"));
        assert_eq!(doc.contents_of("mobile-archive-container"), Some("<div>C</div>"));
        assert!(!doc.as_str().contains("placeholder"));
        assert!(!doc.as_str().contains("old"));
        assert!(doc.as_str().contains("<footer>end</footer>"));
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let shell = r#"<main><div id="featured-container"></div><table><tbody id="archive-tbody"></tbody></table></main>"#;
        let mut doc = HtmlDocument::new(shell);
        let report = mount(&sections(), &mut doc);

        assert_eq!(
            report.applied,
            vec![InsertionPoint::Featured, InsertionPoint::ArchiveTable]
        );
        assert_eq!(report.skipped, vec![InsertionPoint::ArchiveCards]);
        assert!(!report.is_complete());
        assert!(doc.as_str().contains("<tr>R</tr>"));
    }

    #[test]
    fn test_remount_replaces_previous_render() {
        let mut doc = HtmlDocument::new(SHELL);
        mount(&sections(), &mut doc);
        let once = doc.as_str().to_string();

        mount(&sections(), &mut doc);
        assert_eq!(doc.as_str(), once);
    }

    #[test]
    fn test_nested_same_name_elements() {
        let doc = HtmlDocument::new(
            r#"<div id="outer"><div><div>a</div></div><div>b</div></div><div>after</div>"#,
        );
        assert_eq!(
            doc.contents_of("outer"),
            Some("<div><div>a</div></div><div>b</div>")
        );
    }

    #[test]
    fn test_commented_out_target_is_ignored() {
        let doc = HtmlDocument::new(
            r#"<!-- <tbody id="archive-tbody">stale</tbody> --><table><tbody id="archive-tbody">live</tbody></table>"#,
        );
        assert_eq!(doc.contents_of("archive-tbody"), Some("live"));

        let only_comment = HtmlDocument::new(r#"<!-- <div id="featured-container"></div> -->"#);
        assert!(!only_comment.has_target("featured-container"));
    }

    #[test]
    fn test_prefixed_attribute_does_not_match() {
        let doc = HtmlDocument::new(r#"<div data-id="archive-tbody">x</div>"#);
        assert!(!doc.has_target("archive-tbody"));
    }

    #[test]
    fn test_longer_tag_name_not_counted_as_nested() {
        let doc = HtmlDocument::new(r#"<div id="x"><divider></divider>y</div>"#);
        assert_eq!(doc.contents_of("x"), Some("<divider></divider>y"));
    }

    #[test]
    fn test_self_closing_and_unterminated_targets_are_absent() {
        assert!(!HtmlDocument::new(r#"<div id="x"/>"#).has_target("x"));
        assert!(!HtmlDocument::new(r#"<div id="x"><p>never closed"#).has_target("x"));
    }

    #[test]
    fn test_insertion_point_ids() {
        let ids: Vec<&str> = InsertionPoint::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(
            ids,
            vec!["featured-container", "archive-tbody", "mobile-archive-container"]
        );
    }
}
