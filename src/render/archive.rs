//! Archive templates: desktop table row and mobile card.
//!
//! Both show the same slice of a project. Tags come from the first
//! `ARCHIVE_TAG_LIMIT` tool-stack labels; later entries are dropped silently.

use crate::projects::{ProjectRecord, ToolStackEntry};

/// Maximum number of tool-stack labels shown in archive views.
pub const ARCHIVE_TAG_LIMIT: usize = 3;

/// Labels shown as archive tags, in input order.
pub fn archive_tags(tool_stack: &[ToolStackEntry]) -> impl Iterator<Item = &str> {
    tool_stack
        .iter()
        .take(ARCHIVE_TAG_LIMIT)
        .map(|t| t.label.as_str())
}

fn tag_spans(project: &ProjectRecord, separator: &str) -> String {
    archive_tags(&project.tool_stack)
        .map(|label| format!(r#"<span class="tag">{}</span>"#, label))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render one archive project as a `<tr>` for the desktop table.
pub fn archive_row(project: &ProjectRecord) -> String {
    let tags = tag_spans(project, "\n                                    ");

    format!(
        r#"
                        <tr>
                            <td class="project-name">{title}</td>
                            <td class="project-domain">
                                <strong>{domain}</strong><br>
                                {description}
                            </td>
                            <td>
                                <div class="tech-stack-mini">
                                    {tags}
                                </div>
                            </td>
                            <td>
                                <div class="archive-actions">
                                    <a href="{primary_url}" title="{primary_label}"><i class="ph ph-play-circle"></i></a>
                                    <a href="{secondary_url}" target="_blank" title="View Code"><i class="ph ph-github-logo"></i></a>
                                </div>
                            </td>
                        </tr>"#,
        title = project.title,
        domain = project.domain,
        description = project.short_description,
        tags = tags,
        primary_url = project.primary_action.url,
        primary_label = project.primary_action.label,
        secondary_url = project.secondary_action.url,
    )
}

/// Render one archive project as a self-contained mobile card.
///
/// Without a table row to hold icon links, both actions are labelled buttons.
pub fn archive_card(project: &ProjectRecord) -> String {
    let tags = tag_spans(project, "");

    format!(
        r#"
                <div class="archive-card">
                    <h4>{title}</h4>
                    <p class="role-highlight">{domain}</p>
                    <p>{description}</p>
                    <div class="tech-stack-mini">
                        {tags}
                    </div>
                    <div class="project-actions archive-card-actions">
                        <a href="{primary_url}" target="_blank" class="btn btn-primary" style="padding: 8px 16px; font-size: 0.85rem;">{primary_label}</a>
                        <a href="{secondary_url}" target="_blank" class="btn btn-text" style="font-size: 0.85rem;">{secondary_label}</a>
                    </div>
                </div>"#,
        title = project.title,
        domain = project.domain,
        description = project.short_description,
        tags = tags,
        primary_url = project.primary_action.url,
        primary_label = project.primary_action.label,
        secondary_url = project.secondary_action.url,
        secondary_label = project.secondary_action.label,
    )
}
