//! Featured article template.
//!
//! One `<article class="project-item">` per featured project: badge, title
//! (with optional subtitle), long description, feature bullets, tech tags,
//! tool stack, the two action links, optional microcopy, then the media block.

use crate::projects::ProjectRecord;
use super::media::media_fragment;

/// Separator between repeated items inside the article body.
const ITEM_SEPARATOR: &str = "\n                        ";

/// Render one featured project as an article fragment.
pub fn featured_article(project: &ProjectRecord) -> String {
    let subtitle_html = project
        .visible_subtitle()
        .map(|s| {
            format!(
                r#" <span style="font-size: 0.6em; font-weight: 400; color: var(--text-secondary);">{}</span>"#,
                s
            )
        })
        .unwrap_or_default();

    let features_html = project
        .visible_features()
        .map(|f| format!("<li>{}</li>", f))
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);

    let tech_tags_html = project
        .tech_tags
        .iter()
        .map(|t| format!("<span>{}</span>", t))
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);

    let tool_stack_html = project
        .tool_stack
        .iter()
        .map(|t| {
            format!(
                r#"<span class="tool-item" title="{label}"><i class="{icon}"></i> {label}</span>"#,
                label = t.label,
                icon = t.icon
            )
        })
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);

    let microcopy_html = project
        .visible_microcopy()
        .map(|m| format!("\n                    <p class=\"micro-copy\">{}</p>", m))
        .unwrap_or_default();

    format!(
        r#"
            <article class="project-item{layout}">
                <div class="project-content">
                    <div class="project-meta">
                        <span class="role-badge">{badge}</span>
                        <h2 class="project-title">{title}{subtitle}</h2>
                    </div>
                    <p class="project-description">{description}</p>
                    <ul class="project-features">
                        {features}
                    </ul>
                    <div class="tech-tags">
                        {tech_tags}
                    </div>
                    <div class="tool-stack">
                        {tool_stack}
                    </div>
                    <div class="project-actions">
                        <a href="{primary_url}" target="_blank" class="btn btn-primary">{primary_label}</a>
                        <a href="{secondary_url}" target="_blank" class="btn btn-text">{secondary_label}</a>
                    </div>{microcopy}
                </div>
                {media}
            </article>"#,
        layout = project.layout_variant.class_modifier(),
        badge = project.badge,
        title = project.title,
        subtitle = subtitle_html,
        description = project.long_description,
        features = features_html,
        tech_tags = tech_tags_html,
        tool_stack = tool_stack_html,
        primary_url = project.primary_action.url,
        primary_label = project.primary_action.label,
        secondary_url = project.secondary_action.url,
        secondary_label = project.secondary_action.label,
        microcopy = microcopy_html,
        media = media_fragment(&project.media),
    )
}
