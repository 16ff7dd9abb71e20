//! Media fragment: embedded video player or lazily loaded image.

use crate::projects::{non_empty, Media, MediaKind};

/// Base URL for embeddable players; the media source is the video id.
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Fixed player height; width follows the container.
pub const EMBED_HEIGHT_PX: u32 = 315;

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Build the `project-visual` block for a featured article.
///
/// Embeds need a source id; an embed without one renders through the
/// image branch, as does any unknown kind.
pub fn media_fragment(media: &Media) -> String {
    match media.kind {
        MediaKind::Embed if non_empty(&media.source) => embed_fragment(media),
        MediaKind::Embed | MediaKind::Image | MediaKind::Unknown => image_fragment(media),
    }
}

fn embed_fragment(media: &Media) -> String {
    format!(
        r#"
            <div class="project-visual">
                <iframe
                    width="100%" height="{height}"
                    src="{base}{src}"
                    title="{alt}"
                    frameborder="0"
                    allow="{allow}"
                    allowfullscreen
                    style="border-radius: 8px;"
                ></iframe>
            </div>"#,
        height = EMBED_HEIGHT_PX,
        base = EMBED_BASE_URL,
        src = media.source,
        alt = media.alt_text,
        allow = EMBED_ALLOW,
    )
}

fn image_fragment(media: &Media) -> String {
    format!(
        r#"
        <div class="project-visual">
            <img src="{}" alt="{}" class="project-img" loading="lazy">
        </div>"#,
        media.source, media.alt_text
    )
}
