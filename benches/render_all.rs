use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_renderer::projects::{ActionLink, Media, MediaKind, ToolStackEntry};
use portfolio_renderer::{Category, ProjectRecord, ProjectRenderer};

fn dataset(size: usize) -> Vec<ProjectRecord> {
    (0..size)
        .map(|i| {
            let category = if i % 3 == 0 { Category::Featured } else { Category::Archive };
            let mut p = ProjectRecord::new(category, (size - i) as i64, format!("Project {i}"));
            p.domain = "Tooling".to_string();
            p.short_description = "Short summary".to_string();
            p.long_description = "A longer description of the project.".to_string();
            p.features = vec![Some("Fast".to_string()), None, Some("Small".to_string())];
            p.tech_tags = vec!["Rust".to_string(), "WASM".to_string()];
            p.tool_stack = (0..5)
                .map(|t| ToolStackEntry {
                    icon: format!("ph ph-{t}"),
                    label: format!("tool-{t}"),
                })
                .collect();
            p.media = Media {
                kind: if i % 2 == 0 { MediaKind::Embed } else { MediaKind::Image },
                source: format!("media-{i}"),
                alt_text: "media".to_string(),
            };
            p.primary_action = ActionLink {
                url: format!("https://demo.example/{i}"),
                label: "Demo".to_string(),
            };
            p.secondary_action = ActionLink {
                url: format!("https://code.example/{i}"),
                label: "Code".to_string(),
            };
            p
        })
        .collect()
}

fn bench_render_all(c: &mut Criterion) {
    let renderer = ProjectRenderer::new();
    let projects = dataset(30);

    c.bench_function("render_all_30_projects", |b| {
        b.iter(|| renderer.render_all(black_box(&projects)))
    });
}

criterion_group!(benches, bench_render_all);
criterion_main!(benches);
