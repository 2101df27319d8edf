// File: crates/decade-page/src/main.rs
// Summary: Builds the Movies By Decade page: loads the two documents, renders the chart, writes HTML + PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use decade_chart::{build_scene_with, ChartDimensions, RenderOptions, Theme};
use decade_page::{compose_html, embedded_data, load_dir, PageContent};
use decade_render_skia::{RasterOptions, SkiaRenderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    // movies-by-decade [OUT_DIR] [STATIC_DIR]
    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let static_dir = args.next().map(PathBuf::from);

    let data = match &static_dir {
        Some(dir) => load_dir(dir).with_context(|| format!("loading documents from {}", dir.display()))?,
        None => embedded_data().context("embedded documents are malformed")?,
    };
    tracing::info!(decades = data.data.len(), "dataset loaded");

    let dims = ChartDimensions::page_default();
    let theme = Theme::dark();
    let renderer = SkiaRenderer::new();
    let metrics = renderer.shaper().advance_table();
    let scene = build_scene_with(&data, &dims, &RenderOptions::default(), &metrics);
    tracing::info!(elements = scene.element_count(), "chart scene built");

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let html_path = out_dir.join("index.html");
    let html = compose_html(&scene, &theme, &PageContent::default());
    std::fs::write(&html_path, html).with_context(|| format!("writing {}", html_path.display()))?;
    tracing::info!(path = %html_path.display(), "wrote page");

    let png_path = out_dir.join("index.png");
    renderer.render_to_png(&scene, &RasterOptions { theme, draw_text: true }, &png_path)?;
    tracing::info!(path = %png_path.display(), "wrote preview");

    Ok(())
}
