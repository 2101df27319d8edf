// File: crates/decade-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use decade_chart::{build_scene, ChartData, ChartDimensions, Margin, RenderOptions};
use decade_render_skia::{RasterOptions, SkiaRenderer};

const DATA: &str = r#"[
  {"startYear": 1980, "averageRating": 6.2, "budget": 10, "revenue": 10},
  {"startYear": 1990, "averageRating": 6.1, "budget": 40, "revenue": 25},
  {"startYear": 2000, "averageRating": 6.6, "budget": 70, "revenue": 50}
]"#;
const META: &str = r#"{"minBudget": 10, "maxBudget": 70, "minRevenue": 10, "maxRevenue": 50, "minYear": 1980, "maxYear": 2000}"#;

fn render_bytes() -> Vec<u8> {
    let data = ChartData::from_documents(DATA, META).expect("documents");
    let dims = ChartDimensions::new(480, 320, Margin::uniform(30));
    // no genres, and text off to avoid font variance across platforms
    let scene = build_scene(&data, &dims, &RenderOptions::default());
    let opts = RasterOptions { draw_text: false, ..RasterOptions::default() };
    SkiaRenderer::new().render_png_bytes(&scene, &opts).expect("render png")
}

#[test]
fn golden_three_markers() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("three_markers.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
