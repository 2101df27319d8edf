// File: crates/decade-chart/src/chart.rs
// Summary: Draw pass mapping ChartData + ChartDimensions into a Scene (axes, line, markers, labels, clouds).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::axis::{Axis, TickDensity, TICK_SIZE};
use crate::cloud::{self, ApproxMetrics, CloudLayout, PlacedWord, TextMetrics, CLOUD_SIZE, JITTER};
use crate::data::{ChartData, ChartDimensions, DecadeRecord};
use crate::scale::{ChartScales, RATING_DOMAIN};
use crate::scene::{CircleNode, Group, LineNode, Paint, PathNode, Scene, TextAnchor, TextNode, Transform};
use crate::theme::{revenue_color, Color};
use crate::tooltip::TooltipContent;

/// Marker radius at the largest budget.
pub const MAX_RADIUS: f64 = 90.0;
/// Vertical time-axis ticks drawn as gridlines.
pub const GRID_TICKS: usize = 10;
/// Rating axis tick count.
pub const RATING_TICKS: usize = 10;
pub const Y_LABEL: &str = "IMDB Rating";

const GRID_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Base seed for cloud placement and jitter; decade `i` uses `cloud_seed ^ i`.
    pub cloud_seed: u64,
    pub cloud_size: (f64, f64),
    pub show_clouds: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cloud_seed: 0,
            cloud_size: CLOUD_SIZE,
            show_clouds: true,
        }
    }
}

/// Build the whole chart with approximate text metrics.
pub fn build_scene(data: &ChartData, dims: &ChartDimensions, opts: &RenderOptions) -> Scene {
    build_scene_with(data, dims, opts, &ApproxMetrics)
}

#[tracing::instrument(skip_all, fields(decades = data.data.len(), width = dims.width, height = dims.height))]
pub fn build_scene_with<M: TextMetrics>(
    data: &ChartData,
    dims: &ChartDimensions,
    opts: &RenderOptions,
    metrics: &M,
) -> Scene {
    let scales = ChartScales::build(&data.meta, dims);
    draw(&scales, data, dims, opts, metrics)
}

/// Draw with already built scales.
pub fn draw<M: TextMetrics>(
    scales: &ChartScales,
    data: &ChartData,
    dims: &ChartDimensions,
    opts: &RenderOptions,
    metrics: &M,
) -> Scene {
    let mut root = Group::new()
        .class("chart")
        .transform(Transform::translate(dims.margin.left as f64, dims.margin.top as f64));

    root.push(y_label(dims));
    root.push(gridlines(scales, dims));
    root.push(rating_axis(scales, dims));
    if let Some(line) = rating_line(scales, &data.data) {
        root.push(line);
    }
    for (i, record) in data.data.iter().enumerate() {
        root.push(marker(scales, i, record));
    }
    for record in &data.data {
        root.push(decade_label(scales, record));
    }
    if opts.show_clouds {
        for cloud in word_clouds(scales, &data.data, opts, metrics) {
            root.push(cloud);
        }
    }

    let mut scene = Scene::new(dims.width, dims.height);
    scene.push(root);
    scene
}

// ---- helpers ----------------------------------------------------------------

fn y_label(dims: &ChartDimensions) -> TextNode {
    let mut label = TextNode::new(Y_LABEL)
        .at(0.0, 6.0)
        .anchor(TextAnchor::End)
        .font_size(20.0)
        .transform(Transform::translate(0.0, dims.height as f64 / 2.0 - 100.0).rotated(-90.0));
    label.dy_em = 0.75;
    label.class = Some("y-label");
    label
}

fn gridlines(scales: &ChartScales, dims: &ChartDimensions) -> Group {
    let mut grid = Group::new().class("grid").transform(Transform::translate(0.0, 100.0));
    grid.color = Some(GRID_COLOR);
    grid.dash = Some([10.0, 10.0]);
    let len = dims.inner_height() - 200.0;
    for year in scales.time.year_ticks(GRID_TICKS) {
        let x = scales.time.map_year(year);
        grid.push(LineNode::new(x, 0.0, x, len));
    }
    grid
}

fn rating_axis(scales: &ChartScales, dims: &ChartDimensions) -> Group {
    let axis = Axis::vertical(RATING_DOMAIN, scales.rating.range).with_density(TickDensity::Count(RATING_TICKS));
    // baseline sits on the start of the time range
    let mut g = Group::new()
        .class("rating-axis")
        .transform(Transform::translate(dims.margin.left as f64 - axis.gutter - TICK_SIZE, 0.0));
    g.push(axis.draw());
    g
}

fn rating_line(scales: &ChartScales, records: &[DecadeRecord]) -> Option<PathNode> {
    if records.is_empty() {
        return None;
    }
    Some(PathNode::polyline(
        records.iter().map(|r| scales.point(r.start_year, r.average_rating)),
    ))
}

/// Radius for a budget: `relativeBudget * 90`, never negative.
pub fn marker_radius(scales: &ChartScales, budget: f64) -> f64 {
    (scales.relative_budget(budget) * MAX_RADIUS).max(0.0)
}

fn marker(scales: &ChartScales, index: usize, record: &DecadeRecord) -> CircleNode {
    let (cx, cy) = scales.point(record.start_year, record.average_rating);
    CircleNode {
        cx,
        cy,
        r: marker_radius(scales, record.budget),
        fill: Paint::Rgb(revenue_color(scales.relative_revenue(record.revenue))),
        record: index,
        tooltip: Some(TooltipContent::for_record(record)),
    }
}

fn decade_label(scales: &ChartScales, record: &DecadeRecord) -> TextNode {
    let (x, y) = scales.point(record.start_year, record.average_rating);
    let mut label = TextNode::new(record.window_label())
        .at(x, y)
        .anchor(TextAnchor::Middle)
        .transform(Transform::translate(0.0, -100.0));
    label.class = Some("decade-label");
    label
}

/// Lay out every decade independently, then build groups in dataset order.
fn word_clouds<M: TextMetrics>(
    scales: &ChartScales,
    records: &[DecadeRecord],
    opts: &RenderOptions,
    metrics: &M,
) -> Vec<Group> {
    let started = std::time::Instant::now();
    let slots: Vec<(Vec<PlacedWord>, Vec<f64>)> = records
        .par_iter()
        .enumerate()
        .map(|(i, record)| {
            let mut rng = StdRng::seed_from_u64(opts.cloud_seed ^ i as u64);
            let words = cloud::words_from_genres(&record.genres);
            let placed = CloudLayout::new(opts.cloud_size, metrics).layout(&words, &mut rng);
            let jitter = placed.iter().map(|_| rng.gen::<f64>() * JITTER).collect();
            (placed, jitter)
        })
        .collect();
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "word clouds laid out");

    records
        .iter()
        .zip(slots)
        .map(|(record, (placed, jitter))| cloud_group(scales, record, &placed, &jitter))
        .collect()
}

fn cloud_group(
    scales: &ChartScales,
    record: &DecadeRecord,
    placed: &[PlacedWord],
    jitter: &[f64],
) -> Group {
    let (x, y) = scales.point(record.start_year, record.average_rating);
    let mut g = Group::new().class("cloud").transform(Transform::translate(x, y + 300.0));
    g.font_family = Some("sans-serif");
    g.text_anchor = Some(TextAnchor::Middle);

    for ((word, style), dy) in placed.iter().zip(cloud::styles(placed)).zip(jitter) {
        let mut text = TextNode::new(word.text.clone())
            .font_size(style.font_size)
            .transform(Transform::translate(word.x, *dy).rotated(word.rotate));
        text.opacity = Some(style.opacity);
        g.push(text);
    }
    g
}
