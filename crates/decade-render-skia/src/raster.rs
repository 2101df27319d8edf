// File: crates/decade-render-skia/src/raster.rs
// Summary: Headless PNG/RGBA rendering of a decade-chart Scene using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use decade_chart::scene::{CircleNode, Group, LineNode, Node, Paint, PathCmd, PathNode, TextAnchor, TextNode, Transform};
use decade_chart::theme::Color;
use decade_chart::{Scene, Theme};

use crate::text::TextShaper;

/// SVG's initial font size.
const DEFAULT_FONT_SIZE: f64 = 16.0;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub theme: Theme,
    /// Disable to keep output independent of installed fonts.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::dark(), draw_text: true }
    }
}

/// Inherited presentation state while walking groups.
#[derive(Clone, Copy)]
struct Ctx {
    color: Color,
    font_size: f64,
    anchor: TextAnchor,
    family: Option<&'static str>,
    dash: Option<[f64; 2]>,
}

fn to_skia(c: Color, alpha: f64) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    pub fn shaper(&self) -> &TextShaper {
        &self.shaper
    }

    fn draw_scene(&self, scene: &Scene, opts: &RasterOptions) -> Result<skia::Surface> {
        let (w, h) = (scene.width as i32, scene.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {w}x{h}"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.theme.background, 1.0));

        let ctx = Ctx {
            color: opts.theme.foreground,
            font_size: DEFAULT_FONT_SIZE,
            anchor: TextAnchor::Start,
            family: None,
            dash: None,
        };
        for node in &scene.nodes {
            self.draw_node(canvas, node, ctx, opts);
        }
        Ok(surface)
    }

    /// Render to encoded PNG bytes.
    pub fn render_png_bytes(&self, scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw_scene(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        let bytes = data.as_bytes().to_vec();
        tracing::debug!(bytes = bytes.len(), "scene rasterized");
        Ok(bytes)
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RasterOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(scene, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, row_stride)`.
    pub fn render_rgba8(&self, scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw_scene(scene, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((px, w as u32, h as u32, stride))
    }

    // ---- helpers ----------------------------------------------------------------

    fn with_transform(&self, canvas: &skia::Canvas, t: &Transform, f: impl FnOnce(&skia::Canvas)) {
        if t.is_identity() {
            f(canvas);
            return;
        }
        canvas.save();
        canvas.translate((t.tx as f32, t.ty as f32));
        if t.rotate != 0.0 {
            canvas.rotate(t.rotate as f32, None);
        }
        f(canvas);
        canvas.restore();
    }

    fn draw_node(&self, canvas: &skia::Canvas, node: &Node, ctx: Ctx, opts: &RasterOptions) {
        match node {
            Node::Group(g) => self.draw_group(canvas, g, ctx, opts),
            Node::Path(p) => draw_path(canvas, p, ctx),
            Node::Line(l) => draw_line(canvas, l, ctx),
            Node::Circle(c) => draw_circle(canvas, c, ctx),
            Node::Text(t) if opts.draw_text => self.draw_text(canvas, t, ctx),
            Node::Text(_) => {}
        }
    }

    fn draw_group(&self, canvas: &skia::Canvas, g: &Group, parent: Ctx, opts: &RasterOptions) {
        let ctx = Ctx {
            color: g.color.unwrap_or(parent.color),
            font_size: g.font_size.unwrap_or(parent.font_size),
            anchor: g.text_anchor.unwrap_or(parent.anchor),
            family: g.font_family.or(parent.family),
            dash: g.dash.or(parent.dash),
        };
        self.with_transform(canvas, &g.transform, |canvas| {
            for child in &g.children {
                self.draw_node(canvas, child, ctx, opts);
            }
        });
    }

    fn draw_text(&self, canvas: &skia::Canvas, t: &TextNode, ctx: Ctx) {
        let Some(color) = resolve(t.fill, ctx) else { return };
        let size = t.font_size.unwrap_or(ctx.font_size);
        if size <= 0.0 {
            return;
        }
        let shift = match t.anchor.unwrap_or(ctx.anchor) {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => 0.5,
            TextAnchor::End => 1.0,
        };
        let y = t.y + t.dy_em * size;
        self.with_transform(canvas, &t.transform, |canvas| {
            self.shaper.draw_aligned(
                canvas,
                &t.text,
                t.x as f32,
                y as f32,
                size as f32,
                to_skia(color, t.opacity.unwrap_or(1.0)),
                ctx.family,
                shift,
            );
        });
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(p: Paint, ctx: Ctx) -> Option<Color> {
    match p {
        Paint::CurrentColor => Some(ctx.color),
        Paint::Rgb(c) => Some(c),
        Paint::None => None,
    }
}

fn stroke_paint(color: Color, ctx: Ctx) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(to_skia(color, 1.0));
    if let Some([on, off]) = ctx.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    paint
}

fn draw_path(canvas: &skia::Canvas, p: &PathNode, ctx: Ctx) {
    if p.cmds.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    for cmd in &p.cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) => { path.move_to((x as f32, y as f32)); }
            PathCmd::LineTo(x, y) => { path.line_to((x as f32, y as f32)); }
        }
    }
    if let Some(fill) = resolve(p.fill, ctx) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(fill, 1.0));
        canvas.draw_path(&path, &paint);
    }
    if let Some(stroke) = resolve(p.stroke, ctx) {
        canvas.draw_path(&path, &stroke_paint(stroke, ctx));
    }
}

fn draw_line(canvas: &skia::Canvas, l: &LineNode, ctx: Ctx) {
    let Some(color) = resolve(l.stroke, ctx) else { return };
    canvas.draw_line(
        (l.x1 as f32, l.y1 as f32),
        (l.x2 as f32, l.y2 as f32),
        &stroke_paint(color, ctx),
    );
}

fn draw_circle(canvas: &skia::Canvas, c: &CircleNode, ctx: Ctx) {
    if c.r.is_nan() || c.r <= 0.0 {
        return;
    }
    let Some(fill) = resolve(c.fill, ctx) else { return };
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(to_skia(fill, 1.0));
    canvas.draw_circle((c.cx as f32, c.cy as f32), c.r as f32, &body);
}
