// File: crates/decade-chart/src/svg.rs
// Summary: SVG markup backend for a Scene. Markers carry their tooltip lines as data attributes.

use crate::scene::{CircleNode, Group, LineNode, Node, Paint, PathCmd, PathNode, Scene, TextAnchor, TextNode, Transform};
use crate::theme::Theme;

/// Compact number: integers without a fraction, otherwise at most 3 decimals.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        let s = format!("{r:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// XML text/attribute escaping.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            c => out.push(c),
        }
    }
    out
}

fn paint(p: Paint) -> String {
    match p {
        Paint::CurrentColor => "currentColor".to_string(),
        Paint::Rgb(c) => c.to_hex(),
        Paint::None => "none".to_string(),
    }
}

fn anchor(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn transform_attr(t: &Transform) -> String {
    if t.is_identity() {
        return String::new();
    }
    let mut s = format!(r#" transform="translate({}, {})"#, num(t.tx), num(t.ty));
    if t.rotate != 0.0 {
        s.pop();
        s.push_str(&format!(r#" rotate({})""#, num(t.rotate)));
    }
    s
}

struct SvgWriter {
    out: String,
    depth: usize,
}

impl SvgWriter {
    fn line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn node(&mut self, n: &Node) {
        match n {
            Node::Group(g) => self.group(g),
            Node::Path(p) => self.path(p),
            Node::Line(l) => self.line_node(l),
            Node::Circle(c) => self.circle(c),
            Node::Text(t) => self.text(t),
        }
    }

    fn group(&mut self, g: &Group) {
        let mut attrs = String::new();
        if let Some(class) = g.class {
            attrs.push_str(&format!(r#" class="{class}""#));
        }
        attrs.push_str(&transform_attr(&g.transform));
        if let Some(family) = g.font_family {
            attrs.push_str(&format!(r#" font-family="{family}""#));
        }
        if let Some(size) = g.font_size {
            attrs.push_str(&format!(r#" font-size="{}""#, num(size)));
        }
        if let Some(a) = g.text_anchor {
            attrs.push_str(&format!(r#" text-anchor="{}""#, anchor(a)));
        }
        let mut style = Vec::new();
        if let Some(c) = g.color {
            style.push(format!("color: {}", c.to_hex()));
        }
        if let Some([on, off]) = g.dash {
            style.push(format!("stroke-dasharray: {} {}", num(on), num(off)));
        }
        if !style.is_empty() {
            attrs.push_str(&format!(r#" style="{};""#, style.join("; ")));
        }
        if g.children.is_empty() {
            self.line(&format!("<g{attrs}/>"));
            return;
        }
        self.line(&format!("<g{attrs}>"));
        self.depth += 1;
        for child in &g.children {
            self.node(child);
        }
        self.depth -= 1;
        self.line("</g>");
    }

    fn path(&mut self, p: &PathNode) {
        let d = p
            .cmds
            .iter()
            .map(|c| match *c {
                PathCmd::MoveTo(x, y) => format!("M {} {}", num(x), num(y)),
                PathCmd::LineTo(x, y) => format!("L {} {}", num(x), num(y)),
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.line(&format!(
            r#"<path d="{d}" fill="{}" stroke="{}"/>"#,
            paint(p.fill),
            paint(p.stroke)
        ));
    }

    fn line_node(&mut self, l: &LineNode) {
        self.line(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            num(l.x1),
            num(l.y1),
            num(l.x2),
            num(l.y2),
            paint(l.stroke)
        ));
    }

    fn circle(&mut self, c: &CircleNode) {
        let head = format!(
            r#"<circle class="marker" data-record="{}" cx="{}" cy="{}" r="{}" fill="{}""#,
            c.record,
            num(c.cx),
            num(c.cy),
            num(c.r),
            paint(c.fill)
        );
        match &c.tooltip {
            Some(tip) => {
                let joined = tip.lines.join("\n");
                self.line(&format!(r#"{head} data-tooltip="{}">"#, escape(&joined)));
                self.depth += 1;
                self.line(&format!("<title>{}</title>", escape(&tip.lines.join(", "))));
                self.depth -= 1;
                self.line("</circle>");
            }
            None => self.line(&format!("{head}/>")),
        }
    }

    fn text(&mut self, t: &TextNode) {
        let mut attrs = String::new();
        if let Some(class) = t.class {
            attrs.push_str(&format!(r#" class="{class}""#));
        }
        if t.x != 0.0 {
            attrs.push_str(&format!(r#" x="{}""#, num(t.x)));
        }
        if t.y != 0.0 {
            attrs.push_str(&format!(r#" y="{}""#, num(t.y)));
        }
        if t.dy_em != 0.0 {
            attrs.push_str(&format!(r#" dy="{}em""#, num(t.dy_em)));
        }
        if let Some(size) = t.font_size {
            attrs.push_str(&format!(r#" font-size="{}""#, num(size)));
        }
        if let Some(a) = t.anchor {
            attrs.push_str(&format!(r#" text-anchor="{}""#, anchor(a)));
        }
        attrs.push_str(&format!(r#" fill="{}""#, paint(t.fill)));
        if let Some(o) = t.opacity {
            attrs.push_str(&format!(r#" opacity="{}""#, num(o)));
        }
        attrs.push_str(&transform_attr(&t.transform));
        self.line(&format!("<text{attrs}>{}</text>", escape(&t.text)));
    }
}

/// Standalone `<svg>` document. `currentColor` resolves through the root `color` style.
pub fn to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut w = SvgWriter { out: String::new(), depth: 0 };
    w.line(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" style="color: {};">"#,
        scene.width,
        scene.height,
        scene.width,
        scene.height,
        theme.foreground.to_hex()
    ));
    w.depth += 1;
    for n in &scene.nodes {
        w.node(n);
    }
    w.depth -= 1;
    w.line("</svg>");
    w.out
}
