// File: crates/decade-chart/src/scene.rs
// Summary: Backend-neutral draw list (groups, paths, lines, circles, text) with hit testing.

use crate::theme::Color;
use crate::tooltip::TooltipContent;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Paint {
    /// Inherit the surface foreground.
    #[default]
    CurrentColor,
    Rgb(Color),
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// `translate(tx, ty) rotate(deg)`, applied in that order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
    pub rotate: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { tx: 0.0, ty: 0.0, rotate: 0.0 };

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty, rotate: 0.0 }
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate = deg;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Parent-space point to local space.
    pub fn inverse_apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let (dx, dy) = (x - self.tx, y - self.ty);
        if self.rotate == 0.0 {
            return (dx, dy);
        }
        let (s, c) = (-self.rotate).to_radians().sin_cos();
        (dx * c - dy * s, dx * s + dy * c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathNode {
    pub cmds: Vec<PathCmd>,
    pub stroke: Paint,
    pub fill: Paint,
}

impl PathNode {
    /// Open polyline through `points`, stroked with `currentColor`, unfilled.
    pub fn polyline(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let cmds = points
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| if i == 0 { PathCmd::MoveTo(x, y) } else { PathCmd::LineTo(x, y) })
            .collect();
        Self { cmds, stroke: Paint::CurrentColor, fill: Paint::None }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Paint,
}

impl LineNode {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2, stroke: Paint::CurrentColor }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Paint,
    /// Index of the record the marker stands for.
    pub record: usize,
    pub tooltip: Option<TooltipContent>,
}

impl CircleNode {
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        dx * dx + dy * dy <= self.r * self.r
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Baseline shift in em.
    pub dy_em: f64,
    pub font_size: Option<f64>,
    pub anchor: Option<TextAnchor>,
    pub fill: Paint,
    pub opacity: Option<f64>,
    pub transform: Transform,
    pub class: Option<&'static str>,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0.0,
            y: 0.0,
            dy_em: 0.0,
            font_size: None,
            anchor: None,
            fill: Paint::CurrentColor,
            opacity: None,
            transform: Transform::IDENTITY,
            class: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub class: Option<&'static str>,
    pub transform: Transform,
    pub font_family: Option<&'static str>,
    pub font_size: Option<f64>,
    pub text_anchor: Option<TextAnchor>,
    /// Inherited stroke for children that use `currentColor`.
    pub color: Option<Color>,
    pub dash: Option<[f64; 2]>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Path(PathNode),
    Line(LineNode),
    Circle(CircleNode),
    Text(TextNode),
}

impl Node {
    /// This node plus all descendants.
    pub fn element_count(&self) -> usize {
        match self {
            Node::Group(g) => 1 + g.children.iter().map(Node::element_count).sum::<usize>(),
            _ => 1,
        }
    }
}

macro_rules! node_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for Node {
            fn from(v: $ty) -> Self { Node::$variant(v) }
        })*
    };
}

node_from!(Group => Group, PathNode => Path, LineNode => Line, CircleNode => Circle, TextNode => Text);

/// Ordered drawing commands for one chart surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, nodes: Vec::new() }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.nodes.iter().map(Node::element_count).sum()
    }

    /// All markers in draw order.
    pub fn markers(&self) -> Vec<&CircleNode> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a CircleNode>) {
            for n in nodes {
                match n {
                    Node::Circle(c) => out.push(c),
                    Node::Group(g) => walk(&g.children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    /// Topmost (last drawn) marker under a surface-space point.
    pub fn hit_test(&self, pos: (f64, f64)) -> Option<&CircleNode> {
        fn walk<'a>(nodes: &'a [Node], pos: (f64, f64)) -> Option<&'a CircleNode> {
            nodes.iter().rev().find_map(|n| match n {
                Node::Circle(c) if c.contains(pos) => Some(c),
                Node::Group(g) => walk(&g.children, g.transform.inverse_apply(pos)),
                _ => None,
            })
        }
        walk(&self.nodes, pos)
    }
}
