// File: crates/decade-chart/src/axis.rs
// Summary: Axis model (orientation, domain, pixel range, title) and its bracket/tick drawing.

use crate::scene::{Group, LineNode, Node, PathCmd, PathNode, TextAnchor, TextNode, Transform};
use crate::ticks::{compute_ticks, format_tick, ticks_with_count, Tick};

/// Horizontal space left of the baseline that holds tick labels.
pub const DEFAULT_GUTTER: f64 = 50.0;
/// Length of a tick mark / bracket end.
pub const TICK_SIZE: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickDensity {
    /// One tick per this many pixels of range, at least one tick.
    PixelsPerTick,
    Count(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub title: Option<String>,
    pub density: TickDensity,
    pub gutter: f64,
}

impl Axis {
    pub fn horizontal(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            domain,
            range,
            title: None,
            density: TickDensity::PixelsPerTick,
            gutter: DEFAULT_GUTTER,
        }
    }

    pub fn vertical(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { orientation: Orientation::Vertical, ..Self::horizontal(domain, range) }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_density(mut self, density: TickDensity) -> Self {
        self.density = density;
        self
    }

    pub fn ticks(&self) -> Vec<Tick> {
        match self.density {
            TickDensity::PixelsPerTick => compute_ticks(self.domain, self.range),
            TickDensity::Count(n) => ticks_with_count(self.domain, self.range, n),
        }
    }

    fn baseline(&self) -> PathNode {
        let (r0, r1) = self.range;
        let g = self.gutter;
        let cmds = match self.orientation {
            // M r0 6 v -6 H r1 h -6
            Orientation::Horizontal => vec![
                PathCmd::MoveTo(r0, TICK_SIZE),
                PathCmd::LineTo(r0, 0.0),
                PathCmd::LineTo(r1, 0.0),
                PathCmd::LineTo(r1 - TICK_SIZE, 0.0),
            ],
            // M g r0 h 6 V r1 h -6
            Orientation::Vertical => vec![
                PathCmd::MoveTo(g, r0),
                PathCmd::LineTo(g + TICK_SIZE, r0),
                PathCmd::LineTo(g + TICK_SIZE, r1),
                PathCmd::LineTo(g, r1),
            ],
        };
        PathNode { cmds, ..PathNode::polyline([]) }
    }

    /// One group: baseline bracket, a labelled mark per tick, then the optional title.
    pub fn draw(&self) -> Node {
        let mut group = Group::new().class("axis");
        group.push(self.baseline());

        for tick in self.ticks() {
            let text = format_tick(tick.value);
            let (place, mut label, mark) = match self.orientation {
                Orientation::Vertical => (
                    Transform::translate(self.gutter, tick.offset),
                    TextNode::new(text).at(-5.0, 0.0).anchor(TextAnchor::End),
                    LineNode::new(0.0, 0.0, TICK_SIZE, 0.0),
                ),
                Orientation::Horizontal => (
                    Transform::translate(tick.offset, 0.0),
                    TextNode::new(text).at(0.0, TICK_SIZE + 12.0).anchor(TextAnchor::Middle),
                    LineNode::new(0.0, 0.0, 0.0, TICK_SIZE),
                ),
            };
            label.dy_em = 0.32;
            label.class = Some("tick-label");
            let mut t = Group::new().class("tick").transform(place);
            t.push(label);
            t.push(mark);
            group.push(t);
        }

        if let (Orientation::Vertical, Some(title)) = (self.orientation, &self.title) {
            let (r0, r1) = self.range;
            let shift = (r1 - r0) / 2.0 - 35.0;
            // rotate(-90) translate(-shift, 20): in rotated space
            let t = Transform { tx: 20.0, ty: shift, rotate: -90.0 };
            group.push(TextNode::new(title.clone()).anchor(TextAnchor::End).transform(t));
        }
        Node::Group(group)
    }
}
