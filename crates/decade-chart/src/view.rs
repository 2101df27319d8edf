// File: crates/decade-chart/src/view.rs
// Summary: Retained chart view; render lifecycle (build, clear, rebuild, unmount) and pointer-driven tooltip.

use std::time::Duration;

use crate::chart::{draw, RenderOptions};
use crate::cloud::{ApproxMetrics, TextMetrics};
use crate::data::{ChartData, ChartDimensions};
use crate::scale::ChartScales;
use crate::scene::Scene;
use crate::tooltip::Tooltip;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderState {
    Idle,
    ScalesBuilt,
    Drawn,
    Cleared,
}

pub struct ChartView<M: TextMetrics = ApproxMetrics> {
    opts: RenderOptions,
    metrics: M,
    state: RenderState,
    scene: Scene,
    inputs: Option<(ChartData, ChartDimensions)>,
    tooltip: Tooltip,
    hovered: Option<usize>,
}

impl ChartView<ApproxMetrics> {
    pub fn new(opts: RenderOptions) -> Self {
        Self::with_metrics(opts, ApproxMetrics)
    }
}

impl<M: TextMetrics> ChartView<M> {
    pub fn with_metrics(opts: RenderOptions, metrics: M) -> Self {
        Self {
            opts,
            metrics,
            state: RenderState::Idle,
            scene: Scene::default(),
            inputs: None,
            tooltip: Tooltip::new(),
            hovered: None,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Render only when the dataset or dimensions differ from the last render.
    /// Returns whether a new pass ran.
    pub fn update(&mut self, data: &ChartData, dims: &ChartDimensions) -> bool {
        let unchanged = self.state == RenderState::Drawn
            && self.inputs.as_ref().is_some_and(|(d, s)| d == data && s == dims);
        if unchanged {
            return false;
        }
        self.render(data, dims);
        true
    }

    /// Discard the previous scene and draw from scratch.
    pub fn render(&mut self, data: &ChartData, dims: &ChartDimensions) -> &Scene {
        if self.state == RenderState::Drawn {
            self.clear();
        }
        let scales = ChartScales::build(&data.meta, dims);
        self.state = RenderState::ScalesBuilt;
        self.scene = draw(&scales, data, dims, &self.opts, &self.metrics);
        self.inputs = Some((data.clone(), *dims));
        self.state = RenderState::Drawn;
        tracing::debug!(elements = self.scene.element_count(), "chart drawn");
        &self.scene
    }

    /// Drop every drawn element and the transient tooltip.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.tooltip.leave();
        self.hovered = None;
        self.state = RenderState::Cleared;
    }

    pub fn unmount(&mut self) {
        self.clear();
        self.inputs = None;
    }

    /// Pointer moved to `pos` (surface space), `page` is the same point in page space.
    pub fn pointer_move(&mut self, pos: (f64, f64), page: (f64, f64), now: Duration) {
        let hit = self.scene.hit_test(pos).map(|c| (c.record, c.tooltip.clone()));
        let target = hit.as_ref().map(|(i, _)| *i);
        if target != self.hovered {
            if self.hovered.is_some() {
                self.tooltip.leave();
            }
            if let Some((_, Some(content))) = hit {
                self.tooltip.hover(content, now);
            }
            self.hovered = target;
        }
        if self.hovered.is_some() {
            self.tooltip.move_to(page.0, page.1);
        }
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) {
        if self.hovered.take().is_some() {
            self.tooltip.leave();
        }
    }
}

