//! Connector layout engine.
//!
//! The engine owns one primitive group per connector and repaints them in
//! place on every pass. It is generic over a [`Scene`], which measures boxes
//! and owns the actual drawing elements; the web front-end implements it on
//! top of SVG, tests implement it with a recording mock.
//!
//! Lifecycle is two-phase: [`ConnectorEngine::configure`] validates the
//! layer, [`ConnectorEngine::start`] creates the primitives (once) and runs
//! the first pass. Further passes come from [`ConnectorEngine::on_trigger`].

use crate::connector::{layout_chain, layout_hub, ConnectorStyle, LayerKind, Placement};
use crate::constants::{CHAIN_POLL_MS, HUB_POLL_MS};
use crate::error::FxError;
use crate::geometry::Rect;

/// Measurement and drawing backend for one layer.
pub trait Scene {
    type Group;

    /// Bounding box of the drawing surface; `None` when it is gone.
    fn surface_rect(&self) -> Option<Rect>;
    /// Bounding box of the hub; `None` when it cannot be resolved right now.
    fn hub_rect(&self) -> Option<Rect>;
    /// Bounding box backing target `id`; `None` when it does not resolve.
    fn target_rect(&self, id: &str) -> Option<Rect>;

    /// Create the drawing elements for connector `index` under the surface.
    fn create_group(
        &mut self,
        index: usize,
        kind: LayerKind,
        style: &ConnectorStyle,
    ) -> Result<Self::Group, FxError>;

    /// Apply a placement. `Placement::Hidden` hides the group; any other
    /// placement makes it visible and moves it.
    fn paint(&mut self, group: &Self::Group, placement: &Placement, style: &ConnectorStyle);
}

/// Per-layer configuration, built once and threaded through the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    pub name: String,
    pub kind: LayerKind,
    pub targets: Vec<String>,
    pub style: ConnectorStyle,
    pub poll_interval_ms: i32,
}

impl LayerConfig {
    pub fn hub(name: &str, targets: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: LayerKind::Hub,
            targets: targets.iter().map(|t| t.to_string()).collect(),
            style: ConnectorStyle::default(),
            poll_interval_ms: HUB_POLL_MS,
        }
    }

    pub fn chain(name: &str, targets: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: LayerKind::Chain,
            targets: targets.iter().map(|t| t.to_string()).collect(),
            // chain lines carry no class so hub-curve CSS does not reach them
            style: ConnectorStyle {
                line_class: String::new(),
                ..ConnectorStyle::default()
            },
            poll_interval_ms: CHAIN_POLL_MS,
        }
    }

    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_poll_interval(mut self, ms: i32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if self.name.trim().is_empty() {
            return Err(FxError::InvalidConfig("layer name is empty".into()));
        }
        if self.poll_interval_ms <= 0 {
            return Err(FxError::InvalidConfig(format!(
                "{}: poll interval must be positive, got {}",
                self.name, self.poll_interval_ms
            )));
        }
        let s = &self.style;
        if !(s.control_ratio.is_finite() && s.control_ratio >= 0.0) {
            return Err(FxError::InvalidConfig(format!(
                "{}: control ratio {} out of range",
                self.name, s.control_ratio
            )));
        }
        if !(s.min_control_offset.is_finite() && s.min_control_offset >= 0.0) {
            return Err(FxError::InvalidConfig(format!(
                "{}: min control offset {} out of range",
                self.name, s.min_control_offset
            )));
        }
        Ok(())
    }

    pub fn primitive_count(&self) -> usize {
        self.kind.primitive_count(self.targets.len())
    }
}

/// What caused a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Resize,
    Poll,
    Manual,
}

/// Summary of one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    pub visible: usize,
    pub hidden: usize,
    /// The surface or hub was missing, so nothing was touched.
    pub skipped: bool,
}

pub struct ConnectorEngine<S: Scene> {
    scene: S,
    config: LayerConfig,
    groups: Vec<S::Group>,
    placements: Vec<Placement>,
    started: bool,
    passes: u64,
}

impl<S: Scene> ConnectorEngine<S> {
    pub fn configure(scene: S, config: LayerConfig) -> Result<Self, FxError> {
        config.validate()?;
        Ok(Self {
            scene,
            config,
            groups: Vec::new(),
            placements: Vec::new(),
            started: false,
            passes: 0,
        })
    }

    /// Create the primitive groups and run the first pass.
    ///
    /// Calling this again on a started engine only recomputes the layout.
    pub fn start(&mut self) -> Result<PassReport, FxError> {
        if !self.started {
            let count = self.config.primitive_count();
            let mut groups = Vec::with_capacity(count);
            for i in 0..count {
                groups.push(
                    self.scene
                        .create_group(i, self.config.kind, &self.config.style)?,
                );
            }
            self.groups = groups;
            self.placements = vec![Placement::Hidden; count];
            self.started = true;
            log::debug!(
                "[connector] {} started with {} groups",
                self.config.name,
                count
            );
        }
        Ok(self.recompute_layout())
    }

    pub fn on_trigger(&mut self, trigger: Trigger) -> PassReport {
        log::trace!("[connector] {} pass on {:?}", self.config.name, trigger);
        self.recompute_layout()
    }

    /// Measure everything and repaint every group in index order.
    pub fn recompute_layout(&mut self) -> PassReport {
        if !self.started {
            return PassReport {
                skipped: true,
                ..PassReport::default()
            };
        }
        let Some(surface) = self.scene.surface_rect() else {
            return PassReport {
                skipped: true,
                ..PassReport::default()
            };
        };
        let rects: Vec<Option<Rect>> = self
            .config
            .targets
            .iter()
            .map(|id| self.scene.target_rect(id))
            .collect();

        let placements = match self.config.kind {
            LayerKind::Hub => {
                let Some(hub) = self.scene.hub_rect() else {
                    return PassReport {
                        skipped: true,
                        ..PassReport::default()
                    };
                };
                layout_hub(&surface, &hub, &rects, &self.config.style)
            }
            LayerKind::Chain => layout_chain(&surface, &rects),
        };

        let mut report = PassReport::default();
        for (i, (group, placement)) in self.groups.iter().zip(placements.iter()).enumerate() {
            self.scene.paint(group, placement, &self.config.style);
            if placement.is_visible() {
                report.visible += 1;
            } else {
                report.hidden += 1;
            }
            self.placements[i] = *placement;
        }
        self.passes += 1;
        report
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn groups(&self) -> &[S::Group] {
        &self.groups
    }

    /// Placements from the most recent completed pass.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Completed (non-skipped) passes so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
