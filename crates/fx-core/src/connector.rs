//! Connector geometry: where each line starts and ends, and how it bends.
//!
//! All outputs are in the drawing surface's local space, so they can be
//! written straight into SVG attributes of elements parented under it.

use crate::constants::{
    CONNECTOR_COLOR, CONNECTOR_DASH, CONNECTOR_STROKE_WIDTH, DASH_ANIMATION, MIN_CONTROL_OFFSET,
    RECT_CONTROL_RATIO,
};
use crate::geometry::{angle_deg, control_offset, fmt_num, Rect};
use glam::DVec2;
use smallvec::SmallVec;

/// Layers rarely hold more than a handful of connectors.
pub type Placements = SmallVec<[Placement; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    /// Curves radiating from a central hub to each target.
    Hub,
    /// Straight segments between consecutive targets.
    Chain,
}

impl LayerKind {
    /// Number of primitive groups a layer of this kind needs for `targets` ids.
    pub fn primitive_count(self, targets: usize) -> usize {
        match self {
            LayerKind::Hub => targets,
            LayerKind::Chain => targets.saturating_sub(1),
        }
    }
}

/// Visual settings applied on every pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorStyle {
    pub color: String,
    pub stroke_width: f64,
    pub control_ratio: f64,
    pub min_control_offset: f64,
    pub dash: String,
    pub animation: String,
    pub line_class: String,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            color: CONNECTOR_COLOR.to_string(),
            stroke_width: CONNECTOR_STROKE_WIDTH,
            control_ratio: RECT_CONTROL_RATIO,
            min_control_offset: MIN_CONTROL_OFFSET,
            dash: CONNECTOR_DASH.to_string(),
            animation: DASH_ANIMATION.to_string(),
            line_class: "connectorLine".to_string(),
        }
    }
}

/// Which side of the hub a target sits on, horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
    Overlapping,
}

pub fn side_of(hub: &Rect, target: &Rect) -> Side {
    if target.left > hub.right() {
        Side::Right
    } else if target.right() < hub.left {
        Side::Left
    } else {
        Side::Overlapping
    }
}

/// Cubic curve from hub to target, plus the end marker's heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    pub start: DVec2,
    pub control_a: DVec2,
    pub control_b: DVec2,
    pub end: DVec2,
    pub angle_deg: f64,
}

impl Curve {
    pub fn between(start: DVec2, end: DVec2, ratio: f64, min_offset: f64) -> Self {
        let offset = control_offset(end.x - start.x, ratio, min_offset);
        Self {
            start,
            control_a: DVec2::new(start.x + offset, start.y),
            control_b: DVec2::new(end.x - offset, end.y),
            end,
            angle_deg: angle_deg(start, end),
        }
    }

    /// SVG path data: `M sx sy C ax ay, bx by, ex ey`.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(self.control_a.x),
            fmt_num(self.control_a.y),
            fmt_num(self.control_b.x),
            fmt_num(self.control_b.y),
            fmt_num(self.end.x),
            fmt_num(self.end.y),
        )
    }

    /// Transform for the arrow marker sitting on the curve's end.
    pub fn end_transform(&self) -> String {
        format!(
            "translate({}, {}) rotate({})",
            fmt_num(self.end.x),
            fmt_num(self.end.y),
            fmt_num(self.angle_deg)
        )
    }
}

/// Straight link between two consecutive chain elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    /// Right-edge midpoint of `from` to left-edge midpoint of `to`, in
    /// `surface` space.
    pub fn between_boxes(surface: &Rect, from: &Rect, to: &Rect) -> Self {
        Self {
            from: surface.to_local(from.mid_right()),
            to: surface.to_local(to.mid_left()),
        }
    }
}

/// Outcome of one connector for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Hidden,
    Curve(Curve),
    Segment(Segment),
}

impl Placement {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Placement::Hidden)
    }
}

/// Hub center in surface-local space.
#[inline]
pub fn hub_origin(surface: &Rect, hub: &Rect) -> DVec2 {
    surface.to_local(hub.center())
}

/// Where a hub curve lands on `target`: the near edge midpoint when the target
/// is entirely to one side of the hub, its center otherwise.
pub fn hub_destination(surface: &Rect, hub: &Rect, target: &Rect) -> DVec2 {
    let point = match side_of(hub, target) {
        Side::Right => target.mid_left(),
        Side::Left => target.mid_right(),
        Side::Overlapping => target.center(),
    };
    surface.to_local(point)
}

/// Place one hub connector. Missing or zero-sized targets are hidden.
pub fn place_hub_target(
    surface: &Rect,
    hub: &Rect,
    target: Option<&Rect>,
    style: &ConnectorStyle,
) -> Placement {
    match target {
        Some(t) if !t.is_degenerate() => Placement::Curve(Curve::between(
            hub_origin(surface, hub),
            hub_destination(surface, hub, t),
            style.control_ratio,
            style.min_control_offset,
        )),
        _ => Placement::Hidden,
    }
}

/// Place one chain link. Either end missing or zero-sized hides the link.
pub fn place_chain_link(surface: &Rect, from: Option<&Rect>, to: Option<&Rect>) -> Placement {
    match (from, to) {
        (Some(a), Some(b)) if !a.is_degenerate() && !b.is_degenerate() => {
            Placement::Segment(Segment::between_boxes(surface, a, b))
        }
        _ => Placement::Hidden,
    }
}

/// Lay out every target of a hub layer, in index order.
pub fn layout_hub(
    surface: &Rect,
    hub: &Rect,
    targets: &[Option<Rect>],
    style: &ConnectorStyle,
) -> Placements {
    targets
        .iter()
        .map(|t| place_hub_target(surface, hub, t.as_ref(), style))
        .collect()
}

/// Lay out the links of a chain layer: one per consecutive pair.
pub fn layout_chain(surface: &Rect, targets: &[Option<Rect>]) -> Placements {
    targets
        .windows(2)
        .map(|pair| place_chain_link(surface, pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_selection() {
        let hub = Rect::new(100.0, 100.0, 50.0, 50.0);
        assert_eq!(side_of(&hub, &Rect::new(200.0, 0.0, 10.0, 10.0)), Side::Right);
        assert_eq!(side_of(&hub, &Rect::new(0.0, 0.0, 10.0, 10.0)), Side::Left);
        assert_eq!(
            side_of(&hub, &Rect::new(120.0, 300.0, 10.0, 10.0)),
            Side::Overlapping
        );
    }

    #[test]
    fn overlapping_target_lands_on_center() {
        let surface = Rect::new(10.0, 10.0, 800.0, 600.0);
        let hub = Rect::new(100.0, 100.0, 100.0, 100.0);
        let target = Rect::new(120.0, 400.0, 40.0, 20.0);
        let end = hub_destination(&surface, &hub, &target);
        assert_eq!(end, DVec2::new(130.0, 400.0));
    }

    #[test]
    fn left_target_lands_on_right_edge() {
        let surface = Rect::new(0.0, 0.0, 800.0, 600.0);
        let hub = Rect::new(300.0, 100.0, 100.0, 100.0);
        let target = Rect::new(50.0, 40.0, 100.0, 20.0);
        assert_eq!(
            hub_destination(&surface, &hub, &target),
            DVec2::new(150.0, 50.0)
        );
    }

    #[test]
    fn path_data_uses_clamped_handles() {
        let c = Curve::between(DVec2::new(0.0, 0.0), DVec2::new(50.0, 10.0), 0.3, 40.0);
        assert_eq!(c.path_data(), "M 0 0 C 40 0, 10 10, 50 10");
        assert_eq!(c.control_a.x - c.start.x, 40.0);
    }

    #[test]
    fn chain_primitive_count() {
        assert_eq!(LayerKind::Chain.primitive_count(0), 0);
        assert_eq!(LayerKind::Chain.primitive_count(1), 0);
        assert_eq!(LayerKind::Chain.primitive_count(5), 4);
        assert_eq!(LayerKind::Hub.primitive_count(5), 5);
    }
}
