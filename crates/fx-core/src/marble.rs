//! Pointer marble: a small cursor blob that follows the pointer inside a
//! container and swells over hover targets.

use crate::constants::{MARBLE_HOVER_SIZE_PX, MARBLE_SIZE_PX};
use crate::geometry::{fmt_num, Rect};
use glam::DVec2;

/// Inline styles describing the marble's look in one state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarbleLook {
    pub size_px: f64,
    pub background: &'static str,
    pub animation: &'static str,
}

pub const MARBLE_IDLE: MarbleLook = MarbleLook {
    size_px: MARBLE_SIZE_PX,
    background: "radial-gradient(circle at 30% 30%, oklch(0.491 0.27 292.581), oklch(0.491 0.27 292.581), transparent 70%)",
    animation: "none",
};

pub const MARBLE_HOVER: MarbleLook = MarbleLook {
    size_px: MARBLE_HOVER_SIZE_PX,
    background: "radial-gradient(circle at 30% 30%, rgba(0,0,0,0.06), rgba(181,150,255,0.4), transparent 80%)",
    animation: "marbleHoverPulse 1.5s ease-in-out infinite",
};

impl MarbleLook {
    pub fn size_css(&self) -> String {
        format!("{}px", fmt_num(self.size_px))
    }
}

/// Whether an element with these computed styles can receive the pointer.
pub fn receives_pointer(pointer_events: &str, visibility: &str, display: &str) -> bool {
    pointer_events != "none" && visibility != "hidden" && display != "none"
}

/// Tracks whether the pointer is inside the marble's container.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarbleTracker {
    inside: bool,
}

impl MarbleTracker {
    pub fn enter(&mut self) {
        self.inside = true;
    }

    pub fn leave(&mut self) {
        self.inside = false;
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Transform centering the marble on the pointer, or `None` when the
    /// pointer is outside the container.
    ///
    /// A marble that has not been laid out yet (zero size) is treated as the
    /// default size.
    pub fn follow(&self, container: &Rect, client: DVec2, marble_size: DVec2) -> Option<String> {
        if !self.inside {
            return None;
        }
        let (x, y) = marble_offset(container, client, marble_size);
        Some(format!("translate({x}px, {y}px)"))
    }
}

/// Top-left of the marble so its center sits on the pointer, container-local
/// and rounded to whole pixels.
pub fn marble_offset(container: &Rect, client: DVec2, marble_size: DVec2) -> (i64, i64) {
    let local = container.to_local(client);
    let w = if marble_size.x > 0.0 { marble_size.x } else { MARBLE_SIZE_PX };
    let h = if marble_size.y > 0.0 { marble_size.y } else { MARBLE_SIZE_PX };
    (
        js_round(local.x - w / 2.0),
        js_round(local.y - h / 2.0),
    )
}

// Math.round semantics: halves round toward +inf.
fn js_round(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_only_when_inside() {
        let mut t = MarbleTracker::default();
        let c = Rect::new(100.0, 50.0, 400.0, 300.0);
        assert!(t.follow(&c, DVec2::new(200.0, 100.0), DVec2::splat(20.0)).is_none());
        t.enter();
        assert_eq!(
            t.follow(&c, DVec2::new(200.0, 100.0), DVec2::splat(20.0)).as_deref(),
            Some("translate(90px, 40px)")
        );
        t.leave();
        assert!(!t.is_inside());
    }

    #[test]
    fn zero_size_marble_uses_default() {
        let c = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(marble_offset(&c, DVec2::new(50.0, 50.0), DVec2::ZERO), (40, 40));
        assert_eq!(
            marble_offset(&c, DVec2::new(50.0, 50.0), DVec2::splat(80.0)),
            (10, 10)
        );
    }

    #[test]
    fn rounding_matches_math_round() {
        assert_eq!(js_round(2.5), 3);
        assert_eq!(js_round(-2.5), -2);
        assert_eq!(js_round(-2.6), -3);
    }

    #[test]
    fn pointer_visibility_rules() {
        assert!(receives_pointer("auto", "visible", "block"));
        assert!(!receives_pointer("none", "visible", "block"));
        assert!(!receives_pointer("auto", "hidden", "block"));
        assert!(!receives_pointer("auto", "visible", "none"));
    }

    #[test]
    fn looks_render_sizes() {
        assert_eq!(MARBLE_IDLE.size_css(), "20px");
        assert_eq!(MARBLE_HOVER.size_css(), "80px");
    }
}
