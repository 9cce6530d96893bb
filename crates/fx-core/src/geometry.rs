//! Rectangle arithmetic shared by the connector engine and the effects.
//!
//! `Rect` mirrors a `DOMRect` as returned by `getBoundingClientRect()`: CSS
//! pixels in viewport space. Points are `glam::DVec2` because DOM geometry is
//! `f64` end to end.

use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Midpoint of the left edge.
    #[inline]
    pub fn mid_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top + self.height / 2.0)
    }

    /// Midpoint of the right edge.
    #[inline]
    pub fn mid_right(&self) -> DVec2 {
        DVec2::new(self.right(), self.top + self.height / 2.0)
    }

    /// True when the box has no area. NaN sizes count as degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Translate a viewport point into this rect's local space.
    #[inline]
    pub fn to_local(&self, point: DVec2) -> DVec2 {
        point - self.origin()
    }

    /// Pointer offset from the center, normalized to -1..1 on each axis.
    ///
    /// A zero-sized axis yields 0 instead of NaN.
    pub fn normalized_offset(&self, client: DVec2) -> DVec2 {
        let half = self.size() / 2.0;
        let local = self.to_local(client) - half;
        DVec2::new(
            if half.x > 0.0 { local.x / half.x } else { 0.0 },
            if half.y > 0.0 { local.y / half.y } else { 0.0 },
        )
    }
}

/// Direction of the segment `from -> to` in degrees, as used by SVG `rotate()`.
#[inline]
pub fn angle_deg(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

/// Horizontal Bezier handle length: proportional to the horizontal span,
/// never shorter than `min_offset`.
#[inline]
pub fn control_offset(dx: f64, ratio: f64, min_offset: f64) -> f64 {
    (dx.abs() * ratio).max(min_offset)
}

/// Format a number for an SVG attribute or CSS value.
///
/// Matches how the browser stringifies numbers for the common cases:
/// integral values print without a fraction and `-0` prints as `0`.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}
