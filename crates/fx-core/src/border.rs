//! Animated dashed border stroke for buttons drawn with an SVG rect.

use crate::constants::{BORDER_ACTIVE_STROKE, BORDER_ANIMATION};
use crate::geometry::Rect;

/// Pixel size the border SVG and its rect are fitted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderFrame {
    pub width: u32,
    pub height: u32,
}

impl BorderFrame {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            width: round_non_negative(rect.width),
            height: round_non_negative(rect.height),
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

fn round_non_negative(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round() as u32
    } else {
        0
    }
}

/// Stroke styles for the border rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeStyle {
    pub stroke: &'static str,
    pub stroke_width: &'static str,
    pub dasharray: &'static str,
    pub dashoffset: Option<&'static str>,
    pub animation: &'static str,
}

impl StrokeStyle {
    /// Active strokes restart their animation, which needs a forced reflow.
    pub fn restarts_animation(&self) -> bool {
        self.animation != "none"
    }
}

pub fn stroke_style(active: bool) -> StrokeStyle {
    if active {
        StrokeStyle {
            stroke: BORDER_ACTIVE_STROKE,
            stroke_width: "2",
            dasharray: "5 5",
            dashoffset: Some("0"),
            animation: BORDER_ANIMATION,
        }
    } else {
        StrokeStyle {
            stroke: "transparent",
            stroke_width: "0",
            dasharray: "none",
            dashoffset: None,
            animation: "none",
        }
    }
}
