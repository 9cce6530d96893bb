//! Pointer-driven tilt transforms: the hover "weave" and the marble parallax.

use crate::constants::{PARALLAX_PERSPECTIVE_PX, PARALLAX_TILT_DEG, WEAVE_HOVER_SCALE};
use crate::geometry::{fmt_num, Rect};
use glam::DVec2;

pub const WEAVE_RESET_TRANSFORM: &str = "translate(0,0) rotateX(0) rotateY(0) scale(1)";
pub const WEAVE_RESET_SHADOW: &str = "0 0 20px rgba(0,0,0,0.1)";

pub const PARALLAX_TRANSITION: &str =
    "transform 0.18s ease-out, filter 0.18s ease-out, box-shadow 0.18s ease-out";
pub const PARALLAX_HOVER_FILTER: &str = "brightness(1.15) saturate(1.08)";
pub const PARALLAX_RESET_FILTER: &str = "brightness(1) saturate(1)";
pub const PARALLAX_RESET_TRANSFORM: &str =
    "perspective(600px) rotateX(0deg) rotateY(0deg) translate(0,0) scale(1)";

/// Style values for one pointer sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TiltFrame {
    pub transform: String,
    pub box_shadow: String,
}

pub fn weave_transition(speed_sec: f64) -> String {
    let s = fmt_num(speed_sec);
    format!("transform {s}s ease-out, box-shadow {s}s ease-out")
}

/// Hover weave: translate toward the pointer and rotate away from it.
pub fn weave_frame(rect: &Rect, client: DVec2, intensity: f64) -> TiltFrame {
    let mv = rect.normalized_offset(client) * intensity;
    TiltFrame {
        transform: format!(
            "translate({}px, {}px) rotateX({}deg) rotateY({}deg) scale({})",
            fmt_num(mv.x / 2.0),
            fmt_num(mv.y / 2.0),
            fmt_num(mv.y / 3.0),
            fmt_num(-mv.x / 3.0),
            fmt_num(WEAVE_HOVER_SCALE),
        ),
        box_shadow: format!(
            "{}px {}px 30px rgba(0,0,0,0.25)",
            fmt_num(-mv.x / 2.0),
            fmt_num(mv.y / 2.0)
        ),
    }
}

fn fixed(v: f64, digits: usize) -> String {
    let s = format!("{:.*}", digits, v);
    // "-0.00" reads oddly in a style string
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

/// Marble hover-target parallax: perspective tilt plus a small shift.
pub fn parallax_frame(rect: &Rect, client: DVec2, intensity: f64) -> TiltFrame {
    let n = rect.normalized_offset(client);
    let mv = n * intensity;
    TiltFrame {
        transform: format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translate({}px, {}px) scale3d(1.05, 1.05, 1.05)",
            fmt_num(PARALLAX_PERSPECTIVE_PX),
            fixed(-n.y * PARALLAX_TILT_DEG, 2),
            fixed(n.x * PARALLAX_TILT_DEG, 2),
            fixed(mv.x / 3.0, 2),
            fixed(mv.y / 3.0, 2),
        ),
        box_shadow: format!(
            "{}px {}px 28px rgba(0,0,0,0.22)",
            fixed(-mv.x / 2.0, 0),
            fixed(mv.y / 2.0, 0)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weave_at_center_is_neutral() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let f = weave_frame(&r, DVec2::new(50.0, 50.0), 20.0);
        assert_eq!(
            f.transform,
            "translate(0px, 0px) rotateX(0deg) rotateY(0deg) scale(1.1)"
        );
        assert_eq!(f.box_shadow, "0px 0px 30px rgba(0,0,0,0.25)");
    }

    #[test]
    fn weave_at_right_edge() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let f = weave_frame(&r, DVec2::new(100.0, 50.0), 30.0);
        assert_eq!(
            f.transform,
            "translate(15px, 0px) rotateX(0deg) rotateY(-10deg) scale(1.1)"
        );
        assert_eq!(f.box_shadow, "-15px 0px 30px rgba(0,0,0,0.25)");
    }

    #[test]
    fn weave_on_zero_sized_element_stays_finite() {
        let r = Rect::new(10.0, 10.0, 0.0, 0.0);
        let f = weave_frame(&r, DVec2::new(500.0, 500.0), 20.0);
        assert!(!f.transform.contains("NaN"));
        assert!(!f.transform.contains("inf"));
    }

    #[test]
    fn parallax_rounds_like_to_fixed() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        let f = parallax_frame(&r, DVec2::new(150.0, 0.0), 20.0);
        // n = (0.5, -1)
        assert_eq!(
            f.transform,
            "perspective(600px) rotateX(8.00deg) rotateY(4.00deg) translate(3.33px, -6.67px) scale3d(1.05, 1.05, 1.05)"
        );
        assert_eq!(f.box_shadow, "-5px -10px 28px rgba(0,0,0,0.22)");
    }

    #[test]
    fn transition_string() {
        assert_eq!(
            weave_transition(0.2),
            "transform 0.2s ease-out, box-shadow 0.2s ease-out"
        );
    }
}
