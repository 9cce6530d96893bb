// Shared tuning constants for the page effects.

// Connector appearance
pub const CONNECTOR_COLOR: &str = "#4e73df";
pub const CONNECTOR_STROKE_WIDTH: f64 = 2.0;
pub const CONNECTOR_DASH: &str = "6";
pub const START_SOCKET_RADIUS: f64 = 6.0;
pub const END_SOCKET_POINTS: &str = "0,-4 8,0 0,4"; // arrow pointing along +x before rotation

// Bezier handle heuristic
pub const MIN_CONTROL_OFFSET: f64 = 40.0;
pub const RECT_CONTROL_RATIO: f64 = 0.3;
pub const POLY_CONTROL_RATIO: f64 = 0.08;

// Connector animations (keyframes live in the page stylesheet)
pub const DASH_ANIMATION: &str = "dashMove 1.5s linear infinite";
pub const DASH_POLY_ANIMATION: &str = "dashPolyMove 1.5s linear infinite";

// Re-layout polling, milliseconds
pub const HUB_POLL_MS: i32 = 500;
pub const CHAIN_POLL_MS: i32 = 600;

// Slider
pub const SLIDE_INTERVAL_MS: i32 = 3000;

// Hover weave defaults
pub const WEAVE_INTENSITY: f64 = 20.0;
pub const WEAVE_SPEED_SEC: f64 = 0.2;
pub const WEAVE_HOVER_SCALE: f64 = 1.1;

// Pointer marble
pub const MARBLE_SIZE_PX: f64 = 20.0;
pub const MARBLE_HOVER_SIZE_PX: f64 = 80.0;
pub const PARALLAX_INTENSITY: f64 = 20.0;
pub const PARALLAX_TILT_DEG: f64 = 8.0;
pub const PARALLAX_PERSPECTIVE_PX: f64 = 600.0;

// Button border stroke
pub const BORDER_CORNER_RADIUS: u32 = 12;
pub const BORDER_ACTIVE_STROKE: &str = "rgba(0,128,255,0.8)";
pub const BORDER_ANIMATION: &str = "dashmove 1s linear infinite";
