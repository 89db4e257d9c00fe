// Web-layer constants: element ids, fixed colors, stroke weights.

pub const CANVAS_ID: &str = "wave-canvas";

/// Semi-transparent clear color; prior frames bleed through as ghosting.
pub const BACKGROUND_FILL: &str = "rgba(0, 0, 0, 0.03)";

pub const TITLE_EDGE_COLOR: &str = "rgb(255, 255, 255)";
pub const TITLE_FILL_COLOR: &str = "rgba(180, 180, 180, 0.78)";

pub const WAVE_STROKE_WEIGHT: f64 = 1.0;
pub const TITLE_STROKE_WEIGHT: f64 = 2.0;

/// How often the measured frame rate is logged, in frames.
pub const FPS_LOG_INTERVAL_FRAMES: u64 = 600;
