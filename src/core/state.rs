// Sketch render state.
//
// These types intentionally avoid referencing platform-specific APIs so the
// host-side tests can exercise them natively. The web frontend holds one
// [`SketchState`] and hands it to the per-frame routine; event handlers
// mutate it between frames.

use super::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Canvas size in device pixels. Written only by the resize handler.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pointer-distance threshold for the localized distortion, clamped so
    /// the effect stays usable at extreme window sizes.
    pub fn pointer_threshold(&self) -> f32 {
        (self.width / POINTER_THRESHOLD_DIVISOR)
            .clamp(POINTER_THRESHOLD_MIN, POINTER_THRESHOLD_MAX)
    }

    /// Title text size in px, clamped to its configured range.
    pub fn title_text_size(&self) -> f32 {
        (self.width * TITLE_SIZE_FACTOR).clamp(TITLE_SIZE_MIN, TITLE_SIZE_MAX)
    }
}

/// The two-state modal toggle: a wavy grid, or a near-flat "silence" that
/// turns wavy around the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Wavy,
    Silent,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Wavy => Mode::Silent,
            Mode::Silent => Mode::Wavy,
        }
    }

    /// Full visual bundle for this mode. Derived in one place so a toggle
    /// swaps every dependent field together.
    pub fn theme(self) -> Theme {
        match self {
            Mode::Wavy => Theme {
                stroke: "rgba(50, 0, 200, 0.16)",
                cursor: "rgb(255, 0, 0)",
                title: "WAVY.",
                effect_amp: CALM_WAVE_AMP,
                default_amp: DEFAULT_WAVE_AMP,
            },
            Mode::Silent => Theme {
                stroke: "rgba(200, 0, 50, 0.16)",
                cursor: "rgb(100, 0, 250)",
                title: "SILENCE.",
                effect_amp: DEFAULT_WAVE_AMP,
                default_amp: CALM_WAVE_AMP,
            },
        }
    }
}

/// Stroke and cursor colors, title text, and the amplitude pair of one mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub stroke: &'static str,
    pub cursor: &'static str,
    pub title: &'static str,
    /// Amplitude exactly at the pointer.
    pub effect_amp: f32,
    /// Amplitude at or beyond the pointer threshold.
    pub default_amp: f32,
}

/// Smoothed cursor marker that lags the raw pointer, plus its short position
/// history and stroke weight.
#[derive(Clone, Debug)]
pub struct PointerTrail {
    pub stalker: Vec2,
    pub points: SmallVec<[Vec2; TRAIL_CAP]>,
    pub weight: f32,
}

impl PointerTrail {
    pub fn new(origin: Vec2) -> Self {
        Self {
            stalker: origin,
            points: SmallVec::new(),
            weight: CURSOR_WEIGHT_MIN,
        }
    }

    /// Per-frame update: move the stalker toward the raw pointer, record the
    /// new position, and chase a stroke weight derived from how far the
    /// pointer moved since the previous frame.
    pub fn advance(&mut self, pointer: Vec2, moved: f32) {
        self.stalker += (pointer - self.stalker) * STALKER_BLEND;
        self.push(self.stalker);
        let target = (1.0 + moved / CURSOR_WEIGHT_DIVISOR).max(CURSOR_WEIGHT_MIN);
        self.weight += (target - self.weight) * CURSOR_WEIGHT_BLEND;
    }

    /// Append a position, evicting the oldest when the buffer is full.
    pub fn push(&mut self, p: Vec2) {
        if self.points.len() == TRAIL_CAP {
            self.points.remove(0);
        }
        self.points.push(p);
    }
}

/// Everything the per-frame routine reads, as one explicit struct.
#[derive(Clone, Debug)]
pub struct SketchState {
    pub viewport: Viewport,
    pub mode: Mode,
    pub theme: Theme,
    pub trail: PointerTrail,
}

impl SketchState {
    pub fn new(viewport: Viewport) -> Self {
        let mode = Mode::Wavy;
        let center = Vec2::new(viewport.width / 2.0, viewport.height / 2.0);
        Self {
            viewport,
            mode,
            theme: mode.theme(),
            trail: PointerTrail::new(center),
        }
    }

    /// Flip the modal toggle and swap in the matching theme in one step, so
    /// no frame observes a mixed bundle.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.theme = self.mode.theme();
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
