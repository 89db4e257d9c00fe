// Sketch tuning constants. None of these are principled beyond visual feel.

/// Sampling interval of the wave grid, in px (bands and samples alike).
pub const ITER_STEP: f32 = 60.0;

/// Angular speed of the wave, radians per frame.
pub const WAVE_SPEED_RATIO: f32 = 0.03;

/// Steepness exponent applied to the normalized pointer distance before
/// blending amplitudes. Higher values narrow the transition band.
pub const BLEND_EXPONENT: i32 = 10;

/// Amplitude of the near-flat "calm" line, in px.
pub const CALM_WAVE_AMP: f32 = 2.0;

/// Resting wave amplitude, in px.
pub const DEFAULT_WAVE_AMP: f32 = ITER_STEP / 3.0;

// Pointer-distance threshold: width / divisor, clamped to [min, max] px.
pub const POINTER_THRESHOLD_DIVISOR: f32 = 6.0;
pub const POINTER_THRESHOLD_MIN: f32 = 120.0;
pub const POINTER_THRESHOLD_MAX: f32 = 480.0;

// Title text size: width * factor, clamped to [min, max] px.
pub const TITLE_SIZE_FACTOR: f32 = 0.15;
pub const TITLE_SIZE_MIN: f32 = 64.0;
pub const TITLE_SIZE_MAX: f32 = 260.0;

/// Per-frame blend moving the stalker toward the raw pointer.
pub const STALKER_BLEND: f32 = 0.2;

/// Capacity of the stalker trail; the oldest entry is evicted first.
pub const TRAIL_CAP: usize = 4;

// Cursor stroke weight chases 1 + displacement / divisor.
pub const CURSOR_WEIGHT_DIVISOR: f32 = 10.0;
pub const CURSOR_WEIGHT_BLEND: f32 = 0.25;
pub const CURSOR_WEIGHT_MIN: f32 = 1.0;
