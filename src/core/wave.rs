// Pure wave math shared by the renderer and the host-side tests.
//
// Everything here is a total function over plain floats so it runs
// unchanged on native targets.

use super::constants::*;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Phase offset for the sample at `(i, j)`, staggering the wave's apparent
/// motion across the grid.
#[inline]
pub fn phase_delay(i: f32, j: f32) -> f32 {
    (i + j) / 2.0
}

/// Sharpened pointer-distance blend factor in `[0, 1]`: 0 exactly at the
/// pointer, 1 at or beyond `threshold`.
#[inline]
pub fn blend_factor(dist: f32, threshold: f32) -> f32 {
    (dist / threshold).clamp(0.0, 1.0).powi(BLEND_EXPONENT)
}

/// Amplitude for one sample: the effect amplitude at the pointer, the
/// default amplitude at or beyond the threshold, blended in between.
#[inline]
pub fn sample_amplitude(dist: f32, threshold: f32, effect_amp: f32, default_amp: f32) -> f32 {
    lerp(effect_amp, default_amp, blend_factor(dist, threshold))
}

/// Vertical position of the sample at `(i, j)` for the given frame count.
#[inline]
pub fn displacement(frame: f32, i: f32, j: f32, amp: f32) -> f32 {
    amp * ((frame - phase_delay(i, j)) * WAVE_SPEED_RATIO).sin() + j
}

/// Period of [`displacement`] in frames.
#[inline]
pub fn frame_period() -> f32 {
    std::f32::consts::TAU / WAVE_SPEED_RATIO
}
