// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the constant modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sketch_constants_are_within_reasonable_bounds() {
    assert!(ITER_STEP > 0.0);
    assert!(WAVE_SPEED_RATIO > 0.0);
    assert!(BLEND_EXPONENT >= 1);

    // The calm line must sit well below the resting wave.
    assert!(CALM_WAVE_AMP > 0.0);
    assert!(CALM_WAVE_AMP < DEFAULT_WAVE_AMP);
    assert!(DEFAULT_WAVE_AMP <= ITER_STEP / 2.0);

    // Blend factors are fractions.
    assert!(STALKER_BLEND > 0.0 && STALKER_BLEND < 1.0);
    assert!(CURSOR_WEIGHT_BLEND > 0.0 && CURSOR_WEIGHT_BLEND < 1.0);

    assert!(TRAIL_CAP >= 2);
    assert!(CURSOR_WEIGHT_MIN >= 1.0);
    assert!(CURSOR_WEIGHT_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clamp_ranges_are_ordered() {
    assert!(POINTER_THRESHOLD_MIN <= POINTER_THRESHOLD_MAX);
    assert!(TITLE_SIZE_MIN <= TITLE_SIZE_MAX);
    assert!(POINTER_THRESHOLD_DIVISOR > 0.0);
    assert!(TITLE_SIZE_FACTOR > 0.0);
}

#[test]
fn colors_are_css_color_strings() {
    for c in [BACKGROUND_FILL, TITLE_FILL_COLOR] {
        assert!(c.starts_with("rgba("), "{c}");
    }
    assert!(TITLE_EDGE_COLOR.starts_with("rgb("));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_layer_constants_are_sane() {
    assert!(!CANVAS_ID.is_empty());
    assert!(WAVE_STROKE_WEIGHT > 0.0);
    assert!(TITLE_STROKE_WEIGHT > 0.0);
    assert!(FPS_LOG_INTERVAL_FRAMES > 0);
}
