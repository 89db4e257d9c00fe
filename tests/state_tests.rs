// Host-side tests for the sketch render state.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod state {
    include!("../src/core/state.rs");
}

use constants::*;
use glam::Vec2;
use state::*;

#[test]
fn toggling_twice_round_trips_the_whole_bundle() {
    let mut s = SketchState::new(Viewport::new(1200.0, 800.0));
    let mode_before = s.mode;
    let theme_before = s.theme;

    s.toggle_mode();
    s.toggle_mode();

    assert_eq!(s.mode, mode_before);
    assert_eq!(s.theme, theme_before);
}

#[test]
fn toggle_swaps_every_dependent_field_together() {
    let mut s = SketchState::new(Viewport::new(1200.0, 800.0));
    assert_eq!(s.mode, Mode::Wavy);
    assert_eq!(s.theme.title, "WAVY.");
    assert_eq!(s.theme.effect_amp, CALM_WAVE_AMP);
    assert_eq!(s.theme.default_amp, DEFAULT_WAVE_AMP);

    s.toggle_mode();

    assert_eq!(s.mode, Mode::Silent);
    assert_eq!(s.theme.title, "SILENCE.");
    // The amplitude pair flips with the palette.
    assert_eq!(s.theme.effect_amp, DEFAULT_WAVE_AMP);
    assert_eq!(s.theme.default_amp, CALM_WAVE_AMP);
    assert_ne!(s.theme.stroke, Mode::Wavy.theme().stroke);
    assert_ne!(s.theme.cursor, Mode::Wavy.theme().cursor);
}

#[test]
fn trail_never_exceeds_its_capacity() {
    let mut trail = PointerTrail::new(Vec2::ZERO);
    for k in 0..32 {
        trail.push(Vec2::new(k as f32, 0.0));
        assert!(trail.points.len() <= TRAIL_CAP);
    }
    assert_eq!(trail.points.len(), TRAIL_CAP);
}

#[test]
fn trail_evicts_oldest_entries_first() {
    let mut trail = PointerTrail::new(Vec2::ZERO);
    for k in 0..6 {
        trail.push(Vec2::new(k as f32, 0.0));
    }
    let xs: Vec<f32> = trail.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn stalker_moves_a_fixed_fraction_toward_the_pointer() {
    let mut trail = PointerTrail::new(Vec2::ZERO);
    let pointer = Vec2::new(100.0, 0.0);

    trail.advance(pointer, 0.0);
    assert!((trail.stalker.x - 100.0 * STALKER_BLEND).abs() < 1e-4);

    // Each step closes the remaining gap by the same fraction.
    let mut gap = pointer.distance(trail.stalker);
    for _ in 0..8 {
        trail.advance(pointer, 0.0);
        let next_gap = pointer.distance(trail.stalker);
        assert!((next_gap - gap * (1.0 - STALKER_BLEND)).abs() < 1e-3);
        gap = next_gap;
    }
}

#[test]
fn advance_records_the_smoothed_position_not_the_raw_pointer() {
    let mut trail = PointerTrail::new(Vec2::ZERO);
    trail.advance(Vec2::new(50.0, 50.0), 0.0);
    assert_eq!(*trail.points.last().unwrap(), trail.stalker);
    assert_ne!(*trail.points.last().unwrap(), Vec2::new(50.0, 50.0));
}

#[test]
fn cursor_weight_chases_displacement_and_never_drops_below_min() {
    let mut trail = PointerTrail::new(Vec2::ZERO);

    // A fast pointer thickens the stroke.
    trail.advance(Vec2::new(100.0, 0.0), 100.0);
    let target = 1.0 + 100.0 / CURSOR_WEIGHT_DIVISOR;
    let expected = CURSOR_WEIGHT_MIN + (target - CURSOR_WEIGHT_MIN) * CURSOR_WEIGHT_BLEND;
    assert!((trail.weight - expected).abs() < 1e-4);

    // A stationary pointer decays back toward the floor, never below it.
    for _ in 0..200 {
        trail.advance(Vec2::new(100.0, 0.0), 0.0);
        assert!(trail.weight >= CURSOR_WEIGHT_MIN);
    }
    assert!((trail.weight - CURSOR_WEIGHT_MIN).abs() < 1e-2);
}

#[test]
fn pointer_threshold_stays_within_bounds_for_any_width() {
    for w in [0.0, 60.0, 720.0, 1200.0, 10_000.0, 1.0e6] {
        let t = Viewport::new(w, 800.0).pointer_threshold();
        assert!((POINTER_THRESHOLD_MIN..=POINTER_THRESHOLD_MAX).contains(&t));
    }
    // Unclamped in the middle of the range.
    assert_eq!(Viewport::new(1200.0, 800.0).pointer_threshold(), 200.0);
}

#[test]
fn title_size_stays_within_bounds_for_any_width() {
    for w in [0.0, 100.0, 1200.0, 10_000.0] {
        let s = Viewport::new(w, 800.0).title_text_size();
        assert!((TITLE_SIZE_MIN..=TITLE_SIZE_MAX).contains(&s));
    }
    assert!((Viewport::new(1200.0, 800.0).title_text_size() - 180.0).abs() < 1e-3);
}

#[test]
fn resize_replaces_the_viewport_and_derived_values() {
    let mut s = SketchState::new(Viewport::new(1200.0, 800.0));
    let before = s.viewport.pointer_threshold();

    s.set_viewport(Viewport::new(3000.0, 900.0));

    assert_eq!(s.viewport.width, 3000.0);
    assert_eq!(s.viewport.pointer_threshold(), 480.0);
    assert_ne!(s.viewport.pointer_threshold(), before);
}
