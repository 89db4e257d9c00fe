//! Canvas 2D drawing for the per-frame routine. Each frame is redrawn from
//! scratch in immediate mode; the only cross-frame blending comes from the
//! translucent background wash.

use crate::constants::*;
use crate::core::constants::ITER_STEP;
use crate::core::{wave, PointerTrail, SketchState, Theme, Viewport};
use glam::Vec2;
use web_sys as web;

/// Wash the previous frame with the translucent background color; earlier
/// frames stay faintly visible, producing the motion trail.
pub fn draw_background(ctx: &web::CanvasRenderingContext2d, viewport: &Viewport) {
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
}

/// Draw the grid of wavy polylines, locally distorted around the pointer.
///
/// Bands start at `step/3` and samples overshoot the viewport by a step on
/// each side so the lines never end on-screen.
pub fn draw_wave_grid(
    ctx: &web::CanvasRenderingContext2d,
    state: &SketchState,
    frame: f32,
    pointer: Vec2,
) {
    let vp = &state.viewport;
    let theme = &state.theme;
    let threshold = vp.pointer_threshold();
    let step = ITER_STEP;

    ctx.set_stroke_style_str(theme.stroke);
    ctx.set_line_width(WAVE_STROKE_WEIGHT);

    let mut j = step / 3.0;
    while j < vp.height {
        ctx.begin_path();
        let mut first = true;
        let mut i = -step;
        while i < vp.width + step * 2.0 {
            let dist = pointer.distance(Vec2::new(i, j));
            let amp = wave::sample_amplitude(dist, threshold, theme.effect_amp, theme.default_amp);
            let y = wave::displacement(frame, i, j, amp) as f64;
            if first {
                ctx.move_to(i as f64, y);
                first = false;
            } else {
                ctx.line_to(i as f64, y);
            }
            i += step;
        }
        ctx.stroke();
        j += step;
    }
}

/// Two-pass title near the bottom-left: white outline, then translucent fill.
pub fn draw_title(ctx: &web::CanvasRenderingContext2d, state: &SketchState) {
    let vp = &state.viewport;
    let size = vp.title_text_size();
    let margin = (size / 4.0) as f64;
    let x = margin / 3.0;
    let y = vp.height as f64 - margin;

    ctx.set_font(&format!("italic bold {}px Arial", size as u32));
    ctx.set_line_width(TITLE_STROKE_WEIGHT);
    ctx.set_stroke_style_str(TITLE_EDGE_COLOR);
    _ = ctx.stroke_text(state.theme.title, x, y);
    ctx.set_fill_style_str(TITLE_FILL_COLOR);
    _ = ctx.fill_text(state.theme.title, x, y);
}

/// Smooth curve through the stalker trail. Quadratic segments aimed at
/// successive midpoints keep the curve continuous through every buffered
/// point.
pub fn draw_cursor_trail(ctx: &web::CanvasRenderingContext2d, theme: &Theme, trail: &PointerTrail) {
    let pts = &trail.points;
    if pts.len() < 2 {
        return;
    }

    ctx.set_stroke_style_str(theme.cursor);
    ctx.set_line_width(trail.weight as f64);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    ctx.move_to(pts[0].x as f64, pts[0].y as f64);
    for k in 1..pts.len() - 1 {
        let mid = (pts[k] + pts[k + 1]) * 0.5;
        ctx.quadratic_curve_to(pts[k].x as f64, pts[k].y as f64, mid.x as f64, mid.y as f64);
    }
    let last = pts[pts.len() - 1];
    ctx.line_to(last.x as f64, last.y as f64);
    ctx.stroke();
}
