use crate::constants::FPS_LOG_INTERVAL_FRAMES;
use crate::core::SketchState;
use crate::input;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub ctx: web::CanvasRenderingContext2d,
    pub state: Rc<RefCell<SketchState>>,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub frame_count: u64,
    pub prev_pointer: Vec2,
    pub interval_start: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.frame_count += 1;
        let pointer = self.mouse.borrow().pos();
        let moved = pointer.distance(self.prev_pointer);

        {
            let mut state = self.state.borrow_mut();
            state.trail.advance(pointer, moved);

            let frame = self.frame_count as f32;
            render::draw_background(&self.ctx, &state.viewport);
            render::draw_wave_grid(&self.ctx, &state, frame, pointer);
            render::draw_title(&self.ctx, &state);
            render::draw_cursor_trail(&self.ctx, &state.theme, &state.trail);
        }

        self.prev_pointer = pointer;

        if self.frame_count % FPS_LOG_INTERVAL_FRAMES == 0 {
            let elapsed = self.interval_start.elapsed().as_secs_f32();
            if elapsed > 0.0 {
                log::debug!(
                    "[frame] {:.1} fps over the last {} frames",
                    FPS_LOG_INTERVAL_FRAMES as f32 / elapsed,
                    FPS_LOG_INTERVAL_FRAMES
                );
            }
            self.interval_start = Instant::now();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
