#![cfg(target_arch = "wasm32")]
use crate::core::{SketchState, Viewport};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::CANVAS_ID;

// Keep the canvas backing store and the sketch viewport in sync; derived
// thresholds are recomputed from the viewport on the next frame.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, state: Rc<RefCell<SketchState>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        state
            .borrow_mut()
            .set_viewport(Viewport::new(w as f32, h as f32));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wavy-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    dom::hide_cursor(&canvas);
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let center = Vec2::new(w as f32 / 2.0, h as f32 / 2.0);
    let state = Rc::new(RefCell::new(SketchState::new(Viewport::new(
        w as f32, h as f32,
    ))));
    let mouse = Rc::new(RefCell::new(input::MouseState {
        x: center.x,
        y: center.y,
    }));

    wire_canvas_resize(&canvas, state.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas,
        state: state.clone(),
        mouse: mouse.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ctx,
        state,
        mouse,
        frame_count: 0,
        prev_pointer: center,
        interval_start: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    log::info!("[init] canvas {}x{}", w, h);
    Ok(())
}
