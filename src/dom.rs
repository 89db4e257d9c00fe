use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resize the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
        (w_px, h_px)
    } else {
        (canvas.width().max(1), canvas.height().max(1))
    }
}

/// Fetch the canvas 2D context.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let obj: js_sys::Object = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?;
    obj.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Hide the native cursor over the canvas; the sketch draws its own.
pub fn hide_cursor(canvas: &web::HtmlCanvasElement) {
    _ = canvas.style().set_property("cursor", "none");
}
