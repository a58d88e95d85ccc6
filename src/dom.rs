use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to the requested element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Attach a window-level listener for the page lifetime.
pub fn add_window_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(window) = web::window() {
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("[dom] {} listener error: {:?}", event, e);
        }
    }
    closure.forget();
}

/// Size the canvas backing store to the window and return the new viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (w, h) = web::window()
        .map(|w| (inner_dimension(w.inner_width()), inner_dimension(w.inner_height())))
        .unwrap_or((1, 1));
    canvas.set_width(w);
    canvas.set_height(h);
    Vec2::new(w as f32, h as f32)
}

fn inner_dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .unwrap_or(1)
        .max(1)
}
