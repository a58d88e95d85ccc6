use crate::dom;
use crate::effect::ParticleSystem;
use crate::input;
use crate::label;
use crate::raster;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub label: web::HtmlElement,
    pub system: Rc<RefCell<ParticleSystem>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_click(&w);
    wire_resize(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        w.system.borrow_mut().set_cursor(Some(pos));
    });
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("click", move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        if w.system.borrow_mut().handle_click(pos) {
            log::info!("[click] burst at ({:.0},{:.0})", pos.x, pos.y);
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("resize", move |_ev: web::Event| {
        let viewport = dom::sync_canvas_to_window(&w.canvas);
        let mut system = w.system.borrow_mut();
        system.resize(viewport);
        let text = label::text(&w.label, &system.config().text.fallback_text);
        match raster::text_targets(
            &w.document,
            &text,
            system.config(),
            viewport,
            &mut rand::thread_rng(),
        ) {
            Ok(targets) => system.set_targets(targets),
            Err(e) => log::error!("[resize] text sampling failed: {:?}", e),
        }
    });
}
