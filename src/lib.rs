#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LABEL_ID};
use crate::effect::{EffectConfig, ParticleSystem, SilentPlayer, SoundPlayer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
pub mod effect;
mod events;
mod frame;
mod input;
mod label;
mod raster;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("text-particles starting");

    let loading = dom::window_document()
        .map(|d| d.ready_state() == "loading")
        .unwrap_or(false);
    if loading {
        dom::add_window_listener("DOMContentLoaded", |_ev: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn build_sound() -> Box<dyn SoundPlayer> {
    match audio::HtmlAudioPlayer::new() {
        Ok(player) => Box::new(player),
        Err(e) => {
            log::warn!("[audio] disabled: {:?}", e);
            Box::new(SilentPlayer)
        }
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let label_el: web::HtmlElement = dom::element_by_id(&document, LABEL_ID)?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let viewport = dom::sync_canvas_to_window(&canvas);
    let mut system = ParticleSystem::new(EffectConfig::default(), viewport, build_sound())?;

    let text = label::text(&label_el, &system.config().text.fallback_text);
    let targets = raster::text_targets(
        &document,
        &text,
        system.config(),
        viewport,
        &mut rand::thread_rng(),
    )?;
    system.set_targets(targets);
    log::info!(
        "[init] viewport={}x{} particles={} targets={}",
        viewport.x,
        viewport.y,
        system.particles().len(),
        system.targets().len()
    );

    let system = Rc::new(RefCell::new(system));
    events::wire_input_handlers(events::InputWiring {
        document,
        canvas,
        label: label_el.clone(),
        system: system.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        system,
        ctx,
        label: label_el,
        last_instant: Instant::now(),
        events: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
