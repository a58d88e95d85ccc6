use crate::constants::MAX_FRAME_DT_SEC;
use crate::effect::{EffectEvent, ParticleSystem};
use crate::label;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub system: Rc<RefCell<ParticleSystem>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub label: web::HtmlElement,
    pub last_instant: Instant,
    pub events: Vec<EffectEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = clamp_frame_dt(now - self.last_instant);
        self.last_instant = now;

        let mut system = self.system.borrow_mut();
        self.events.clear();
        system.update(dt, &mut self.events);

        for ev in &self.events {
            match ev {
                EffectEvent::TextFormed => label::reveal(&self.label),
                EffectEvent::FormingStarted | EffectEvent::InteractiveStarted => {}
            }
        }

        render::draw_particles(&self.ctx, system.viewport(), system.particles());
    }
}

#[inline]
pub fn clamp_frame_dt(dt: Duration) -> Duration {
    dt.min(Duration::from_secs_f32(MAX_FRAME_DT_SEC))
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
