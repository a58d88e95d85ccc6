use crate::effect::Particle;
use glam::Vec2;
use web_sys as web;

/// Clear the canvas and draw every active particle as a filled square.
pub fn draw_particles(ctx: &web::CanvasRenderingContext2d, viewport: Vec2, particles: &[Particle]) {
    ctx.clear_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);
    for p in particles.iter().filter(|p| p.active) {
        ctx.set_fill_style_str(&p.fill);
        let size = p.size as f64;
        ctx.fill_rect(p.position.x as f64, p.position.y as f64, size, size);
    }
}
