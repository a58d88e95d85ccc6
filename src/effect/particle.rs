use super::config::{EffectConfig, ParticleConfig};
use crate::constants::FORM_SNAP_DISTANCE;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// HSL color in CSS units (degrees, percent, percent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn to_css(self) -> String {
        format!(
            "hsl({:.1}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Per-frame context handed to the particle update rules.
#[derive(Clone, Copy, Debug)]
pub struct FrameEnv {
    /// Elapsed time expressed in reference frames (1.0 at the target fps).
    pub dt_factor: f32,
    pub cursor: Option<Vec2>,
    pub viewport: Vec2,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub target: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Hsl,
    /// `color` rendered once as a CSS fill style.
    pub fill: String,
    pub active: bool,
    /// Set until the particle receives its one-time explosion velocity.
    pub pending_launch: bool,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(
        position: Vec2,
        target: Vec2,
        cfg: &ParticleConfig,
        rng: &mut R,
    ) -> Self {
        let size = rng.gen_range(cfg.size_min..=cfg.size_max);
        let color = Hsl {
            hue: rng.gen_range(cfg.hue_min..=cfg.hue_max),
            saturation: cfg.saturation,
            lightness: cfg.lightness,
        };
        Self {
            position,
            target,
            velocity: Vec2::ZERO,
            size,
            color,
            fill: color.to_css(),
            active: true,
            pending_launch: true,
        }
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    #[inline]
    pub fn is_near_target(&self, threshold: f32) -> bool {
        self.distance_to_target() < threshold
    }

    /// Ease toward the target by a fixed fraction of the remaining offset.
    pub fn update_forming(&mut self, env: &FrameEnv, cfg: &ParticleConfig) {
        let offset = self.target - self.position;
        if offset.length() > FORM_SNAP_DISTANCE {
            let t = (cfg.form_speed * env.dt_factor).min(1.0);
            self.position += offset * t;
        }
    }

    pub fn update_exploding<R: Rng + ?Sized>(
        &mut self,
        env: &FrameEnv,
        cfg: &ParticleConfig,
        rng: &mut R,
    ) {
        self.launch(cfg, rng);
        self.position += self.velocity * env.dt_factor;
    }

    pub fn update_interactive<R: Rng + ?Sized>(
        &mut self,
        env: &FrameEnv,
        cfg: &EffectConfig,
        rng: &mut R,
    ) {
        self.launch(&cfg.particles, rng);

        if let Some(cursor) = env.cursor {
            let offset = self.position - cursor;
            let distance = offset.length();
            let radius = cfg.cursor.radius;
            if distance < radius {
                let away = if distance > f32::EPSILON {
                    offset / distance
                } else {
                    Vec2::from_angle(rng.gen_range(0.0..TAU))
                };
                let push = cfg.cursor.repel_strength * cfg.cursor.repel_range * (radius - distance);
                self.velocity += away * push * env.dt_factor;
            }
        }

        let drift = cfg.particles.drift_strength * env.dt_factor;
        self.velocity.x += (rng.gen::<f32>() - 0.5) * drift;
        self.velocity.y += (rng.gen::<f32>() - 0.5) * drift;
        self.velocity = self.velocity.clamp_length_max(cfg.particles.max_speed);

        self.position += self.velocity * env.dt_factor;
        self.position.x = wrap_coord(self.position.x, env.viewport.x);
        self.position.y = wrap_coord(self.position.y, env.viewport.y);
    }

    fn launch<R: Rng + ?Sized>(&mut self, cfg: &ParticleConfig, rng: &mut R) {
        if !self.pending_launch {
            return;
        }
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(cfg.explosion_speed_min..=cfg.explosion_speed_max);
        self.velocity = Vec2::from_angle(angle) * speed;
        self.pending_launch = false;
    }
}

/// Wrap `value` into `[0, extent)`. A degenerate extent collapses to 0.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
