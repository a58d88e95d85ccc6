use super::config::{ConfigError, EffectConfig};
use super::particle::{FrameEnv, Particle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Global animation phase. Timed phases carry their own countdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle { remaining: Duration },
    Forming,
    Exploding { remaining: Duration },
    Interactive,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle { .. } => "idle",
            Phase::Forming => "forming",
            Phase::Exploding { .. } => "exploding",
            Phase::Interactive => "interactive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectEvent {
    FormingStarted,
    TextFormed,
    InteractiveStarted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    Explosion,
    Click,
}

impl Clip {
    pub const ALL: [Clip; 2] = [Clip::Explosion, Clip::Click];

    pub fn name(self) -> &'static str {
        match self {
            Clip::Explosion => "explosion",
            Clip::Click => "click",
        }
    }
}

/// Fire-and-forget sound output. Implementations must not report failures
/// back to the caller.
pub trait SoundPlayer {
    fn play(&self, clip: Clip);
}

/// Player used when no audio backend is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _clip: Clip) {}
}

/// Owns every piece of effect state and drives the phase machine.
pub struct ParticleSystem {
    config: EffectConfig,
    particles: Vec<Particle>,
    targets: Vec<Vec2>,
    phase: Phase,
    cursor: Option<Vec2>,
    viewport: Vec2,
    rng: StdRng,
    sound: Box<dyn SoundPlayer>,
}

impl ParticleSystem {
    pub fn new(
        config: EffectConfig,
        viewport: Vec2,
        sound: Box<dyn SoundPlayer>,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, sound, StdRng::from_entropy())
    }

    pub fn with_seed(
        config: EffectConfig,
        viewport: Vec2,
        sound: Box<dyn SoundPlayer>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, sound, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: EffectConfig,
        viewport: Vec2,
        sound: Box<dyn SoundPlayer>,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        // Scatter over a 3x3 viewport-sized area so particles fly in from off-screen
        let particles = (0..config.particles.count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.gen_range(-viewport.x..=viewport.x * 2.0),
                    rng.gen_range(-viewport.y..=viewport.y * 2.0),
                );
                Particle::new(pos, pos, &config.particles, &mut rng)
            })
            .collect();
        let phase = Phase::Idle {
            remaining: config.timing.form_delay,
        };
        Ok(Self {
            config,
            particles,
            targets: Vec::new(),
            phase,
            cursor: None,
            viewport,
            rng,
            sound,
        })
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<Vec2>) {
        self.cursor = cursor;
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Replace the target list. Targets are handed to particles right away
    /// while forming, otherwise when forming starts.
    pub fn set_targets(&mut self, targets: Vec<Vec2>) {
        self.targets = targets;
        if self.phase == Phase::Forming {
            self.assign_targets();
        }
    }

    /// Advance every particle by `dt` under the current phase, then apply
    /// any phase transition that became due.
    pub fn update(&mut self, dt: Duration, events: &mut Vec<EffectEvent>) {
        let env = FrameEnv {
            dt_factor: dt.as_secs_f32() * self.config.particles.target_fps,
            cursor: self.cursor,
            viewport: self.viewport,
        };
        let active = self.particles.iter_mut().filter(|p| p.active);
        match self.phase {
            Phase::Idle { .. } => {}
            Phase::Forming => {
                for p in active {
                    p.update_forming(&env, &self.config.particles);
                }
            }
            Phase::Exploding { .. } => {
                for p in active {
                    p.update_exploding(&env, &self.config.particles, &mut self.rng);
                }
            }
            Phase::Interactive => {
                for p in active {
                    p.update_interactive(&env, &self.config, &mut self.rng);
                }
            }
        }

        if let Some(next) = self.due_transition(dt) {
            self.enter(next, events);
        }
    }

    /// Add `count` particles at `at`; each receives its explosion velocity on
    /// the next update.
    pub fn spawn_burst(&mut self, at: Vec2, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::new(at, at, &self.config.particles, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Pointer click. Only bursts once the effect is interactive.
    pub fn handle_click(&mut self, at: Vec2) -> bool {
        if self.phase != Phase::Interactive {
            return false;
        }
        self.spawn_burst(at, self.config.timing.click_burst_count);
        self.sound.play(Clip::Click);
        true
    }

    /// Hand targets out by index; particles without one hold their position.
    fn assign_targets(&mut self) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.target = self.targets.get(i).copied().unwrap_or(p.position);
        }
    }

    fn due_transition(&mut self, dt: Duration) -> Option<Phase> {
        match &mut self.phase {
            Phase::Idle { remaining } => {
                *remaining = remaining.saturating_sub(dt);
                remaining.is_zero().then_some(Phase::Forming)
            }
            Phase::Forming => {
                let threshold = self.config.timing.form_threshold;
                let formed = self
                    .particles
                    .iter()
                    .filter(|p| p.active)
                    .all(|p| p.is_near_target(threshold));
                formed.then_some(Phase::Exploding {
                    remaining: self.config.timing.explosion_duration,
                })
            }
            Phase::Exploding { remaining } => {
                *remaining = remaining.saturating_sub(dt);
                remaining.is_zero().then_some(Phase::Interactive)
            }
            Phase::Interactive => None,
        }
    }

    fn enter(&mut self, next: Phase, events: &mut Vec<EffectEvent>) {
        log::info!("[phase] {} -> {}", self.phase.name(), next.name());
        match next {
            Phase::Idle { .. } => {}
            Phase::Forming => {
                self.assign_targets();
                events.push(EffectEvent::FormingStarted);
            }
            Phase::Exploding { .. } => {
                self.sound.play(Clip::Explosion);
                events.push(EffectEvent::TextFormed);
            }
            Phase::Interactive => events.push(EffectEvent::InteractiveStarted),
        }
        self.phase = next;
    }
}
