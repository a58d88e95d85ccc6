// Host-side integration tests for the particle system controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effect {
    pub mod config {
        include!("../src/effect/config.rs");
    }
    pub mod particle {
        include!("../src/effect/particle.rs");
    }
    pub mod system {
        include!("../src/effect/system.rs");
    }
}

use effect::config::*;
use effect::system::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const VIEWPORT: Vec2 = Vec2::new(200.0, 100.0);
const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone, Default)]
struct RecordingPlayer(Rc<RefCell<Vec<Clip>>>);

impl SoundPlayer for RecordingPlayer {
    fn play(&self, clip: Clip) {
        self.0.borrow_mut().push(clip);
    }
}

fn config_with_count(count: usize) -> EffectConfig {
    let mut cfg = EffectConfig::default();
    cfg.particles.count = count;
    cfg
}

fn make_system(count: usize, seed: u64) -> (ParticleSystem, Rc<RefCell<Vec<Clip>>>) {
    let player = RecordingPlayer::default();
    let played = player.0.clone();
    let system =
        ParticleSystem::with_seed(config_with_count(count), VIEWPORT, Box::new(player), seed)
            .unwrap();
    (system, played)
}

fn grid_targets(n: usize) -> Vec<Vec2> {
    (0..n)
        .map(|i| Vec2::new(20.0 + (i % 16) as f32 * 10.0, 30.0 + (i / 16) as f32 * 10.0))
        .collect()
}

/// With no targets every particle already sits on its own target, so forming
/// completes on the first forming frame.
fn drive_to_interactive(system: &mut ParticleSystem) -> Vec<EffectEvent> {
    let mut events = Vec::new();
    let timing = system.config().timing.clone();
    system.update(timing.form_delay, &mut events);
    system.update(FRAME, &mut events);
    system.update(timing.explosion_duration, &mut events);
    assert_eq!(system.phase(), Phase::Interactive);
    events
}

#[test]
fn starts_idle_with_scattered_particles() {
    let (system, played) = make_system(300, 1);
    assert!(matches!(system.phase(), Phase::Idle { .. }));
    assert_eq!(system.particles().len(), 300);
    for p in system.particles() {
        assert!(p.position.x >= -VIEWPORT.x && p.position.x <= 2.0 * VIEWPORT.x);
        assert!(p.position.y >= -VIEWPORT.y && p.position.y <= 2.0 * VIEWPORT.y);
        assert_eq!(p.target, p.position);
    }
    assert!(played.borrow().is_empty());
}

#[test]
fn idle_waits_for_form_delay_without_moving() {
    let (mut system, _) = make_system(50, 2);
    let before: Vec<Vec2> = system.particles().iter().map(|p| p.position).collect();
    let mut events = Vec::new();

    system.update(Duration::from_millis(999), &mut events);
    assert!(matches!(system.phase(), Phase::Idle { .. }));
    assert!(events.is_empty());
    let after: Vec<Vec2> = system.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);

    system.update(Duration::from_millis(1), &mut events);
    assert_eq!(system.phase(), Phase::Forming);
    assert_eq!(events, vec![EffectEvent::FormingStarted]);
}

#[test]
fn forming_assigns_targets_by_index() {
    let (mut system, _) = make_system(100, 3);
    let targets = grid_targets(60);
    system.set_targets(targets.clone());
    // Not yet assigned while idle
    assert_ne!(system.particles()[0].target, targets[0]);

    let mut events = Vec::new();
    system.update(system.config().timing.form_delay, &mut events);
    for (p, t) in system.particles().iter().zip(targets.iter()) {
        assert_eq!(p.target, *t);
    }
    // Surplus particles keep their own spawn point
    for p in &system.particles()[60..] {
        assert_eq!(p.target, p.position);
    }
}

#[test]
fn forming_converges_then_explodes_once() {
    let (mut system, played) = make_system(120, 4);
    system.set_targets(grid_targets(120));
    let threshold = system.config().timing.form_threshold;

    let mut events = Vec::new();
    system.update(system.config().timing.form_delay, &mut events);
    events.clear();

    let mut frames = 0;
    while system.phase() == Phase::Forming {
        system.update(FRAME, &mut events);
        frames += 1;
        assert!(frames < 2000, "particles never converged");
    }

    assert!(matches!(system.phase(), Phase::Exploding { .. }));
    assert_eq!(events, vec![EffectEvent::TextFormed]);
    assert_eq!(*played.borrow(), vec![Clip::Explosion]);
    for p in system.particles() {
        assert!(p.distance_to_target() < threshold);
    }
}

#[test]
fn exploding_turns_interactive_after_duration() {
    let (mut system, _) = make_system(40, 5);
    let mut events = Vec::new();
    system.update(system.config().timing.form_delay, &mut events);
    system.update(FRAME, &mut events);
    assert!(matches!(system.phase(), Phase::Exploding { .. }));
    events.clear();

    system.update(FRAME, &mut events);
    for p in system.particles() {
        assert!(p.velocity.length() > 0.0, "explosion should launch every particle");
    }

    let left = system.config().timing.explosion_duration - FRAME - Duration::from_millis(1);
    system.update(left, &mut events);
    assert!(matches!(system.phase(), Phase::Exploding { .. }));
    system.update(Duration::from_millis(1), &mut events);
    assert_eq!(system.phase(), Phase::Interactive);
    assert_eq!(events, vec![EffectEvent::InteractiveStarted]);
}

#[test]
fn clicks_are_ignored_until_interactive() {
    let (mut system, played) = make_system(30, 6);
    assert!(!system.handle_click(Vec2::new(50.0, 50.0)));
    assert_eq!(system.particles().len(), 30);
    assert!(played.borrow().is_empty());

    drive_to_interactive(&mut system);
    played.borrow_mut().clear();
    assert!(system.handle_click(Vec2::new(50.0, 50.0)));
    let burst = system.config().timing.click_burst_count;
    assert_eq!(system.particles().len(), 30 + burst);
    assert_eq!(*played.borrow(), vec![Clip::Click]);
}

#[test]
fn burst_adds_exactly_n_particles_that_fly_apart() {
    let (mut system, _) = make_system(20, 7);
    drive_to_interactive(&mut system);

    let at = Vec2::new(120.0, 40.0);
    let n = 37;
    system.spawn_burst(at, n);
    assert_eq!(system.particles().len(), 20 + n);
    for p in &system.particles()[20..] {
        assert_eq!(p.position, at);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    let mut events = Vec::new();
    system.update(FRAME, &mut events);
    let max_speed = system.config().particles.max_speed;
    for p in &system.particles()[20..] {
        assert!(p.velocity.length() > 0.0);
        assert!(p.velocity.length() <= max_speed + 1e-4);
    }
}

#[test]
fn interactive_invariants_hold_over_many_frames() {
    let (mut system, _) = make_system(200, 8);
    drive_to_interactive(&mut system);
    system.spawn_burst(Vec2::new(100.0, 50.0), 50);

    let mut events = Vec::new();
    let max_speed = system.config().particles.max_speed;
    for i in 0..300 {
        let t = i as f32 * 0.05;
        system.set_cursor(Some(Vec2::new(100.0 + 60.0 * t.cos(), 50.0 + 30.0 * t.sin())));
        system.update(FRAME, &mut events);
        for p in system.particles() {
            assert!(p.velocity.length() <= max_speed + 1e-4);
            assert!(p.position.x >= 0.0 && p.position.x < VIEWPORT.x);
            assert!(p.position.y >= 0.0 && p.position.y < VIEWPORT.y);
        }
    }
    assert!(events.is_empty());
}

#[test]
fn resize_changes_wrap_bounds() {
    let (mut system, _) = make_system(100, 9);
    drive_to_interactive(&mut system);
    let small = Vec2::new(50.0, 40.0);
    system.resize(small);
    assert_eq!(system.viewport(), small);

    let mut events = Vec::new();
    system.update(FRAME, &mut events);
    for p in system.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < small.x);
        assert!(p.position.y >= 0.0 && p.position.y < small.y);
    }
}

#[test]
fn retargeting_while_forming_applies_immediately() {
    let (mut system, _) = make_system(64, 10);
    system.set_targets(grid_targets(64));
    let mut events = Vec::new();
    system.update(system.config().timing.form_delay, &mut events);
    assert_eq!(system.phase(), Phase::Forming);

    let moved: Vec<Vec2> = grid_targets(64)
        .into_iter()
        .map(|t| t + Vec2::new(5.0, 5.0))
        .collect();
    system.set_targets(moved.clone());
    assert_eq!(system.targets(), moved.as_slice());
    for (p, t) in system.particles().iter().zip(moved.iter()) {
        assert_eq!(p.target, *t);
    }
}

#[test]
fn shorter_retarget_releases_surplus_particles() {
    let (mut system, _) = make_system(64, 11);
    system.set_targets(grid_targets(64));
    let mut events = Vec::new();
    system.update(system.config().timing.form_delay, &mut events);
    system.update(FRAME, &mut events);
    assert_eq!(system.phase(), Phase::Forming);

    let fewer = grid_targets(10);
    system.set_targets(fewer.clone());
    for (p, t) in system.particles().iter().zip(fewer.iter()) {
        assert_eq!(p.target, *t);
    }
    for p in &system.particles()[10..] {
        assert_eq!(p.target, p.position);
    }

    let mut frames = 0;
    while system.phase() == Phase::Forming {
        system.update(FRAME, &mut events);
        frames += 1;
        assert!(frames < 2000, "particles never converged");
    }
}

#[test]
fn tight_form_threshold_is_rejected_before_it_can_stall() {
    let mut cfg = config_with_count(50);
    cfg.timing.form_threshold = 0.5;
    let result = ParticleSystem::with_seed(cfg, VIEWPORT, Box::new(SilentPlayer), 1);
    assert!(matches!(result, Err(ConfigError::ThresholdBelowSnap { .. })));
}

#[test]
fn nan_size_range_is_rejected_instead_of_panicking() {
    let mut cfg = config_with_count(50);
    cfg.particles.size_max = f32::NAN;
    let result = ParticleSystem::with_seed(cfg, VIEWPORT, Box::new(SilentPlayer), 1);
    assert!(matches!(
        result,
        Err(ConfigError::InvertedRange { name: "particle size", .. })
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = EffectConfig::default();
    cfg.text.sampling_stride = 0;
    let result = ParticleSystem::with_seed(cfg, VIEWPORT, Box::new(SilentPlayer), 1);
    assert!(matches!(result, Err(ConfigError::ZeroStride)));
}

#[test]
fn cursor_round_trips() {
    let (mut system, _) = make_system(1, 12);
    assert_eq!(system.cursor(), None);
    system.set_cursor(Some(Vec2::new(3.0, 4.0)));
    assert_eq!(system.cursor(), Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn phase_names() {
    assert_eq!(Phase::Idle { remaining: Duration::ZERO }.name(), "idle");
    assert_eq!(Phase::Forming.name(), "forming");
    assert_eq!(Phase::Exploding { remaining: Duration::ZERO }.name(), "exploding");
    assert_eq!(Phase::Interactive.name(), "interactive");
}
