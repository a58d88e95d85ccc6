use crate::constants::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("sampling stride must be at least 1")]
    ZeroStride,
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("form speed must be in (0, 1], got {0}")]
    FormSpeed(f32),
    #[error("form threshold {threshold} must exceed the snap distance {snap}")]
    ThresholdBelowSnap { threshold: f32, snap: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextConfig {
    pub fallback_text: String,
    pub font: String,
    pub color: String,
    pub sampling_stride: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub hue_min: f32,
    pub hue_max: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub max_speed: f32,
    pub form_speed: f32,
    pub explosion_speed_min: f32,
    pub explosion_speed_max: f32,
    pub drift_strength: f32,
    pub target_fps: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub radius: f32,
    pub repel_strength: f32,
    pub repel_range: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingConfig {
    pub form_delay: Duration,
    pub explosion_duration: Duration,
    pub form_threshold: f32,
    pub click_burst_count: usize,
}

/// Full tuning of one text effect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectConfig {
    pub text: TextConfig,
    pub particles: ParticleConfig,
    pub cursor: CursorConfig,
    pub timing: TimingConfig,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            fallback_text: TEXT_FALLBACK.to_string(),
            font: TEXT_FONT.to_string(),
            color: TEXT_COLOR.to_string(),
            sampling_stride: SAMPLING_STRIDE,
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            hue_min: PARTICLE_HUE_MIN,
            hue_max: PARTICLE_HUE_MAX,
            saturation: PARTICLE_SATURATION,
            lightness: PARTICLE_LIGHTNESS,
            max_speed: MAX_SPEED,
            form_speed: FORM_SPEED,
            explosion_speed_min: EXPLOSION_SPEED_MIN,
            explosion_speed_max: EXPLOSION_SPEED_MAX,
            drift_strength: DRIFT_STRENGTH,
            target_fps: TARGET_FPS,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            radius: CURSOR_RADIUS,
            repel_strength: CURSOR_REPEL_STRENGTH,
            repel_range: CURSOR_REPEL_RANGE,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            form_delay: Duration::from_millis(FORM_DELAY_MS),
            explosion_duration: Duration::from_millis(EXPLOSION_DURATION_MS),
            form_threshold: FORM_THRESHOLD,
            click_burst_count: CLICK_BURST_COUNT,
        }
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    // Sampling needs finite bounds; NaN fails every comparison
    if !(min.is_finite() && max.is_finite() && min <= max) {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}

impl EffectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.sampling_stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        let p = &self.particles;
        check_range("particle size", p.size_min, p.size_max)?;
        check_range("particle hue", p.hue_min, p.hue_max)?;
        check_range(
            "explosion speed",
            p.explosion_speed_min,
            p.explosion_speed_max,
        )?;
        check_positive("explosion speed", p.explosion_speed_min)?;
        check_positive("max speed", p.max_speed)?;
        check_positive("target fps", p.target_fps)?;
        check_positive("cursor radius", self.cursor.radius)?;
        check_positive("form threshold", self.timing.form_threshold)?;
        // Forming stops easing at the snap distance, so a tighter threshold never fires
        if self.timing.form_threshold <= FORM_SNAP_DISTANCE {
            return Err(ConfigError::ThresholdBelowSnap {
                threshold: self.timing.form_threshold,
                snap: FORM_SNAP_DISTANCE,
            });
        }
        if p.form_speed.is_nan() || p.form_speed <= 0.0 || p.form_speed > 1.0 {
            return Err(ConfigError::FormSpeed(p.form_speed));
        }
        Ok(())
    }
}
