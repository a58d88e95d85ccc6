// Effect tuning constants.
//
// These constants express intended behavior (e.g., speeds, radii, delays)
// and feed `EffectConfig::default()`, keeping magic numbers out of the code.

// DOM wiring
pub const CANVAS_ID: &str = "particle-canvas";
pub const LABEL_ID: &str = "text-effect";

// Text rasterization
pub const TEXT_FALLBACK: &str = "HELLO WORLD";
pub const TEXT_FONT: &str = "bold 70px Arial";
pub const TEXT_COLOR: &str = "#ffffff";
pub const SAMPLING_STRIDE: u32 = 6; // pixel spacing of the sampling grid

// Particle population and look
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 5.0;
pub const PARTICLE_HUE_MIN: f32 = 20.0; // orange
pub const PARTICLE_HUE_MAX: f32 = 40.0; // yellow
pub const PARTICLE_SATURATION: f32 = 100.0;
pub const PARTICLE_LIGHTNESS: f32 = 65.0;

// Motion (per reference frame, scaled by dt * TARGET_FPS)
pub const MAX_SPEED: f32 = 4.0;
pub const FORM_SPEED: f32 = 0.05; // fraction of remaining distance per frame
pub const FORM_SNAP_DISTANCE: f32 = 1.0; // below this, forming stops easing
pub const EXPLOSION_SPEED_MIN: f32 = 3.0;
pub const EXPLOSION_SPEED_MAX: f32 = 8.0;
pub const DRIFT_STRENGTH: f32 = 0.2;
pub const TARGET_FPS: f32 = 60.0;

// Cursor repulsion
pub const CURSOR_RADIUS: f32 = 150.0;
pub const CURSOR_REPEL_STRENGTH: f32 = 0.06;
pub const CURSOR_REPEL_RANGE: f32 = 3.0;

// Phase timing
pub const FORM_DELAY_MS: u64 = 1000; // idle time before particles start forming
pub const EXPLOSION_DURATION_MS: u64 = 800;
pub const FORM_THRESHOLD: f32 = 8.0; // distance at which a particle counts as formed
pub const CLICK_BURST_COUNT: usize = 150;

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / stalls

// Audio clips
pub const AUDIO_EXPLOSION_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-whoosh-whoosh-3000.mp3";
pub const AUDIO_CLICK_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-small-impact-674.mp3";
