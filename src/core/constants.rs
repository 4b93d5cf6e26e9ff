// Default tuning for the cyber globe. Every value here can be overridden via
// `GlobeConfig`; these are the visually tuned defaults.

// Point cloud
pub const DOT_COUNT_WIDE: usize = 600;
pub const DOT_COUNT_NARROW: usize = 200;
pub const MAX_DOT_COUNT: usize = 10_000;
pub const RADIUS_WIDE: f32 = 380.0;
pub const RADIUS_NARROW: f32 = 320.0;
pub const RADIUS_COMPACT: f32 = 280.0;

// Viewport breakpoints (CSS px)
pub const NARROW_VIEWPORT_PX: f32 = 768.0;
pub const COMPACT_VIEWPORT_PX: f32 = 400.0;

// Neighbor graph
pub const CONNECTION_DISTANCE: f32 = 95.0;
pub const MAX_NEIGHBORS: usize = 5;

// Signals
pub const MAX_SIGNALS_WIDE: usize = 60;
pub const MAX_SIGNALS_NARROW: usize = 30;
pub const SIGNAL_SPEED: f32 = 0.05; // progress per frame
pub const SIGNAL_SPAWN_PROBABILITY: f32 = 0.10; // per-frame Bernoulli trial
pub const PULSE_DECAY: f32 = 0.04; // per frame

// Rotation / projection
pub const ROTATION_STEP: f32 = 0.0015; // radians per frame
pub const FOCAL_DISTANCE: f32 = 500.0;
pub const MIN_PERSPECTIVE_DEPTH: f32 = 1e-3; // smallest usable focal + z
pub const CENTER_Y_FRACTION: f32 = 0.15; // globe centre sits high in the hero
pub const EDGE_VISIBILITY_SCALE: f32 = 0.25;

// Edges
pub const EDGE_LINE_WIDTH: f32 = 0.6;
pub const EDGE_ALPHA_OFFSET: f32 = 0.2;
pub const EDGE_ALPHA_GAIN: f32 = 0.7;
pub const EDGE_ALPHA_MIN: f32 = 0.1;
pub const EDGE_ALPHA_MAX: f32 = 0.85;
pub const EDGE_COLOR_NEAR: [u8; 3] = [148, 163, 184];
pub const EDGE_COLOR_FAR: [u8; 3] = [180, 200, 220];

// Signal particles
pub const SIGNAL_RADIUS: f32 = 2.0;
pub const SIGNAL_GLOW_BLUR: f32 = 8.0;
pub const SIGNAL_COLOR: [u8; 3] = [255, 255, 200];
pub const SIGNAL_GLOW_COLOR: [u8; 3] = [255, 215, 0];

// Dots
pub const DOT_RADIUS: f32 = 2.0;
pub const DOT_PULSE_RADIUS_GAIN: f32 = 4.0;
pub const DOT_ALPHA_OFFSET: f32 = 0.2;
pub const DOT_ALPHA_MIN: f32 = 0.3;
pub const DOT_COLOR: [u8; 3] = [255, 215, 0]; // gold
pub const DOT_PULSE_GREEN_GAIN: f32 = 40.0;
pub const DOT_PULSE_BLUE_GAIN: f32 = 200.0;
pub const DOT_GLOW_BLUR: f32 = 15.0; // scaled by projection scale
pub const DOT_GLOW_SCALE_MIN: f32 = 0.8;
pub const DOT_GLOW_PULSE_MIN: f32 = 0.1;

// Operator card glitch timing (milliseconds)
pub const GLITCH_FIRST_DELAY_MAX_MS: u64 = 2000;
pub const GLITCH_DURATION_MIN_MS: u64 = 50;
pub const GLITCH_DURATION_MAX_MS: u64 = 150;
pub const GLITCH_GAP_MIN_MS: u64 = 2000;
pub const GLITCH_GAP_MAX_MS: u64 = 5000;
pub const GLITCH_KINDS: u8 = 3;
