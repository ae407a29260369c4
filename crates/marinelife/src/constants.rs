pub const DEFAULT_CONFIG_PATH: &str = "reefscape_config.toml";

pub const FLIPPER_COUNT: usize = 4;

// Soft volume the swimmers roam in
pub const SHARK_HORIZONTAL_BOUND: f32 = 500.0;
pub const SHARK_DEPTH_MIN: f32 = -150.0;
pub const SHARK_DEPTH_MAX: f32 = 100.0;
pub const HORIZONTAL_BOUND: f32 = 600.0;
pub const DEPTH_MIN: f32 = -200.0;
pub const DEPTH_MAX: f32 = 150.0;

/// Heading jitter added on top of a half turn when a swimmer reverses course
pub const REVERSAL_JITTER: f32 = 0.5;

pub const COHESION_RADIUS: f32 = 100.0;

/// Rest height of the wave plane; seaweed stalks hang from it
pub const OCEAN_PLANE_Y: f32 = -50.0;
