use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scene config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode default scene config: {0}")]
    Defaults(#[from] toml::ser::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Everything that shapes the scene: creature counts, speed ranges, motion
/// tuning, camera and effect timings.
///
/// A config file is layered over the defaults key by key, so it only needs
/// the values it wants to change. Arrays such as `fish.schools` are replaced
/// as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed RNG seed; a fresh one is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub timing: TimingConfig,
    pub sharks: SwimmerConfig,
    pub fish: FishConfig,
    pub turtles: TurtleConfig,
    pub jellyfish: JellyfishConfig,
    pub seaweed: SeaweedConfig,
    pub particles: ParticleConfig,
    pub camera: CameraConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// When false every motion increment is "per frame", so creatures move
    /// faster on high refresh rate displays.
    pub frame_rate_independent: bool,
    /// Frame rate the per-frame increments were tuned for
    pub reference_fps: f32,
}

/// Steering and boundary tuning shared by all swimming kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    /// Per tick probability of a random heading change
    pub turn_chance: f32,
    /// Width of the uniform heading change window, centred on zero
    pub turn_spread: f32,
    pub reversal_jitter: f32,
    pub horizontal_bound: f32,
    pub depth_min: f32,
    pub depth_max: f32,
    pub wobble_frequency: f32,
    pub wobble_position_scale: f32,
    pub wobble_amplitude: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwimmerConfig {
    pub count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Vertical drift is drawn from `[-spread / 2, spread / 2]`
    pub vertical_speed_spread: f32,
    pub spawn_half_extent: f32,
    pub spawn_depth_min: f32,
    pub spawn_depth_max: f32,
    pub motion: MotionProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub species: String,
    pub count: usize,
    /// 0xRRGGBB
    pub color: u32,
    pub body_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishConfig {
    pub speed_min: f32,
    pub speed_max: f32,
    pub vertical_speed_spread: f32,
    pub cohesion_radius: f32,
    pub center_half_extent: f32,
    pub center_depth_min: f32,
    pub center_depth_max: f32,
    pub ring_radius_min: f32,
    pub ring_radius_max: f32,
    pub ring_depth_spread: f32,
    pub motion: MotionProfile,
    pub schools: Vec<SchoolConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    pub swim: SwimmerConfig,
    pub flipper_frequency: f32,
    pub flipper_amplitude: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JellyfishConfig {
    pub swim: SwimmerConfig,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
    pub pulse_frequency: f32,
    pub pulse_amplitude: f32,
    /// Yaw added every tick, independent of the heading
    pub yaw_drift: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeaweedConfig {
    pub count: usize,
    pub segments: usize,
    pub height_min: f32,
    pub height_max: f32,
    pub spawn_half_extent: f32,
    /// Height the stalks hang from
    pub anchor_y: f32,
    pub sway_min: f32,
    pub sway_max: f32,
    pub sway_x_frequency: f32,
    pub sway_z_frequency: f32,
    pub sway_z_ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub half_extent: f32,
    pub floor: f32,
    pub spawn_height: f32,
    pub ceiling: f32,
    pub drift: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub start: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Scales the pointer's offset from the window centre into world units
    pub pointer_sensitivity: f32,
    /// Fraction of the remaining distance covered every tick
    pub easing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub ripple_lifetime: f64,
    pub ripple_growth: f32,
    pub ripple_opacity: f32,
    pub info_lifetime: f64,
    pub loading_delay: f32,
    pub loading_fade: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            timing: TimingConfig::default(),
            sharks: SwimmerConfig::sharks(),
            fish: FishConfig::default(),
            turtles: TurtleConfig::default(),
            jellyfish: JellyfishConfig::default(),
            seaweed: SeaweedConfig::default(),
            particles: ParticleConfig::default(),
            camera: CameraConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_rate_independent: false,
            reference_fps: 60.0,
        }
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            turn_chance: 0.01,
            turn_spread: 0.3,
            reversal_jitter: REVERSAL_JITTER,
            horizontal_bound: HORIZONTAL_BOUND,
            depth_min: DEPTH_MIN,
            depth_max: DEPTH_MAX,
            wobble_frequency: 0.0,
            wobble_position_scale: 0.0,
            wobble_amplitude: 0.0,
        }
    }
}

impl MotionProfile {
    pub fn shark() -> Self {
        Self {
            turn_chance: 0.01,
            turn_spread: 0.3,
            horizontal_bound: SHARK_HORIZONTAL_BOUND,
            depth_min: SHARK_DEPTH_MIN,
            depth_max: SHARK_DEPTH_MAX,
            wobble_frequency: 2.0,
            wobble_position_scale: 0.01,
            wobble_amplitude: 0.1,
            ..Self::default()
        }
    }

    pub fn school_fish() -> Self {
        Self {
            turn_chance: 0.02,
            turn_spread: 0.5,
            wobble_frequency: 3.0,
            wobble_position_scale: 0.02,
            wobble_amplitude: 0.2,
            ..Self::default()
        }
    }

    pub fn turtle() -> Self {
        Self {
            turn_chance: 0.005,
            turn_spread: 0.2,
            ..Self::default()
        }
    }

    pub fn jellyfish() -> Self {
        Self {
            turn_chance: 0.008,
            turn_spread: 0.4,
            ..Self::default()
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check_probability(field, self.turn_chance)?;
        check_non_negative(field, self.turn_spread)?;
        check_non_negative(field, self.reversal_jitter)?;
        check_positive(field, self.horizontal_bound)?;
        check_range(field, self.depth_min, self.depth_max)?;
        check_all_finite(
            field,
            &[self.wobble_frequency, self.wobble_position_scale, self.wobble_amplitude],
        )
    }
}

impl SwimmerConfig {
    pub fn sharks() -> Self {
        Self {
            count: 5,
            speed_min: 0.5,
            speed_max: 1.0,
            vertical_speed_spread: 0.1,
            spawn_half_extent: 500.0,
            spawn_depth_min: -100.0,
            spawn_depth_max: 100.0,
            motion: MotionProfile::shark(),
        }
    }

    pub fn turtles() -> Self {
        Self {
            count: 3,
            speed_min: 0.3,
            speed_max: 0.5,
            vertical_speed_spread: 0.05,
            spawn_half_extent: 400.0,
            spawn_depth_min: -50.0,
            spawn_depth_max: 50.0,
            motion: MotionProfile::turtle(),
        }
    }

    pub fn jellyfish() -> Self {
        Self {
            count: 8,
            speed_min: 0.2,
            speed_max: 0.5,
            vertical_speed_spread: 0.0,
            spawn_half_extent: 300.0,
            spawn_depth_min: -75.0,
            spawn_depth_max: 75.0,
            motion: MotionProfile::jellyfish(),
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check_range(field, self.speed_min, self.speed_max)?;
        check_non_negative(field, self.vertical_speed_spread)?;
        check_non_negative(field, self.spawn_half_extent)?;
        check_range(field, self.spawn_depth_min, self.spawn_depth_max)?;
        self.motion.validate(field)
    }
}

impl Default for SwimmerConfig {
    fn default() -> Self {
        Self::sharks()
    }
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            species: "School Fish".to_string(),
            count: 30,
            color: 0x4a90e2,
            body_size: 3.0,
        }
    }
}

impl SchoolConfig {
    pub fn new(species: &str, count: usize, color: u32, body_size: f32) -> Self {
        Self {
            species: species.to_string(),
            count,
            color,
            body_size,
        }
    }

    /// `color` split into sRGB bytes
    pub fn rgb(&self) -> [u8; 3] {
        crate::lighting::rgb(self.color)
    }
}

impl Default for FishConfig {
    fn default() -> Self {
        Self {
            speed_min: 1.0,
            speed_max: 3.0,
            vertical_speed_spread: 0.2,
            cohesion_radius: COHESION_RADIUS,
            center_half_extent: 300.0,
            center_depth_min: -50.0,
            center_depth_max: 50.0,
            ring_radius_min: 20.0,
            ring_radius_max: 50.0,
            ring_depth_spread: 20.0,
            motion: MotionProfile::school_fish(),
            schools: vec![
                SchoolConfig::new("Tropical Fish", 50, 0x4a90e2, 3.0),
                SchoolConfig::new("Sea Bass", 30, 0x7ed321, 4.0),
                SchoolConfig::new("Angelfish", 40, 0xf5a623, 2.5),
            ],
        }
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            swim: SwimmerConfig::turtles(),
            flipper_frequency: 1.5,
            flipper_amplitude: 0.3,
        }
    }
}

impl Default for JellyfishConfig {
    fn default() -> Self {
        Self {
            swim: SwimmerConfig::jellyfish(),
            bob_frequency: 0.5,
            // matches the bobbing of the per-frame drift at 60 Hz
            bob_amplitude: 60.0,
            pulse_frequency: 2.0,
            pulse_amplitude: 0.1,
            yaw_drift: 0.005,
        }
    }
}

impl Default for SeaweedConfig {
    fn default() -> Self {
        Self {
            count: 15,
            segments: 8,
            height_min: 30.0,
            height_max: 70.0,
            spawn_half_extent: 500.0,
            anchor_y: OCEAN_PLANE_Y,
            sway_min: 0.1,
            sway_max: 0.2,
            sway_x_frequency: 0.5,
            sway_z_frequency: 0.3,
            sway_z_ratio: 0.7,
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            half_extent: 1000.0,
            floor: -200.0,
            spawn_height: 1000.0,
            ceiling: 500.0,
            drift: 0.1,
            opacity: 0.6,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start: [0.0, 100.0, 500.0],
            fov_degrees: 75.0,
            near: 1.0,
            far: 2000.0,
            pointer_sensitivity: 0.1,
            easing: 0.005,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ripple_lifetime: 1.0,
            ripple_growth: 20.0,
            ripple_opacity: 0.8,
            info_lifetime: 3.0,
            loading_delay: 2.0,
            loading_fade: 0.5,
        }
    }
}

impl SceneConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let overrides: toml::Table = toml::from_str(content)?;
        let mut merged = match toml::Value::try_from(SceneConfig::default())? {
            toml::Value::Table(table) => table,
            _ => toml::Table::new(),
        };
        merge_tables(&mut merged, overrides);

        let config: SceneConfig = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("timing.reference_fps", self.timing.reference_fps)?;

        self.sharks.validate("sharks")?;
        self.turtles.swim.validate("turtles.swim")?;
        self.jellyfish.swim.validate("jellyfish.swim")?;
        let turtles = &self.turtles;
        check_all_finite("turtles", &[turtles.flipper_frequency, turtles.flipper_amplitude])?;
        let jelly = &self.jellyfish;
        check_all_finite(
            "jellyfish",
            &[
                jelly.bob_frequency,
                jelly.bob_amplitude,
                jelly.pulse_frequency,
                jelly.pulse_amplitude,
                jelly.yaw_drift,
            ],
        )?;

        let fish = &self.fish;
        check_range("fish.speed", fish.speed_min, fish.speed_max)?;
        check_non_negative("fish.vertical_speed_spread", fish.vertical_speed_spread)?;
        check_positive("fish.cohesion_radius", fish.cohesion_radius)?;
        check_range("fish.center_depth", fish.center_depth_min, fish.center_depth_max)?;
        check_range("fish.ring_radius", fish.ring_radius_min, fish.ring_radius_max)?;
        check_all_finite("fish", &[fish.center_half_extent, fish.ring_depth_spread])?;
        fish.motion.validate("fish.motion")?;
        for school in &fish.schools {
            check_positive("fish.schools.body_size", school.body_size)?;
            if school.color > 0xff_ffff {
                return Err(ConfigError::Invalid {
                    field: "fish.schools.color",
                    reason: format!("{:#x} is not a 0xRRGGBB colour", school.color),
                });
            }
        }

        check_range("seaweed.height", self.seaweed.height_min, self.seaweed.height_max)?;
        check_range("seaweed.sway", self.seaweed.sway_min, self.seaweed.sway_max)?;
        let weed = &self.seaweed;
        check_all_finite(
            "seaweed",
            &[
                weed.spawn_half_extent,
                weed.anchor_y,
                weed.sway_x_frequency,
                weed.sway_z_frequency,
                weed.sway_z_ratio,
            ],
        )?;
        if self.seaweed.segments == 0 {
            return Err(ConfigError::Invalid {
                field: "seaweed.segments",
                reason: "a stalk needs at least one segment".to_string(),
            });
        }

        check_range("particles.depth", self.particles.floor, self.particles.ceiling)?;
        check_probability("particles.opacity", self.particles.opacity)?;
        let particles = &self.particles;
        check_all_finite(
            "particles",
            &[particles.half_extent, particles.spawn_height, particles.drift],
        )?;

        check_range("camera.clip", self.camera.near, self.camera.far)?;
        check_probability("camera.easing", self.camera.easing)?;
        check_all_finite("camera.start", &self.camera.start)?;
        check_all_finite(
            "camera",
            &[self.camera.fov_degrees, self.camera.pointer_sensitivity],
        )?;

        check_positive("effects.ripple_lifetime", self.effects.ripple_lifetime as f32)?;
        check_positive("effects.info_lifetime", self.effects.info_lifetime as f32)?;
        check_probability("effects.ripple_opacity", self.effects.ripple_opacity)?;
        check_finite("effects.ripple_growth", self.effects.ripple_growth)?;
        check_non_negative("effects.loading_delay", self.effects.loading_delay)?;
        check_non_negative("effects.loading_fade", self.effects.loading_fade)
    }
}

fn check_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    check_finite(field, min)?;
    check_finite(field, max)?;
    if min > max {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("minimum {min} is above maximum {max}"),
        });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is outside [0, 1]"),
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be positive"),
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must not be negative"),
        });
    }
    Ok(())
}

/// NaN fails every comparison, so it has to be rejected before them
fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    Ok(())
}

fn check_all_finite(field: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    values.iter().try_for_each(|value| check_finite(field, *value))
}

/// Overlays `overrides` onto `base`, descending into tables present in both
fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}
