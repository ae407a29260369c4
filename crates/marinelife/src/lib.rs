pub mod config;
pub mod constants;
pub mod creature;
pub mod effects;
pub mod info;
pub mod lighting;
pub mod motion;
pub mod particles;
pub mod population;
pub mod simulation;
pub mod tools;

pub use config::{ConfigError, SceneConfig};
pub use creature::{Body, Creature, CreatureId, CreatureKind, Pose, Swim};
pub use motion::Tick;
pub use simulation::Simulation;
