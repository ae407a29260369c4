pub mod components;
pub mod systems;

use crate::core::sets::TickSet;
use crate::environment::systems::*;
use bevy::prelude::*;

/// Deep-water blue used for the clear colour, fog and loading overlay
pub const WATER_COLOR: Color = Color::srgb(10.0 / 255.0, 14.0 / 255.0, 26.0 / 255.0);

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(WATER_COLOR))
            .add_systems(Startup, (spawn_lights, spawn_ocean, spawn_particles))
            .add_systems(
                Update,
                (animate_ocean, drift_particles, orbit_glow_lights).in_set(TickSet::Simulate),
            );
    }
}
