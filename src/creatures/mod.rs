pub mod components;
pub mod meshes;
pub mod resources;
pub mod systems;

use crate::core::sets::TickSet;
use crate::creatures::systems::*;
use bevy::prelude::*;

pub struct CreaturesPlugin;

impl Plugin for CreaturesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_reef)
            .add_systems(Update, advance_reef.in_set(TickSet::Simulate))
            .add_systems(
                Update,
                (sync_creature_transforms, sync_flippers).in_set(TickSet::Sync),
            );
    }
}
