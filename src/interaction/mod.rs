pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

use crate::core::sets::TickSet;
use crate::core::state::GameState;
use crate::interaction::events::CreatureClicked;
use crate::interaction::resources::ActiveEffects;
use crate::interaction::systems::*;
use bevy::prelude::*;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CreatureClicked>()
            .init_resource::<ActiveEffects>()
            .add_systems(Startup, setup_ripple_mesh)
            .add_systems(
                Update,
                pick_creature
                    .in_set(TickSet::Input)
                    .run_if(in_state(GameState::Exploring)),
            )
            .add_systems(Update, spawn_click_effects.in_set(TickSet::Simulate))
            .add_systems(
                Update,
                (expire_effects, animate_ripples).chain().in_set(TickSet::Sync),
            );
    }
}
