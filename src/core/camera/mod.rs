pub(crate) mod components;
pub(crate) mod logic;
pub(crate) mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use crate::core::sets::TickSet;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .init_resource::<PointerSample>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, sample_pointer.in_set(TickSet::Input))
            .add_systems(Update, camera_parallax.in_set(TickSet::Simulate))
            .add_systems(Update, log_window_resize);
    }
}
