mod core;
mod creatures;
mod environment;
mod helpers;
mod interaction;
mod loading;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::config::SceneSettings;
use crate::core::sets::TickSet;
use crate::core::state::GameState;
use crate::creatures::CreaturesPlugin;
use crate::creatures::resources::SceneSeed;
use crate::environment::EnvironmentPlugin;
use crate::interaction::InteractionPlugin;
use crate::loading::LoadingPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use marinelife::tools::resolve_seed;

pub struct ReefPlugin;

impl Plugin for ReefPlugin {
    fn build(&self, app: &mut App) {
        let settings = SceneSettings::default();
        let seed = resolve_seed(settings.inner.seed);
        info!("Scene seed: {seed}");

        app.init_state::<GameState>()
            .insert_resource(settings)
            .insert_resource(SceneSeed(seed))
            .configure_sets(
                Update,
                (TickSet::Input, TickSet::Simulate, TickSet::Sync).chain(),
            )
            .add_plugins((
                CameraPlugin,
                EnvironmentPlugin,
                CreaturesPlugin,
                InteractionPlugin,
                LoadingPlugin,
            ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
