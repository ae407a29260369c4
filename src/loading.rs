use crate::core::config::SceneSettings;
use crate::core::state::GameState;
use crate::environment::WATER_COLOR;
use crate::ui::bundles::{ACCENT, LabelBundle, OverlayBundle};
use bevy::color::Alpha;
use bevy::prelude::*;
use marinelife::effects::loading_overlay_opacity;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_loading_overlay)
            .add_systems(Update, fade_loading_overlay.run_if(in_state(GameState::Loading)));
    }
}

#[derive(Component)]
pub struct LoadingOverlay;

#[derive(Component)]
pub struct LoadingText;

fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((OverlayBundle::new(WATER_COLOR), LoadingOverlay))
        .with_children(|parent| {
            parent.spawn((LabelBundle::new("Diving in...", 28.0, ACCENT), LoadingText));
        });
}

/// Holds the overlay for a moment, fades it out, then hands over to the scene
fn fade_loading_overlay(
    mut commands: Commands,
    time: Res<Time<Real>>,
    settings: Res<SceneSettings>,
    mut next_state: ResMut<NextState<GameState>>,
    mut overlays: Query<(Entity, &mut BackgroundColor), With<LoadingOverlay>>,
    mut texts: Query<&mut TextColor, With<LoadingText>>,
) {
    let opacity = loading_overlay_opacity(time.elapsed_secs(), &settings.inner.effects);

    match opacity {
        Some(alpha) => {
            for (_, mut background) in overlays.iter_mut() {
                background.0.set_alpha(alpha);
            }
            for mut text in texts.iter_mut() {
                text.0.set_alpha(alpha);
            }
        }
        None => {
            for (entity, _) in overlays.iter() {
                commands.entity(entity).despawn();
            }
            info!("Scene ready");
            next_state.set(GameState::Exploring);
        }
    }
}
