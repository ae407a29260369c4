use crate::core::camera::components::{MainCamera, PointerSample};
use crate::core::camera::logic::{ParallaxInput, ease_camera, parallax_target};
use crate::core::config::SceneSettings;
use crate::environment::WATER_COLOR;
use bevy::log::info;
use bevy::math::{Vec2, Vec3};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

pub fn spawn_camera(mut commands: Commands, settings: Res<SceneSettings>) {
    let camera = &settings.inner.camera;
    let start = Vec3::from_array(camera.start);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: WATER_COLOR,
            falloff: FogFalloff::Linear {
                start: camera.near,
                end: camera.far,
            },
            ..default()
        },
        MainCamera,
    ));

    info!("Camera spawned at {start}");
}

pub fn sample_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sample: ResMut<PointerSample>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    // keep the last position while the cursor is outside the window
    if let Some(position) = window.cursor_position() {
        sample.position = Some(position);
    }
}

pub fn camera_parallax(
    sample: Res<PointerSample>,
    settings: Res<SceneSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera_q: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_q.single_mut() else {
        return;
    };
    let camera = &settings.inner.camera;

    let target = match (sample.position, windows.single()) {
        (Some(pointer), Ok(window)) => parallax_target(&ParallaxInput {
            pointer,
            window_size: window.size(),
            sensitivity: camera.pointer_sensitivity,
        }),
        _ => Vec2::ZERO,
    };

    transform.translation = ease_camera(transform.translation, target, camera.easing);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

pub fn log_window_resize(mut resized: MessageReader<WindowResized>) {
    for event in resized.read() {
        info!("Window resized to {}x{}", event.width, event.height);
    }
}
