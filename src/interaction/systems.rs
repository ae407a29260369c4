use crate::core::camera::components::MainCamera;
use crate::core::config::SceneSettings;
use crate::creatures::components::CreatureBody;
use crate::creatures::resources::Reef;
use crate::interaction::components::{EffectVisual, InfoPanel, Ripple};
use crate::interaction::events::CreatureClicked;
use crate::interaction::resources::{ActiveEffects, RippleMesh};
use crate::ui::bundles::{ACCENT, LabelBundle, PanelBundle};
use bevy::color::Alpha;
use bevy::log::{debug, info};
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use marinelife::CreatureId;
use marinelife::effects::{EffectKind, ripple_frame};
use marinelife::info::describe;
use std::collections::HashSet;

const RIPPLE_SEGMENTS: u32 = 16;

pub fn setup_ripple_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let disc = meshes.add(Circle::new(1.0).mesh().resolution(RIPPLE_SEGMENTS));
    commands.insert_resource(RippleMesh(disc));
}

/// Casts the click into the scene and reports the nearest mobile creature
pub fn pick_creature(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    parents: Query<&ChildOf>,
    bodies: Query<&CreatureBody>,
    reef: Res<Reef>,
    mut ray_cast: MeshRayCast,
    mut clicked: MessageWriter<CreatureClicked>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    // seaweed, ocean and particles are transparent to clicks
    let is_mobile_part = |entity: Entity| {
        creature_root(entity, &parents, &bodies)
            .and_then(|id| reef.simulation.get(id))
            .is_some_and(|creature| creature.kind().is_mobile())
    };
    let settings = MeshRayCastSettings::default().with_filter(&is_mobile_part);

    let Some((entity, hit)) = ray_cast.cast_ray(ray, &settings).first() else {
        debug!("Click at {cursor} hit nothing");
        return;
    };
    if let Some(id) = creature_root(*entity, &parents, &bodies) {
        clicked.write(CreatureClicked {
            id,
            point: hit.point,
        });
    }
}

/// Walks up the hierarchy from a hit mesh to the creature that owns it
fn creature_root(
    mut entity: Entity,
    parents: &Query<&ChildOf>,
    bodies: &Query<&CreatureBody>,
) -> Option<CreatureId> {
    loop {
        if let Ok(body) = bodies.get(entity) {
            return Some(body.0);
        }
        entity = parents.get(entity).ok()?.parent();
    }
}

pub fn spawn_click_effects(
    mut commands: Commands,
    mut clicked: MessageReader<CreatureClicked>,
    mut effects: ResMut<ActiveEffects>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ripple_mesh: Res<RippleMesh>,
    reef: Res<Reef>,
    settings: Res<SceneSettings>,
    time: Res<Time<Real>>,
) {
    let config = &settings.inner.effects;
    let now = time.elapsed_secs_f64();

    for event in clicked.read() {
        let Some(creature) = reef.simulation.get(event.id) else {
            continue;
        };
        let info = describe(creature);
        info!("Clicked {} at {}", info.name, event.point);

        let ripple = effects.timeline.ripple(event.point, now, config);
        commands.spawn((
            Mesh3d(ripple_mesh.0.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: ACCENT.with_alpha(config.ripple_opacity),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_translation(event.point),
            Ripple,
            EffectVisual(ripple),
        ));

        let panel = effects.timeline.info_panel(info.clone(), now, config);
        commands
            .spawn((PanelBundle::new(ACCENT), InfoPanel, EffectVisual(panel)))
            .with_children(|parent| {
                parent.spawn(LabelBundle::new(&info.name, 18.0, ACCENT));
                parent.spawn(
                    LabelBundle::new(&info.description, 14.0, ACCENT)
                        .with_margin(UiRect::top(Val::Px(8.0))),
                );
            });
    }
}

pub fn animate_ripples(
    effects: Res<ActiveEffects>,
    settings: Res<SceneSettings>,
    time: Res<Time<Real>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut ripples: Query<
        (&EffectVisual, &mut Transform, &MeshMaterial3d<StandardMaterial>),
        With<Ripple>,
    >,
) {
    let now = time.elapsed_secs_f64();
    for (visual, mut transform, material) in ripples.iter_mut() {
        let Some(effect) = effects.timeline.get(visual.0) else {
            continue;
        };
        if !matches!(effect.kind, EffectKind::Ripple { .. }) {
            continue;
        }
        let frame = ripple_frame(effect.progress(now), &settings.inner.effects);
        transform.scale = Vec3::splat(frame.scale);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(frame.opacity);
        }
    }
}

/// Retires every effect whose lifetime ran out and removes its visuals
pub fn expire_effects(
    mut commands: Commands,
    mut effects: ResMut<ActiveEffects>,
    time: Res<Time<Real>>,
    visuals: Query<(Entity, &EffectVisual)>,
) {
    let expired: HashSet<_> = effects
        .timeline
        .expire(time.elapsed_secs_f64())
        .into_iter()
        .map(|effect| effect.id)
        .collect();
    if expired.is_empty() {
        return;
    }

    for (entity, visual) in visuals.iter() {
        if expired.contains(&visual.0) {
            commands.entity(entity).despawn();
        }
    }
}
