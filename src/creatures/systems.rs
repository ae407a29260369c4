use crate::core::config::SceneSettings;
use crate::creatures::components::{CreatureBody, Flipper};
use crate::creatures::meshes::{CreatureModels, Part};
use crate::creatures::resources::{Reef, SceneSeed};
use bevy::log::info;
use bevy::prelude::*;
use marinelife::population::populate;
use marinelife::tools::seeded_rng;
use marinelife::{Body, CreatureKind, Pose, Tick};

pub fn spawn_reef(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    seed: Res<SceneSeed>,
) {
    let config = &settings.inner;
    let mut rng = seeded_rng(seed.0);
    let simulation = populate(config, &mut rng);
    let models = CreatureModels::build(&config.fish.schools, &mut meshes, &mut materials);

    for (id, creature) in simulation.iter() {
        let seaweed_parts;
        let parts: &[Part] = match &creature.body {
            Body::Shark { .. } => &models.shark,
            Body::SchoolFish { school, .. } => match models.schools.get(*school) {
                Some(parts) => parts,
                None => continue,
            },
            Body::Turtle { .. } => &models.turtle,
            Body::Jellyfish { .. } => &models.jellyfish,
            Body::Seaweed { height, .. } => {
                seaweed_parts = models.seaweed(*height, &config.seaweed, &mut meshes, &mut rng);
                &seaweed_parts
            }
        };

        commands
            .spawn((
                pose_transform(&creature.pose),
                Visibility::default(),
                CreatureBody(id),
            ))
            .with_children(|parent| {
                for part in parts {
                    let mut child = parent.spawn((
                        Mesh3d(part.mesh.clone()),
                        MeshMaterial3d(part.material.clone()),
                        part.transform,
                    ));
                    if let Some(index) = part.flipper {
                        child.insert(Flipper { index });
                    }
                }
            });
    }

    info!(
        "Reef spawned: {} sharks, {} fish, {} turtles, {} jellyfish, {} seaweed",
        simulation.count_of(CreatureKind::Shark),
        simulation.count_of(CreatureKind::SchoolFish),
        simulation.count_of(CreatureKind::Turtle),
        simulation.count_of(CreatureKind::Jellyfish),
        simulation.count_of(CreatureKind::Seaweed),
    );

    commands.insert_resource(Reef { simulation, rng });
}

pub fn advance_reef(time: Res<Time>, settings: Res<SceneSettings>, mut reef: ResMut<Reef>) {
    let config = &settings.inner;
    let tick = Tick::from_timing(&config.timing, time.elapsed_secs(), time.delta_secs());
    let Reef { simulation, rng } = &mut *reef;
    simulation.tick(tick, config, rng);
}

pub fn sync_creature_transforms(
    reef: Res<Reef>,
    mut bodies: Query<(&CreatureBody, &mut Transform), Without<Flipper>>,
) {
    for (body, mut transform) in bodies.iter_mut() {
        if let Some(creature) = reef.simulation.get(body.0) {
            *transform = pose_transform(&creature.pose);
        }
    }
}

pub fn sync_flippers(
    reef: Res<Reef>,
    owners: Query<&CreatureBody>,
    mut flippers: Query<(&Flipper, &ChildOf, &mut Transform), Without<CreatureBody>>,
) {
    for (flipper, child_of, mut transform) in flippers.iter_mut() {
        let Ok(owner) = owners.get(child_of.parent()) else {
            continue;
        };
        if let Some(Body::Turtle { flipper_roll, .. }) =
            reef.simulation.get(owner.0).map(|creature| &creature.body)
        {
            if let Some(roll) = flipper_roll.get(flipper.index) {
                transform.rotation = Quat::from_rotation_z(*roll);
            }
        }
    }
}

/// Models face +X, so yaw is negated to turn that axis onto
/// `(cos heading, sin heading)` in the x/z plane
pub fn pose_transform(pose: &Pose) -> Transform {
    Transform {
        translation: pose.position,
        rotation: Quat::from_euler(
            EulerRot::XYZ,
            pose.rotation.x,
            -pose.rotation.y,
            pose.rotation.z,
        ),
        scale: Vec3::splat(pose.scale),
    }
}
