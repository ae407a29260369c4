use crate::config::{FishConfig, SceneConfig, SchoolConfig, SeaweedConfig, SwimmerConfig};
use crate::constants::FLIPPER_COUNT;
use crate::creature::{Body, Creature, Swim};
use crate::simulation::Simulation;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Builds the whole cast with randomized starting state
pub fn populate(config: &SceneConfig, rng: &mut impl Rng) -> Simulation {
    let mut simulation = Simulation::new();

    spawn_sharks(&mut simulation, &config.sharks, rng);
    for (index, school) in config.fish.schools.iter().enumerate() {
        spawn_school(&mut simulation, &config.fish, index, school, rng);
    }
    spawn_turtles(&mut simulation, &config.turtles.swim, rng);
    spawn_jellyfish(&mut simulation, &config.jellyfish.swim, rng);
    spawn_seaweed(&mut simulation, &config.seaweed, rng);

    log::debug!("populated scene with {} creatures", simulation.len());
    simulation
}

fn spawn_sharks(simulation: &mut Simulation, config: &SwimmerConfig, rng: &mut impl Rng) {
    for _ in 0..config.count {
        let position = spawn_point(config, rng);
        let swim = random_swim(config, rng);
        simulation.insert(Creature::new(position, Body::Shark { swim }));
    }
}

/// Lays a school out on a ring around a shared, randomly placed centre
fn spawn_school(
    simulation: &mut Simulation,
    fish: &FishConfig,
    index: usize,
    school: &SchoolConfig,
    rng: &mut impl Rng,
) {
    let school_center = Vec3::new(
        centered(rng, fish.center_half_extent * 2.0),
        between(rng, fish.center_depth_min, fish.center_depth_max),
        centered(rng, fish.center_half_extent * 2.0),
    );

    for i in 0..school.count {
        let angle = i as f32 / school.count as f32 * TAU;
        let radius = between(rng, fish.ring_radius_min, fish.ring_radius_max);
        let position = school_center
            + Vec3::new(
                angle.cos() * radius,
                centered(rng, fish.ring_depth_spread),
                angle.sin() * radius,
            );
        let swim = Swim::new(
            random_heading(rng),
            between(rng, fish.speed_min, fish.speed_max),
            centered(rng, fish.vertical_speed_spread),
        );

        simulation.insert(Creature::new(
            position,
            Body::SchoolFish {
                swim,
                school: index,
                school_center,
                species: school.species.clone(),
            },
        ));
    }
}

fn spawn_turtles(simulation: &mut Simulation, config: &SwimmerConfig, rng: &mut impl Rng) {
    for _ in 0..config.count {
        let position = spawn_point(config, rng);
        let swim = random_swim(config, rng);
        simulation.insert(Creature::new(
            position,
            Body::Turtle {
                swim,
                flipper_roll: [0.0; FLIPPER_COUNT],
            },
        ));
    }
}

fn spawn_jellyfish(simulation: &mut Simulation, config: &SwimmerConfig, rng: &mut impl Rng) {
    for _ in 0..config.count {
        let position = spawn_point(config, rng);
        let swim = random_swim(config, rng);
        simulation.insert(Creature::new(
            position,
            Body::Jellyfish {
                swim,
                rest_depth: position.y,
                pulse_phase: random_heading(rng),
            },
        ));
    }
}

fn spawn_seaweed(simulation: &mut Simulation, config: &SeaweedConfig, rng: &mut impl Rng) {
    for _ in 0..config.count {
        let height = between(rng, config.height_min, config.height_max);
        // the stalk hangs down from its anchor, centred on its midpoint
        let position = Vec3::new(
            centered(rng, config.spawn_half_extent * 2.0),
            config.anchor_y - height / 2.0,
            centered(rng, config.spawn_half_extent * 2.0),
        );
        simulation.insert(Creature::new(
            position,
            Body::Seaweed {
                height,
                sway_phase: random_heading(rng),
                sway_amount: between(rng, config.sway_min, config.sway_max),
            },
        ));
    }
}

fn spawn_point(config: &SwimmerConfig, rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        centered(rng, config.spawn_half_extent * 2.0),
        between(rng, config.spawn_depth_min, config.spawn_depth_max),
        centered(rng, config.spawn_half_extent * 2.0),
    )
}

fn random_swim(config: &SwimmerConfig, rng: &mut impl Rng) -> Swim {
    Swim::new(
        random_heading(rng),
        between(rng, config.speed_min, config.speed_max),
        centered(rng, config.vertical_speed_spread),
    )
}

fn random_heading(rng: &mut impl Rng) -> f32 {
    rng.random::<f32>() * TAU
}

fn between(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

fn centered(rng: &mut impl Rng, width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * width
}
