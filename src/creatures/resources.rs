use bevy::prelude::Resource;
use marinelife::Simulation;
use rand::rngs::StdRng;

/// The live simulation together with the rng that drives its steering
#[derive(Resource)]
pub struct Reef {
    pub simulation: Simulation,
    pub rng: StdRng,
}

/// Seed the whole scene was built from
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneSeed(pub u64);
