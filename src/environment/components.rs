use bevy::prelude::*;
use bevy_ocean::OceanConfig;
use marinelife::particles::ParticleField;

#[derive(Component)]
pub struct OceanSurface {
    pub config: OceanConfig,
}

#[derive(Component)]
pub struct AmbientParticles {
    pub field: ParticleField,
}

/// One of the two coloured lights circling the reef
#[derive(Component)]
pub struct GlowLight {
    pub index: usize,
}
