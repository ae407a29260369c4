use bevy::prelude::*;
use marinelife::effects::EffectTimeline;

#[derive(Resource, Default)]
pub struct ActiveEffects {
    pub timeline: EffectTimeline,
}

/// Shared disc mesh every ripple is drawn with
#[derive(Resource)]
pub struct RippleMesh(pub Handle<Mesh>);
