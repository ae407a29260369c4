use bevy::prelude::*;
use marinelife::effects::EffectId;

/// Renders the transient effect with this id; despawned when it expires
#[derive(Component, Debug, Clone, Copy)]
pub struct EffectVisual(pub EffectId);

#[derive(Component)]
pub struct Ripple;

#[derive(Component)]
pub struct InfoPanel;
