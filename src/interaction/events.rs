use bevy::prelude::*;
use marinelife::CreatureId;

/// A mobile creature was hit by a click at `point`
#[derive(Message, Debug, Clone, Copy)]
pub struct CreatureClicked {
    pub id: CreatureId,
    pub point: Vec3,
}
