use bevy::prelude::*;
use marinelife::CreatureId;

/// Root of a creature's mesh hierarchy, linked to its simulation entry
#[derive(Component, Debug, Clone, Copy)]
pub struct CreatureBody(pub CreatureId);

/// One of a turtle's flippers; `index` selects its roll in the simulation
#[derive(Component, Debug, Clone, Copy)]
pub struct Flipper {
    pub index: usize,
}
