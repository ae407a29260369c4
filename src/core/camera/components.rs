use bevy::prelude::*;

#[derive(Component, Reflect)]
pub struct MainCamera;

/// Latest pointer position, sampled once at the start of each tick
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerSample {
    pub position: Option<Vec2>,
}
