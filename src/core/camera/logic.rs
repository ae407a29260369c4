use bevy::math::{Vec2, Vec3};

pub struct ParallaxInput {
    /// Last sampled pointer position in window pixels, origin top-left
    pub pointer: Vec2,
    pub window_size: Vec2,
    pub sensitivity: f32,
}

/// Where the camera wants to be on the x/y plane for the given pointer.
/// Pointer right of centre pulls the camera right, pointer below centre
/// pulls it down.
pub fn parallax_target(input: &ParallaxInput) -> Vec2 {
    let half = input.window_size / 2.0;
    Vec2::new(
        (input.pointer.x - half.x) * input.sensitivity,
        -(input.pointer.y - half.y) * input.sensitivity,
    )
}

/// Covers `easing` of the remaining x/y distance to `target`; depth is
/// left alone
pub fn ease_camera(current: Vec3, target: Vec2, easing: f32) -> Vec3 {
    Vec3::new(
        current.x + (target.x - current.x) * easing,
        current.y + (target.y - current.y) * easing,
        current.z,
    )
}
