//! Light rig for the scene: a dim ambient wash, a cold key light from above
//! and two coloured glows circling the reef.

use glam::Vec3;

pub const AMBIENT_COLOR: u32 = 0x004080;
pub const AMBIENT_INTENSITY: f32 = 0.3;

pub const SUN_COLOR: u32 = 0x00d4ff;
pub const SUN_INTENSITY: f32 = 0.8;
pub const SUN_POSITION: Vec3 = Vec3::new(100.0, 200.0, 100.0);

pub const GLOW_COLORS: [u32; 2] = [0x00ff88, 0x0099ff];
pub const GLOW_RANGE: f32 = 300.0;
pub const GLOW_ORBIT_RADIUS: f32 = 300.0;
pub const GLOW_HEIGHT: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowLight {
    pub position: Vec3,
    /// Relative intensity, pulsing within `[0.1, 0.5]`
    pub intensity: f32,
}

pub fn glow_lights(time: f32) -> [GlowLight; 2] {
    [
        GlowLight {
            position: Vec3::new(
                (time * 0.3).sin() * GLOW_ORBIT_RADIUS,
                GLOW_HEIGHT,
                (time * 0.3).cos() * GLOW_ORBIT_RADIUS,
            ),
            intensity: 0.3 + (time * 0.7).sin() * 0.2,
        },
        GlowLight {
            position: Vec3::new(
                (time * 0.4).cos() * GLOW_ORBIT_RADIUS,
                GLOW_HEIGHT,
                (time * 0.4).sin() * GLOW_ORBIT_RADIUS,
            ),
            intensity: 0.3 + (time * 0.5).cos() * 0.2,
        },
    ]
}

/// Splits a packed `0xRRGGBB` colour into bytes
pub fn rgb(color: u32) -> [u8; 3] {
    [(color >> 16) as u8, (color >> 8) as u8, color as u8]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1.3)]
    #[case(42.0)]
    #[case(1000.5)]
    fn glows_orbit_at_fixed_radius_and_height(#[case] time: f32) {
        for light in glow_lights(time) {
            let horizontal = Vec3::new(light.position.x, 0.0, light.position.z).length();
            assert!((horizontal - GLOW_ORBIT_RADIUS).abs() < 1e-2);
            assert_eq!(light.position.y, GLOW_HEIGHT);
            assert!((0.1 - 1e-6..=0.5 + 1e-6).contains(&light.intensity));
        }
    }

    #[test]
    fn glows_start_on_opposite_phases() {
        let [first, second] = glow_lights(0.0);
        assert!((first.position - Vec3::new(0.0, 50.0, 300.0)).length() < 1e-4);
        assert!((second.position - Vec3::new(300.0, 50.0, 0.0)).length() < 1e-4);
        assert!((first.intensity - 0.3).abs() < 1e-6);
        assert!((second.intensity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn splits_packed_colors() {
        assert_eq!(rgb(0x4a90e2), [0x4a, 0x90, 0xe2]);
        assert_eq!(rgb(AMBIENT_COLOR), [0x00, 0x40, 0x80]);
    }
}
