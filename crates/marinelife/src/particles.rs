use crate::config::ParticleConfig;
use crate::motion::Tick;
use glam::Vec3;
use rand::Rng;

/// Colour of a single mote in HSL, all components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Drifting specks of matter filling the water column.
///
/// Each mote bobs on its own sine phase; anything that rises above the
/// ceiling wraps back down to the floor.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub tints: Vec<Tint>,
}

impl ParticleField {
    pub fn scatter(config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(config.count);
        let mut tints = Vec::with_capacity(config.count);

        for _ in 0..config.count {
            positions.push(Vec3::new(
                (rng.random::<f32>() - 0.5) * config.half_extent * 2.0,
                rng.random::<f32>() * config.spawn_height + config.floor,
                (rng.random::<f32>() - 0.5) * config.half_extent * 2.0,
            ));
            // blue-green band
            tints.push(Tint {
                hue: 0.5 + rng.random::<f32>() * 0.2,
                saturation: 0.7,
                lightness: 0.3 + rng.random::<f32>() * 0.3,
            });
        }

        Self { positions, tints }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn advance(&mut self, tick: Tick, config: &ParticleConfig) {
        for (i, position) in self.positions.iter_mut().enumerate() {
            position.y += (tick.time + i as f32).sin() * config.drift * tick.step;
            if position.y > config.ceiling {
                position.y = config.floor;
            }
        }
    }
}
