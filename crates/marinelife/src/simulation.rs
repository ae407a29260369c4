use crate::config::SceneConfig;
use crate::creature::{Creature, CreatureId, CreatureKind};
use crate::motion::{self, Tick};
use rand::Rng;
use std::collections::BTreeMap;

/// Owns every live creature, keyed by a stable id.
///
/// Creatures are added once during population and live for the lifetime of
/// the scene; the renderer only ever reads their poses.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    creatures: BTreeMap<CreatureId, Creature>,
    next_id: u32,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, creature: Creature) -> CreatureId {
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        self.creatures.insert(id, creature);
        id
    }

    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    pub fn get_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.creatures.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CreatureId, &Creature)> {
        self.creatures.iter().map(|(id, creature)| (*id, creature))
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn count_of(&self, kind: CreatureKind) -> usize {
        self.creatures
            .values()
            .filter(|creature| creature.kind() == kind)
            .count()
    }

    /// Advances every creature once, in id order, against a single tick
    pub fn tick(&mut self, tick: Tick, config: &SceneConfig, rng: &mut impl Rng) {
        for creature in self.creatures.values_mut() {
            motion::advance(creature, tick, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{Body, Swim};
    use crate::population::populate;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ids_are_handed_out_in_order() {
        let mut simulation = Simulation::new();
        let shark = Creature::new(
            Vec3::ZERO,
            Body::Shark {
                swim: Swim::new(0.0, 1.0, 0.0),
            },
        );

        let a = simulation.insert(shark.clone());
        let b = simulation.insert(shark);

        assert_eq!(a, CreatureId(0));
        assert_eq!(b, CreatureId(1));
        assert_eq!(simulation.len(), 2);
        assert!(simulation.get(CreatureId(2)).is_none());
    }

    #[test]
    fn tick_moves_swimmers_and_keeps_seaweed_anchored() {
        let config = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut simulation = populate(&config, &mut rng);
        let before = simulation.clone();

        for frame in 0..120 {
            simulation.tick(Tick::per_frame(frame as f32 / 60.0), &config, &mut rng);
        }

        for (id, creature) in simulation.iter() {
            let original = before.get(id).unwrap();
            match creature.kind() {
                CreatureKind::Seaweed => {
                    assert_eq!(creature.pose.position, original.pose.position)
                }
                _ => assert_ne!(creature.pose.position, original.pose.position),
            }
        }
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut simulation = Simulation::new();
        let id = simulation.insert(Creature::new(
            Vec3::ZERO,
            Body::Seaweed {
                height: 30.0,
                sway_phase: 0.0,
                sway_amount: 0.1,
            },
        ));

        if let Some(creature) = simulation.get_mut(id) {
            creature.pose.scale = 2.0;
        }

        assert_eq!(simulation.get(id).map(|c| c.pose.scale), Some(2.0));
        assert!(!simulation.is_empty());
    }
}
