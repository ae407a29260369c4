use crate::creature::{Creature, CreatureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureInfo {
    pub name: String,
    pub description: String,
}

impl CreatureInfo {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn describe(creature: &Creature) -> CreatureInfo {
    describe_kind(creature.kind(), creature.body.species())
}

pub fn describe_kind(kind: CreatureKind, species: Option<&str>) -> CreatureInfo {
    match kind {
        CreatureKind::Shark => CreatureInfo::new(
            "Great White Shark",
            "Apex predator of the ocean, known for their incredible hunting abilities and important role in marine ecosystems.",
        ),
        CreatureKind::SchoolFish => CreatureInfo::new(
            species.filter(|s| !s.is_empty()).unwrap_or("School Fish"),
            "These colorful fish travel in schools for protection and are vital to the ocean food chain.",
        ),
        CreatureKind::Turtle => CreatureInfo::new(
            "Sea Turtle",
            "Ancient mariners that have navigated the oceans for millions of years, playing crucial roles in marine ecosystems.",
        ),
        CreatureKind::Jellyfish => CreatureInfo::new(
            "Jellyfish",
            "Graceful drifters that have existed for over 500 million years, some species can glow in the dark.",
        ),
        CreatureKind::Seaweed => CreatureInfo::new(
            "Sea Creature",
            "A mysterious inhabitant of the deep ocean.",
        ),
    }
}
