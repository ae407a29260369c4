use crate::constants::FLIPPER_COUNT;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    Shark,
    SchoolFish,
    Turtle,
    Jellyfish,
    Seaweed,
}

impl CreatureKind {
    /// Seaweed is anchored; everything else roams
    pub fn is_mobile(self) -> bool {
        !matches!(self, CreatureKind::Seaweed)
    }
}

/// Transform state handed to the renderer every frame.
///
/// `rotation` holds Euler angles (X, Y, Z order) in radians. The yaw
/// `rotation.y` is measured from +X toward +Z, the same way headings are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Horizontal travel plus vertical drift, in units per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swim {
    pub heading: f32,
    pub speed: f32,
    pub vertical_speed: f32,
}

impl Swim {
    pub fn new(heading: f32, speed: f32, vertical_speed: f32) -> Self {
        Self {
            heading,
            speed,
            vertical_speed,
        }
    }

    pub fn direction(&self) -> (f32, f32) {
        (self.heading.cos(), self.heading.sin())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Shark {
        swim: Swim,
    },
    SchoolFish {
        swim: Swim,
        /// Index into the configured schools
        school: usize,
        school_center: Vec3,
        species: String,
    },
    Turtle {
        swim: Swim,
        /// Roll of each flipper, updated every tick
        flipper_roll: [f32; FLIPPER_COUNT],
    },
    Jellyfish {
        swim: Swim,
        /// Depth the bell bobs around
        rest_depth: f32,
        pulse_phase: f32,
    },
    Seaweed {
        height: f32,
        sway_phase: f32,
        sway_amount: f32,
    },
}

impl Body {
    pub fn kind(&self) -> CreatureKind {
        match self {
            Body::Shark { .. } => CreatureKind::Shark,
            Body::SchoolFish { .. } => CreatureKind::SchoolFish,
            Body::Turtle { .. } => CreatureKind::Turtle,
            Body::Jellyfish { .. } => CreatureKind::Jellyfish,
            Body::Seaweed { .. } => CreatureKind::Seaweed,
        }
    }

    pub fn swim(&self) -> Option<&Swim> {
        match self {
            Body::Shark { swim }
            | Body::SchoolFish { swim, .. }
            | Body::Turtle { swim, .. }
            | Body::Jellyfish { swim, .. } => Some(swim),
            Body::Seaweed { .. } => None,
        }
    }

    pub fn species(&self) -> Option<&str> {
        match self {
            Body::SchoolFish { species, .. } => Some(species),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub pose: Pose,
    pub body: Body,
}

impl Creature {
    pub fn new(position: Vec3, body: Body) -> Self {
        Self {
            pose: Pose::at(position),
            body,
        }
    }

    pub fn kind(&self) -> CreatureKind {
        self.body.kind()
    }
}
