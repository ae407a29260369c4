//! Per-tick motion model.
//!
//! Every swimmer translates along its heading, picks up a small cosmetic
//! wobble, occasionally turns at random and reverses course when it leaves
//! its soft bounding volume. School fish are additionally pulled back to
//! their school centre, jellyfish bob and pulse instead of drifting, and
//! seaweed only sways in place.
//!
//! Increments are expressed per tick. [`Tick::step`] is `1.0` in the classic
//! frame-coupled mode and `delta * reference_fps` when the scene is
//! configured to be frame-rate independent.

use crate::config::{MotionProfile, SceneConfig, TimingConfig};
use crate::creature::{Body, Creature, Pose, Swim};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Seconds since the scene started
    pub time: f32,
    /// How many reference frames this tick stands for
    pub step: f32,
}

impl Tick {
    pub fn per_frame(time: f32) -> Self {
        Self { time, step: 1.0 }
    }

    pub fn from_timing(timing: &TimingConfig, time: f32, delta_seconds: f32) -> Self {
        let step = if timing.frame_rate_independent {
            delta_seconds * timing.reference_fps
        } else {
            1.0
        };
        Self { time, step }
    }
}

/// Advance one creature by a single tick
pub fn advance(creature: &mut Creature, tick: Tick, config: &SceneConfig, rng: &mut impl Rng) {
    let Creature { pose, body } = creature;

    match body {
        Body::Shark { swim } => {
            let motion = &config.sharks.motion;
            swim_forward(pose, swim, tick.step);
            pose.rotation.z = wobble(pose, motion, tick.time);
            maybe_turn(swim, motion, tick.step, rng);
            reflect_horizontal(pose, swim, motion, rng);
            reflect_vertical(pose, swim, motion);
            pose.rotation.y = swim.heading;
        }
        Body::SchoolFish {
            swim,
            school_center,
            ..
        } => {
            let fish = &config.fish;
            swim_forward(pose, swim, tick.step);
            pose.rotation.z = wobble(pose, &fish.motion, tick.time);
            if maybe_turn(swim, &fish.motion, tick.step, rng) {
                swim.vertical_speed = centered(rng, fish.vertical_speed_spread);
            }
            // cohesion runs after the random turn so it always has the last word
            regroup(pose, swim, *school_center, fish.cohesion_radius);
            reflect_horizontal(pose, swim, &fish.motion, rng);
            reflect_vertical(pose, swim, &fish.motion);
            pose.rotation.y = swim.heading;
        }
        Body::Turtle { swim, flipper_roll } => {
            let turtles = &config.turtles;
            let motion = &turtles.swim.motion;
            swim_forward(pose, swim, tick.step);
            pose.rotation.z = wobble(pose, motion, tick.time);
            for (index, roll) in flipper_roll.iter_mut().enumerate() {
                *roll = (tick.time * turtles.flipper_frequency + index as f32).sin()
                    * turtles.flipper_amplitude;
            }
            maybe_turn(swim, motion, tick.step, rng);
            reflect_horizontal(pose, swim, motion, rng);
            reflect_vertical(pose, swim, motion);
            pose.rotation.y = swim.heading;
        }
        Body::Jellyfish {
            swim,
            rest_depth,
            pulse_phase,
        } => {
            let jelly = &config.jellyfish;
            let motion = &jelly.swim.motion;
            glide(pose, swim, tick.step);
            pose.position.y = *rest_depth
                + (tick.time * jelly.bob_frequency + *pulse_phase).sin() * jelly.bob_amplitude;
            pose.scale = 1.0
                + (tick.time * jelly.pulse_frequency + *pulse_phase).sin() * jelly.pulse_amplitude;
            pose.rotation.y += jelly.yaw_drift * tick.step;
            pose.rotation.z = wobble(pose, motion, tick.time);
            maybe_turn(swim, motion, tick.step, rng);
            reflect_horizontal(pose, swim, motion, rng);
        }
        Body::Seaweed {
            sway_phase,
            sway_amount,
            ..
        } => {
            let weed = &config.seaweed;
            pose.rotation.x =
                (tick.time * weed.sway_x_frequency + *sway_phase).sin() * *sway_amount;
            pose.rotation.z = (tick.time * weed.sway_z_frequency + *sway_phase).cos()
                * *sway_amount
                * weed.sway_z_ratio;
        }
    }
}

/// Horizontal travel along the heading
fn glide(pose: &mut Pose, swim: &Swim, step: f32) {
    let (dx, dz) = swim.direction();
    pose.position.x += dx * swim.speed * step;
    pose.position.z += dz * swim.speed * step;
}

fn swim_forward(pose: &mut Pose, swim: &Swim, step: f32) {
    glide(pose, swim, step);
    pose.position.y += swim.vertical_speed * step;
}

/// Fast oscillation seeded by the x position, so neighbours do not sway in
/// lockstep
fn wobble(pose: &Pose, motion: &MotionProfile, time: f32) -> f32 {
    (time * motion.wobble_frequency + pose.position.x * motion.wobble_position_scale).sin()
        * motion.wobble_amplitude
}

/// Uniform sample from `[-spread / 2, spread / 2)`
fn centered(rng: &mut impl Rng, spread: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * spread
}

fn maybe_turn(swim: &mut Swim, motion: &MotionProfile, step: f32, rng: &mut impl Rng) -> bool {
    let chance = (motion.turn_chance * step).min(1.0);
    if rng.random::<f32>() >= chance {
        return false;
    }
    swim.heading += centered(rng, motion.turn_spread);
    true
}

/// Point straight back at the school centre once too far away from it
fn regroup(pose: &Pose, swim: &mut Swim, center: Vec3, radius: f32) {
    let offset = center - pose.position;
    if offset.length() <= radius {
        return;
    }
    swim.heading = offset.z.atan2(offset.x);
    if offset.y != 0.0 {
        swim.vertical_speed = swim.vertical_speed.abs() * offset.y.signum();
    }
}

/// True while the creature is past the horizontal bound and still moving
/// further out on that axis
pub fn heads_outward(position: Vec3, heading: f32, bound: f32) -> bool {
    let (dx, dz) = (heading.cos(), heading.sin());
    (position.x > bound && dx > 0.0)
        || (position.x < -bound && dx < 0.0)
        || (position.z > bound && dz > 0.0)
        || (position.z < -bound && dz < 0.0)
}

fn reflect_horizontal(pose: &Pose, swim: &mut Swim, motion: &MotionProfile, rng: &mut impl Rng) {
    let bound = motion.horizontal_bound;
    if !heads_outward(pose.position, swim.heading, bound) {
        return;
    }
    let jitter = centered(rng, motion.reversal_jitter);
    swim.heading = reverse_course(pose.position, swim.heading, jitter, bound);
}

/// Half turn plus jitter. Near a corner, or when the jitter would keep a
/// grazing swimmer heading out, each offending axis is mirrored instead.
fn reverse_course(position: Vec3, heading: f32, jitter: f32, bound: f32) -> f32 {
    let turned = heading + PI + jitter;
    if !heads_outward(position, turned, bound) {
        return turned;
    }

    let (mut dx, mut dz) = (heading.cos(), heading.sin());
    if position.x.abs() > bound {
        dx = -position.x.signum() * dx.abs();
    }
    if position.z.abs() > bound {
        dz = -position.z.signum() * dz.abs();
    }
    dz.atan2(dx)
}

fn reflect_vertical(pose: &Pose, swim: &mut Swim, motion: &MotionProfile) {
    let y = pose.position.y;
    let rising_out = y > motion.depth_max && swim.vertical_speed > 0.0;
    let sinking_out = y < motion.depth_min && swim.vertical_speed < 0.0;
    if rising_out || sinking_out {
        swim.vertical_speed = -swim.vertical_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FLIPPER_COUNT;
    use crate::creature::CreatureKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    const EPS: f32 = 1e-4;

    fn calm_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.sharks.motion.turn_chance = 0.0;
        config.fish.motion.turn_chance = 0.0;
        config.turtles.swim.motion.turn_chance = 0.0;
        config.jellyfish.swim.motion.turn_chance = 0.0;
        config
    }

    fn shark(position: Vec3, heading: f32, speed: f32, vertical_speed: f32) -> Creature {
        Creature::new(
            position,
            Body::Shark {
                swim: Swim::new(heading, speed, vertical_speed),
            },
        )
    }

    fn heading_of(creature: &Creature) -> f32 {
        creature.body.swim().map(|swim| swim.heading).unwrap_or_default()
    }

    #[test]
    fn shark_swims_straight_when_turns_are_disabled() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(1);
        let mut creature = shark(Vec3::ZERO, 0.0, 1.0, 0.0);

        for frame in 0..10 {
            advance(&mut creature, Tick::per_frame(frame as f32 / 60.0), &config, &mut rng);
        }

        assert!((creature.pose.position.x - 10.0).abs() < EPS);
        assert!(creature.pose.position.z.abs() < EPS);
        assert!(creature.pose.position.y.abs() < EPS);
        assert_eq!(creature.pose.rotation.y, 0.0);
    }

    #[rstest]
    #[case(0.0, 1.0, 0.0)]
    #[case(PI / 2.0, 0.0, 1.0)]
    #[case(PI, -1.0, 0.0)]
    fn translation_follows_heading(#[case] heading: f32, #[case] dx: f32, #[case] dz: f32) {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(2);
        let mut creature = shark(Vec3::ZERO, heading, 2.0, 0.05);

        advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);

        assert!((creature.pose.position.x - dx * 2.0).abs() < EPS);
        assert!((creature.pose.position.z - dz * 2.0).abs() < EPS);
        assert!((creature.pose.position.y - 0.05).abs() < EPS);
        assert_eq!(creature.pose.rotation.y, heading);
    }

    #[test]
    fn frame_rate_independent_step_scales_travel() {
        let timing = TimingConfig {
            frame_rate_independent: true,
            reference_fps: 60.0,
        };
        let tick = Tick::from_timing(&timing, 0.0, 1.0 / 30.0);
        assert!((tick.step - 2.0).abs() < EPS);

        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(3);
        let mut creature = shark(Vec3::ZERO, 0.0, 1.0, 0.0);
        advance(&mut creature, tick, &config, &mut rng);

        assert!((creature.pose.position.x - 2.0).abs() < EPS);
    }

    #[test]
    fn frame_coupled_step_ignores_delta() {
        let tick = Tick::from_timing(&TimingConfig::default(), 3.0, 0.5);
        assert_eq!(tick, Tick::per_frame(3.0));
    }

    #[test]
    fn shark_wobble_is_seeded_by_position() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(4);
        let mut creature = shark(Vec3::new(99.0, 0.0, 0.0), 0.0, 1.0, 0.0);

        advance(&mut creature, Tick::per_frame(1.5), &config, &mut rng);

        let expected = (1.5_f32 * 2.0 + 100.0 * 0.01).sin() * 0.1;
        assert!((creature.pose.rotation.z - expected).abs() < EPS);
    }

    #[test]
    fn shark_reverses_course_past_the_bound() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(5);
        let mut creature = shark(Vec3::new(499.5, 0.0, 0.0), 0.0, 1.0, 0.0);

        advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);

        let heading = heading_of(&creature);
        assert!(heading.cos() < 0.0, "heading {heading} still points outward");
        let turned = heading - PI;
        assert!(turned.abs() <= 0.25 + EPS, "jitter {turned} is out of range");
    }

    #[test]
    fn swimmer_moving_back_inside_is_left_alone() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(6);
        let mut creature = shark(Vec3::new(520.0, 0.0, 0.0), PI, 1.0, 0.0);

        advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);

        assert_eq!(heading_of(&creature), PI);
    }

    #[test]
    fn corner_escape_points_inward_on_both_axes() {
        let position = Vec3::new(610.0, 0.0, -610.0);
        // outward on x, inward on z: a plain half turn would leave through z
        let heading = 0.3_f32;
        let reversed = reverse_course(position, heading, 0.0, 600.0);

        assert!(!heads_outward(position, reversed, 600.0));
        assert!(reversed.cos() <= 0.0);
        assert!(reversed.sin() >= 0.0);
    }

    #[rstest]
    #[case(101.0, 0.05, -0.05)]
    #[case(-151.0, -0.05, 0.05)]
    #[case(101.0, -0.05, -0.05)]
    #[case(0.0, 0.05, 0.05)]
    fn vertical_speed_flips_only_when_leaving_the_band(
        #[case] y: f32,
        #[case] vertical_speed: f32,
        #[case] expected: f32,
    ) {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(7);
        let mut creature = shark(Vec3::new(0.0, y, 0.0), 0.0, 0.0, vertical_speed);

        advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);

        match creature.body {
            Body::Shark { swim } => assert_eq!(swim.vertical_speed, expected),
            _ => unreachable!(),
        }
    }

    #[test]
    fn random_turns_stay_within_the_spread() {
        let mut config = SceneConfig::default();
        config.sharks.motion.turn_chance = 1.0;
        config.sharks.motion.turn_spread = 0.3;
        let mut rng = StdRng::seed_from_u64(8);
        let mut creature = shark(Vec3::ZERO, 1.0, 0.0, 0.0);

        for _ in 0..200 {
            let before = heading_of(&creature);
            advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);
            let delta = heading_of(&creature) - before;
            assert!(delta.abs() <= 0.15 + EPS, "turned by {delta}");
        }
    }

    #[test]
    fn wandering_sharks_never_stray_more_than_a_tick_past_the_bound() {
        let mut config = SceneConfig::default();
        config.sharks.motion.turn_chance = 0.2;
        let bound = config.sharks.motion.horizontal_bound;
        let mut rng = StdRng::seed_from_u64(9);

        for start in 0..8 {
            let heading = start as f32 * PI / 4.0 + 0.1;
            let mut creature = shark(Vec3::new(480.0, 0.0, -480.0), heading, 1.0, 0.08);
            for frame in 0..5_000 {
                advance(&mut creature, Tick::per_frame(frame as f32 / 60.0), &config, &mut rng);
                let p = creature.pose.position;
                assert!(p.x.abs() <= bound + 1.0 + EPS, "x escaped to {}", p.x);
                assert!(p.z.abs() <= bound + 1.0 + EPS, "z escaped to {}", p.z);
                assert!(p.y <= 100.0 + 0.08 + EPS && p.y >= -150.0 - 0.08 - EPS);
            }
        }
    }

    fn swimmer_of_kind(kind: CreatureKind, position: Vec3, heading: f32, speed: f32) -> Creature {
        let swim = Swim::new(heading, speed, 0.04);
        let body = match kind {
            CreatureKind::Shark => Body::Shark { swim },
            // a centre far outside the box keeps cohesion pulling outward
            CreatureKind::SchoolFish => Body::SchoolFish {
                swim,
                school: 0,
                school_center: Vec3::new(3_000.0, 0.0, -3_000.0),
                species: "Sea Bass".to_string(),
            },
            CreatureKind::Turtle => Body::Turtle {
                swim,
                flipper_roll: [0.0; FLIPPER_COUNT],
            },
            CreatureKind::Jellyfish => Body::Jellyfish {
                swim,
                rest_depth: position.y,
                pulse_phase: 0.0,
            },
            CreatureKind::Seaweed => unreachable!("seaweed does not swim"),
        };
        Creature::new(position, body)
    }

    #[rstest]
    #[case(CreatureKind::SchoolFish, 3.0)]
    #[case(CreatureKind::Turtle, 0.5)]
    #[case(CreatureKind::Jellyfish, 0.5)]
    fn every_swimmer_is_turned_back_within_a_tick(#[case] kind: CreatureKind, #[case] speed: f32) {
        let mut config = SceneConfig::default();
        config.fish.motion.turn_chance = 0.2;
        config.turtles.swim.motion.turn_chance = 0.2;
        config.jellyfish.swim.motion.turn_chance = 0.2;
        let bound = match kind {
            CreatureKind::SchoolFish => config.fish.motion.horizontal_bound,
            CreatureKind::Turtle => config.turtles.swim.motion.horizontal_bound,
            _ => config.jellyfish.swim.motion.horizontal_bound,
        };
        let mut rng = StdRng::seed_from_u64(16);

        for (sx, sz) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
            for start in 0..4 {
                let heading = start as f32 * PI / 2.0 + 0.3;
                let position = Vec3::new(sx * (bound - 5.0), 0.0, sz * (bound - 5.0));
                let mut creature = swimmer_of_kind(kind, position, heading, speed);
                for frame in 0..5_000 {
                    let tick = Tick::per_frame(frame as f32 / 60.0);
                    advance(&mut creature, tick, &config, &mut rng);
                    let p = creature.pose.position;
                    assert!(p.x.abs() <= bound + speed + EPS, "{kind:?} x escaped to {}", p.x);
                    assert!(p.z.abs() <= bound + speed + EPS, "{kind:?} z escaped to {}", p.z);
                }
            }
        }
    }

    fn school_fish(position: Vec3, center: Vec3, heading: f32, speed: f32) -> Creature {
        Creature::new(
            position,
            Body::SchoolFish {
                swim: Swim::new(heading, speed, 0.0),
                school: 0,
                school_center: center,
                species: "Angelfish".to_string(),
            },
        )
    }

    #[test]
    fn stray_fish_turns_straight_back_to_its_school() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(10);
        let center = Vec3::new(10.0, 0.0, -20.0);
        let start = center + Vec3::new(90.0, 0.0, 120.0);
        assert!((start - center).length() > 149.0);
        let mut creature = school_fish(start, center, 0.3, 1.5);

        advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);

        let offset = center - creature.pose.position;
        let expected = offset.z.atan2(offset.x);
        assert!((heading_of(&creature) - expected).abs() < EPS);
        assert_eq!(creature.pose.rotation.y, heading_of(&creature));
    }

    #[test]
    fn fish_inside_the_radius_keeps_its_heading() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(11);
        let center = Vec3::ZERO;
        let mut creature = school_fish(Vec3::new(30.0, 0.0, 0.0), center, 0.7, 1.0);

        advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);

        assert_eq!(heading_of(&creature), 0.7);
    }

    #[test]
    fn schools_hold_together_while_wandering() {
        let config = SceneConfig::default();
        let radius = config.fish.cohesion_radius;
        let slack = config.fish.speed_max + config.fish.vertical_speed_spread;
        let mut rng = StdRng::seed_from_u64(12);
        let center = Vec3::new(-150.0, 20.0, 200.0);

        for start in 0..6 {
            let heading = start as f32;
            let mut creature =
                school_fish(center + Vec3::new(40.0, 5.0, 0.0), center, heading, 3.0);
            for frame in 0..4_000 {
                advance(&mut creature, Tick::per_frame(frame as f32 / 60.0), &config, &mut rng);
                let distance = (creature.pose.position - center).length();
                assert!(distance <= radius + slack, "fish drifted {distance} away");
            }
        }
    }

    #[test]
    fn turtle_flippers_are_phase_staggered() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(13);
        let mut creature = Creature::new(
            Vec3::ZERO,
            Body::Turtle {
                swim: Swim::new(0.0, 0.4, 0.0),
                flipper_roll: [0.0; FLIPPER_COUNT],
            },
        );

        advance(&mut creature, Tick::per_frame(2.0), &config, &mut rng);

        let Body::Turtle { flipper_roll, .. } = &creature.body else {
            unreachable!();
        };
        for (index, roll) in flipper_roll.iter().enumerate() {
            let expected = (2.0 * 1.5 + index as f32).sin() * 0.3;
            assert!((roll - expected).abs() < EPS);
        }
        assert_ne!(flipper_roll[0], flipper_roll[1]);
    }

    fn jellyfish(rest_depth: f32, pulse_phase: f32) -> Creature {
        Creature::new(
            Vec3::new(0.0, rest_depth, 0.0),
            Body::Jellyfish {
                swim: Swim::new(0.0, 0.3, 0.0),
                rest_depth,
                pulse_phase,
            },
        )
    }

    #[test]
    fn jellyfish_pulse_stays_within_its_amplitude() {
        let config = calm_config();
        let amplitude = config.jellyfish.pulse_amplitude;
        let mut rng = StdRng::seed_from_u64(14);
        let mut creature = jellyfish(10.0, 1.3);

        for frame in 0..2_000 {
            advance(&mut creature, Tick::per_frame(frame as f32 * 0.037), &config, &mut rng);
            let scale = creature.pose.scale;
            assert!(scale >= 1.0 - amplitude - EPS && scale <= 1.0 + amplitude + EPS);
        }
    }

    #[test]
    fn jellyfish_depth_is_driven_by_phase_not_drift() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(15);
        let mut creature = jellyfish(-20.0, 0.5);

        advance(&mut creature, Tick::per_frame(4.0), &config, &mut rng);
        let expected = -20.0 + (4.0_f32 * 0.5 + 0.5).sin() * config.jellyfish.bob_amplitude;
        assert!((creature.pose.position.y - expected).abs() < EPS);

        // same clock, same depth
        advance(&mut creature, Tick::per_frame(4.0), &config, &mut rng);
        assert!((creature.pose.position.y - expected).abs() < EPS);
    }

    #[test]
    fn jellyfish_yaw_drifts_independently_of_heading() {
        let config = calm_config();
        let mut rng = StdRng::seed_from_u64(16);
        let mut creature = jellyfish(0.0, 0.0);

        for _ in 0..100 {
            advance(&mut creature, Tick::per_frame(0.0), &config, &mut rng);
        }

        assert!((creature.pose.rotation.y - 0.5).abs() < EPS);
        assert_eq!(heading_of(&creature), 0.0);
    }

    #[test]
    fn seaweed_sways_but_never_moves() {
        let config = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(17);
        let anchor = Vec3::new(120.0, -80.0, -45.0);
        let sway_amount = 0.15;
        let mut creature = Creature::new(
            anchor,
            Body::Seaweed {
                height: 50.0,
                sway_phase: 2.0,
                sway_amount,
            },
        );

        let mut swayed = false;
        for frame in 0..1_000 {
            advance(&mut creature, Tick::per_frame(frame as f32 * 0.05), &config, &mut rng);
            assert_eq!(creature.pose.position, anchor);
            assert!(creature.pose.rotation.x.abs() <= sway_amount + EPS);
            assert!(creature.pose.rotation.z.abs() <= sway_amount * 0.7 + EPS);
            assert_eq!(creature.pose.rotation.y, 0.0);
            swayed |= creature.pose.rotation.x.abs() > 0.1;
        }
        assert!(swayed);
    }
}
