//! Short-lived, click-driven effects.
//!
//! Each effect records when it was created and how long it lives. The
//! timeline keeps them ordered by expiry so a single pass per tick can
//! retire everything that is due. Effects are independent: there is no
//! de-duplication and no cap on how many may overlap.

use crate::config::EffectsConfig;
use crate::info::CreatureInfo;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    Ripple { origin: Vec3 },
    InfoPanel { info: CreatureInfo },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransientEffect {
    pub id: EffectId,
    pub kind: EffectKind,
    pub created_at: f64,
    pub lifetime: f64,
}

impl TransientEffect {
    pub fn expires_at(&self) -> f64 {
        self.created_at + self.lifetime
    }

    /// Uses the same key the timeline sorts by, so expiry is monotonic
    /// along it
    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at()
    }

    /// Fraction of the lifetime elapsed, clamped to `[0, 1]`
    pub fn progress(&self, now: f64) -> f32 {
        ((now - self.created_at) / self.lifetime).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, Default)]
pub struct EffectTimeline {
    // sorted by expiry time
    effects: Vec<TransientEffect>,
    next_id: u64,
}

impl EffectTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: EffectKind, now: f64, lifetime: f64) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;

        let effect = TransientEffect {
            id,
            kind,
            created_at: now,
            lifetime,
        };
        let expires_at = effect.expires_at();
        let index = self
            .effects
            .partition_point(|existing| existing.expires_at() <= expires_at);
        self.effects.insert(index, effect);
        id
    }

    pub fn ripple(&mut self, origin: Vec3, now: f64, config: &EffectsConfig) -> EffectId {
        self.spawn(EffectKind::Ripple { origin }, now, config.ripple_lifetime)
    }

    pub fn info_panel(&mut self, info: CreatureInfo, now: f64, config: &EffectsConfig) -> EffectId {
        self.spawn(EffectKind::InfoPanel { info }, now, config.info_lifetime)
    }

    /// Removes and returns every effect whose lifetime has run out
    pub fn expire(&mut self, now: f64) -> Vec<TransientEffect> {
        let due = self
            .effects
            .iter()
            .take_while(|effect| effect.is_expired(now))
            .count();
        self.effects.drain(..due).collect()
    }

    pub fn get(&self, id: EffectId) -> Option<&TransientEffect> {
        self.effects.iter().find(|effect| effect.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransientEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// What a ripple looks like at a given point of its life
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFrame {
    pub scale: f32,
    pub opacity: f32,
}

pub fn ripple_frame(progress: f32, config: &EffectsConfig) -> RippleFrame {
    let progress = progress.clamp(0.0, 1.0);
    RippleFrame {
        scale: 1.0 + progress * config.ripple_growth,
        opacity: (config.ripple_opacity * (1.0 - progress)).max(0.0),
    }
}

/// Opacity of the startup overlay `elapsed` seconds in, or `None` once it
/// has fully faded and should be removed
pub fn loading_overlay_opacity(elapsed: f32, config: &EffectsConfig) -> Option<f32> {
    if elapsed < config.loading_delay {
        return Some(1.0);
    }
    let fading = elapsed - config.loading_delay;
    if fading >= config.loading_fade {
        return None;
    }
    Some(1.0 - fading / config.loading_fade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FRAME: f64 = 1.0 / 60.0;

    fn info(name: &str) -> CreatureInfo {
        CreatureInfo {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn ripple_is_retired_after_one_second() {
        let config = EffectsConfig::default();
        let mut timeline = EffectTimeline::new();
        let id = timeline.ripple(Vec3::ZERO, 5.0, &config);

        let mut now = 5.0;
        let mut removed_at = None;
        while removed_at.is_none() {
            now += FRAME;
            let expired = timeline.expire(now);
            if expired.iter().any(|effect| effect.id == id) {
                removed_at = Some(now);
            }
            assert!(now < 10.0, "ripple never expired");
        }

        let lived = removed_at.unwrap() - 5.0;
        assert!((lived - 1.0).abs() <= FRAME + 1e-9, "ripple lived {lived}s");
        assert!(timeline.is_empty());
    }

    #[test]
    fn ripple_never_renders_with_negative_opacity() {
        let config = EffectsConfig::default();
        let mut timeline = EffectTimeline::new();
        let id = timeline.ripple(Vec3::ONE, 0.0, &config);
        let effect = timeline.get(id).unwrap().clone();

        for step in 0..=90 {
            let now = step as f64 * FRAME;
            let frame = ripple_frame(effect.progress(now), &config);
            assert!(frame.opacity >= 0.0);
            assert!(frame.opacity <= config.ripple_opacity);
            assert!(frame.scale >= 1.0 && frame.scale <= 1.0 + config.ripple_growth);
        }
    }

    #[rstest]
    #[case(0.0, 1.0, 0.8)]
    #[case(0.5, 11.0, 0.4)]
    #[case(1.0, 21.0, 0.0)]
    #[case(1.7, 21.0, 0.0)]
    fn ripple_grows_and_fades_linearly(
        #[case] progress: f32,
        #[case] scale: f32,
        #[case] opacity: f32,
    ) {
        let frame = ripple_frame(progress, &EffectsConfig::default());
        assert!((frame.scale - scale).abs() < 1e-5);
        assert!((frame.opacity - opacity).abs() < 1e-5);
    }

    #[test]
    fn panels_expire_independently() {
        let config = EffectsConfig::default();
        let mut timeline = EffectTimeline::new();
        let first = timeline.info_panel(info("Sea Turtle"), 1.0, &config);
        let second = timeline.info_panel(info("Jellyfish"), 2.5, &config);

        assert!(timeline.expire(3.9).is_empty());

        let expired = timeline.expire(4.0);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, first);
        assert!(timeline.get(second).is_some());

        let expired = timeline.expire(5.5);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, second);
    }

    #[test]
    fn mixed_lifetimes_stay_ordered_by_expiry() {
        let config = EffectsConfig::default();
        let mut timeline = EffectTimeline::new();
        let panel = timeline.info_panel(info("Angelfish"), 0.0, &config);
        let ripple = timeline.ripple(Vec3::ZERO, 0.5, &config);

        let order: Vec<_> = timeline.iter().map(|effect| effect.id).collect();
        assert_eq!(order, vec![ripple, panel]);

        let expired = timeline.expire(1.5);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, ripple);
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn rapid_clicks_stack_without_a_cap() {
        let config = EffectsConfig::default();
        let mut timeline = EffectTimeline::new();

        for click in 0..500 {
            let now = click as f64 * 0.001;
            timeline.ripple(Vec3::new(click as f32, 0.0, 0.0), now, &config);
            timeline.info_panel(info("Great White Shark"), now, &config);
        }
        assert_eq!(timeline.len(), 1000);

        // every ripple is past its second, no panel is past its three
        let expired = timeline.expire(2.0);
        assert_eq!(expired.len(), 500);
        assert!(
            expired
                .iter()
                .all(|effect| matches!(effect.kind, EffectKind::Ripple { .. }))
        );
        assert_eq!(timeline.len(), 500);
    }

    #[test]
    fn expiry_never_leaves_a_due_effect_behind() {
        let mut timeline = EffectTimeline::new();
        let lifetimes = [0.2, 0.3, 0.7, 1.0, 3.0];
        for click in 0..200 {
            let now = click as f64 * 0.1;
            let lifetime = lifetimes[click % lifetimes.len()];
            timeline.spawn(EffectKind::Ripple { origin: Vec3::ZERO }, now, lifetime);
        }
        let deadlines: Vec<f64> = timeline.iter().map(TransientEffect::expires_at).collect();

        for now in deadlines {
            let expired = timeline.expire(now);
            assert!(expired.iter().all(|effect| effect.is_expired(now)));
            assert!(
                timeline.iter().all(|effect| !effect.is_expired(now)),
                "an effect due at {now} was kept"
            );
        }
        assert!(timeline.is_empty());
    }

    #[rstest]
    #[case(0.0, Some(1.0))]
    #[case(1.99, Some(1.0))]
    #[case(2.25, Some(0.5))]
    #[case(2.5, None)]
    #[case(9.0, None)]
    fn loading_overlay_waits_then_fades(#[case] elapsed: f32, #[case] expected: Option<f32>) {
        let opacity = loading_overlay_opacity(elapsed, &EffectsConfig::default());
        match (opacity, expected) {
            (Some(actual), Some(expected)) => assert!((actual - expected).abs() < 1e-5),
            (actual, expected) => assert_eq!(actual, expected),
        }
    }
}
