//! The target entity: circle geometry, hit testing, and the
//! spawn-to-resolution lifecycle.
//!
//! A target is a circle in **surface space** (top-left origin, y down — the
//! same space the cursor reports in).  The full outer circle is the hit
//! region; the smaller hit-zone diameter only controls where the concentric
//! rings are drawn.
//!
//! ## Lifecycle
//!
//! | State    | Meaning                              | Terminal |
//! |----------|--------------------------------------|----------|
//! | `Active` | On the surface, clickable            | no       |
//! | `Hit`    | Resolved by a click inside the circle| yes      |
//! | `Missed` | Resolved by the lifetime expiring    | yes      |
//!
//! Resolution is exactly-once: `resolve_hit` / `resolve_miss` return the
//! outcome on the first call and [`GameError::AlreadyResolved`] on any later
//! call.  There is no transition out of a terminal state.

use crate::config::TrainerConfig;
use crate::error::{validate_bounds, GameError, GameResult};
use bevy::prelude::*;
use rand::Rng;

// ── Lifecycle types ───────────────────────────────────────────────────────────

/// Lifecycle state of a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Initial state: live on the surface, eligible for hit testing.
    Active,
    /// Terminal: resolved by a successful click.
    Hit,
    /// Terminal: resolved by lifetime expiry.
    Missed,
}

impl TargetState {
    /// Stable label used in error reporting.
    pub fn label(self) -> &'static str {
        match self {
            TargetState::Active => "active",
            TargetState::Hit => "hit",
            TargetState::Missed => "missed",
        }
    }
}

/// Terminal outcome returned by a successful resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    Hit,
    Missed,
}

// ── Components ────────────────────────────────────────────────────────────────

/// A clickable circular target.
///
/// Geometry invariant, guaranteed by both constructors:
/// `0 < hit_zone_diameter <= diameter`, and the full circle lies within the
/// surface bounds it was constructed against.
#[derive(Component, Debug, Clone)]
pub struct Target {
    center: Vec2,
    diameter: f32,
    hit_zone_diameter: f32,
    state: TargetState,
}

/// Registration order of a target, from the session-wide spawn counter.
///
/// ECS query iteration order is unrelated to spawn order, so "first target
/// wins" routing sorts on this instead.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnIndex(pub u64);

/// Seconds this target has been alive; driven by the expiry system.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TargetAge {
    pub secs: f32,
}

impl Target {
    /// Build a target with explicit geometry.
    ///
    /// The caller is responsible for the geometry invariant
    /// (`0 < hit_zone_diameter <= diameter`); use [`Target::random`] for
    /// bounds-checked randomized construction.
    pub fn new(center: Vec2, diameter: f32, hit_zone_diameter: f32) -> Self {
        debug_assert!(diameter > 0.0, "target diameter must be positive");
        debug_assert!(
            hit_zone_diameter > 0.0 && hit_zone_diameter <= diameter,
            "hit zone must be a non-empty concentric subset of the target"
        );
        Self {
            center,
            diameter,
            hit_zone_diameter,
            state: TargetState::Active,
        }
    }

    /// Build a randomized target that fits entirely within `bounds`.
    ///
    /// The diameter is drawn uniformly from the configured range, clamped so
    /// the circle can fit the shorter surface axis.  The centre is then drawn
    /// uniformly from the positions that keep the full circle on the surface:
    /// offset in `[0, bound − diameter]` per axis, plus the radius.
    ///
    /// Fails with [`GameError::InvalidBounds`] when either dimension is
    /// non-positive.
    pub fn random(bounds: Vec2, config: &TrainerConfig, rng: &mut impl Rng) -> GameResult<Self> {
        validate_bounds(bounds.x, bounds.y)?;

        let max_fit = bounds.x.min(bounds.y);
        let high = config.target_diameter_max.min(max_fit);
        let low = config.target_diameter_min.min(high);
        let diameter = rng.gen_range(low..=high);
        let radius = diameter / 2.0;

        let x = rng.gen_range(0.0..=(bounds.x - diameter)) + radius;
        let y = rng.gen_range(0.0..=(bounds.y - diameter)) + radius;

        Ok(Self::new(
            Vec2::new(x, y),
            diameter,
            diameter * config.hit_zone_coefficient,
        ))
    }

    /// Centre of the circle in surface coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Full (outer) diameter.
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Inner hit-zone diameter.  Visual only — see [`Target::contains_point`].
    #[inline]
    pub fn hit_zone_diameter(&self) -> f32 {
        self.hit_zone_diameter
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> TargetState {
        self.state
    }

    /// `true` until the target resolves.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == TargetState::Active
    }

    /// Whether `point` (surface space) lies inside the **outer** circle.
    ///
    /// The outer circle is the hit region; the rings between the hit-zone and
    /// full diameters are cosmetic.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.diameter / 2.0
    }

    /// Resolve this target as hit by a click.
    ///
    /// Returns [`TargetOutcome::Hit`] on the first call; any call on a
    /// resolved target fails with [`GameError::AlreadyResolved`].
    pub fn resolve_hit(&mut self) -> GameResult<TargetOutcome> {
        self.resolve(TargetState::Hit, TargetOutcome::Hit)
    }

    /// Resolve this target as missed (lifetime expired).
    ///
    /// Returns [`TargetOutcome::Missed`] on the first call; any call on a
    /// resolved target fails with [`GameError::AlreadyResolved`].
    pub fn resolve_miss(&mut self) -> GameResult<TargetOutcome> {
        self.resolve(TargetState::Missed, TargetOutcome::Missed)
    }

    fn resolve(&mut self, next: TargetState, outcome: TargetOutcome) -> GameResult<TargetOutcome> {
        match self.state {
            TargetState::Active => {
                self.state = next;
                Ok(outcome)
            }
            resolved => Err(GameError::AlreadyResolved {
                state: resolved.label(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> TrainerConfig {
        TrainerConfig::default()
    }

    // ── Randomized construction ───────────────────────────────────────────────

    #[test]
    fn random_targets_fit_within_bounds() {
        let bounds = Vec2::new(1200.0, 680.0);
        let config = config();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let target = Target::random(bounds, &config, &mut rng).expect("bounds are valid");
            let r = target.diameter() / 2.0;
            let c = target.center();
            assert!(
                c.x - r >= 0.0 && c.x + r <= bounds.x,
                "circle x-extent [{}, {}] escapes [0, {}]",
                c.x - r,
                c.x + r,
                bounds.x
            );
            assert!(
                c.y - r >= 0.0 && c.y + r <= bounds.y,
                "circle y-extent [{}, {}] escapes [0, {}]",
                c.y - r,
                c.y + r,
                bounds.y
            );
        }
    }

    #[test]
    fn random_diameter_stays_in_configured_range() {
        let bounds = Vec2::new(1200.0, 680.0);
        let config = config();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let target = Target::random(bounds, &config, &mut rng).unwrap();
            assert!(
                target.diameter() >= config.target_diameter_min
                    && target.diameter() <= config.target_diameter_max,
                "diameter {} outside [{}, {}]",
                target.diameter(),
                config.target_diameter_min,
                config.target_diameter_max
            );
        }
    }

    #[test]
    fn fixed_diameter_constrains_center_to_inset_region() {
        // Degenerate diameter range pins the diameter at 100, so on a 400×400
        // surface every centre must land in [50, 350] on both axes.
        let bounds = Vec2::new(400.0, 400.0);
        let config = TrainerConfig {
            target_diameter_min: 100.0,
            target_diameter_max: 100.0,
            ..TrainerConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let target = Target::random(bounds, &config, &mut rng).unwrap();
            assert_eq!(target.diameter(), 100.0);
            let c = target.center();
            assert!(
                (50.0..=350.0).contains(&c.x) && (50.0..=350.0).contains(&c.y),
                "centre ({}, {}) outside [50, 350]²",
                c.x,
                c.y
            );
        }
    }

    #[test]
    fn oversized_diameter_range_is_clamped_to_surface() {
        // A 120-unit surface cannot hold a 150-unit circle; the sampled
        // diameter must be clamped to fit rather than panic or escape.
        let bounds = Vec2::new(120.0, 400.0);
        let config = config();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let target = Target::random(bounds, &config, &mut rng).unwrap();
            assert!(
                target.diameter() <= 120.0,
                "diameter {} cannot fit a 120-unit axis",
                target.diameter()
            );
            let r = target.diameter() / 2.0;
            assert!(target.center().x - r >= 0.0 && target.center().x + r <= bounds.x);
        }
    }

    #[test]
    fn non_positive_bounds_are_rejected() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(1);
        for bounds in [
            Vec2::new(0.0, 400.0),
            Vec2::new(400.0, 0.0),
            Vec2::new(-100.0, 680.0),
        ] {
            let result = Target::random(bounds, &config, &mut rng);
            assert!(
                matches!(result, Err(GameError::InvalidBounds { .. })),
                "bounds {bounds:?} should be rejected"
            );
        }
    }

    #[test]
    fn hit_zone_is_concentric_fraction_of_diameter() {
        let bounds = Vec2::new(800.0, 600.0);
        let config = config();
        let mut rng = StdRng::seed_from_u64(5);
        let target = Target::random(bounds, &config, &mut rng).unwrap();
        assert!(
            (target.hit_zone_diameter() - target.diameter() * config.hit_zone_coefficient).abs()
                < 1e-4
        );
        assert!(target.hit_zone_diameter() <= target.diameter());
    }

    #[test]
    fn seeded_rng_reproduces_identical_geometry() {
        let bounds = Vec2::new(1200.0, 680.0);
        let config = config();
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);

        for _ in 0..20 {
            let ta = Target::random(bounds, &config, &mut a).unwrap();
            let tb = Target::random(bounds, &config, &mut b).unwrap();
            assert_eq!(ta.center(), tb.center());
            assert_eq!(ta.diameter(), tb.diameter());
        }
    }

    // ── Hit testing ───────────────────────────────────────────────────────────

    #[test]
    fn contains_point_true_at_center() {
        let target = Target::new(Vec2::new(200.0, 100.0), 80.0, 64.0);
        assert!(target.contains_point(Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn contains_point_true_on_rim_false_just_beyond() {
        let target = Target::new(Vec2::new(200.0, 100.0), 80.0, 64.0);
        assert!(target.contains_point(Vec2::new(240.0, 100.0)), "rim is in");
        assert!(
            !target.contains_point(Vec2::new(240.1, 100.0)),
            "just past the rim is out"
        );
    }

    #[test]
    fn contains_point_uses_outer_circle_not_hit_zone() {
        // Point between the hit-zone radius (32) and the outer radius (40):
        // inside the cosmetic rings, still a valid hit.
        let target = Target::new(Vec2::ZERO, 80.0, 64.0);
        assert!(target.contains_point(Vec2::new(36.0, 0.0)));
    }

    // ── State machine ─────────────────────────────────────────────────────────

    #[test]
    fn resolve_hit_returns_outcome_once() {
        let mut target = Target::new(Vec2::ZERO, 60.0, 48.0);
        assert!(target.is_active());
        assert_eq!(target.resolve_hit(), Ok(TargetOutcome::Hit));
        assert_eq!(target.state(), TargetState::Hit);
        assert_eq!(
            target.resolve_hit(),
            Err(GameError::AlreadyResolved { state: "hit" })
        );
    }

    #[test]
    fn resolve_miss_returns_outcome_once() {
        let mut target = Target::new(Vec2::ZERO, 60.0, 48.0);
        assert_eq!(target.resolve_miss(), Ok(TargetOutcome::Missed));
        assert_eq!(target.state(), TargetState::Missed);
        assert_eq!(
            target.resolve_miss(),
            Err(GameError::AlreadyResolved { state: "missed" })
        );
    }

    #[test]
    fn terminal_states_reject_the_other_resolution_too() {
        let mut hit = Target::new(Vec2::ZERO, 60.0, 48.0);
        hit.resolve_hit().unwrap();
        assert!(hit.resolve_miss().is_err(), "hit target cannot become missed");

        let mut missed = Target::new(Vec2::ZERO, 60.0, 48.0);
        missed.resolve_miss().unwrap();
        assert!(
            missed.resolve_hit().is_err(),
            "missed target cannot become hit"
        );
    }
}
