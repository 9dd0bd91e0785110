//! Target spawning and expiry.
//!
//! One target is produced per spawn-timer tick, placed randomly within the
//! current [`SurfaceBounds`].  There is deliberately no cap on live targets —
//! the expiry system is what keeps the surface from filling up, by resolving
//! targets as missed once their lifetime runs out.

use crate::config::TrainerConfig;
use crate::score::{Score, SessionStats};
use crate::target::{SpawnIndex, Target, TargetAge};
use bevy::prelude::*;
use rand::rngs::StdRng;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Repeating timer driving target production.
#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

/// The single shared spawn RNG.
///
/// One generator for the whole session, optionally seeded through
/// [`TrainerConfig::rng_seed`], so a recorded seed replays the exact same
/// target sequence.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

/// Monotonic counter handing out [`SpawnIndex`] values.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SpawnSequence(u64);

impl SpawnSequence {
    /// Take the next registration index.
    pub fn next_index(&mut self) -> u64 {
        let index = self.0;
        self.0 += 1;
        index
    }
}

/// Dimensions of the play surface in surface units.
///
/// Initialised from config and kept in sync with the window's logical size,
/// so cursor coordinates always map 1:1 onto surface coordinates.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SurfaceBounds {
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Convert a surface-space point (top-left origin, y down) to world space
/// (surface centred on the origin, y up) for entity transforms.
pub fn surface_to_world(point: Vec2, bounds: SurfaceBounds) -> Vec2 {
    Vec2::new(point.x - bounds.width / 2.0, bounds.height / 2.0 - point.y)
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Produce one randomized target per timer tick.
///
/// A construction failure (degenerate bounds, e.g. a window collapsed to zero
/// height) logs and skips the tick — spawning resumes as soon as the bounds
/// are valid again.
#[allow(clippy::too_many_arguments)]
pub fn target_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<SpawnRng>,
    mut sequence: ResMut<SpawnSequence>,
    bounds: Res<SurfaceBounds>,
    config: Res<TrainerConfig>,
    mut stats: ResMut<SessionStats>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    match Target::random(bounds.as_vec2(), &config, &mut rng.0) {
        Ok(target) => {
            let world = surface_to_world(target.center(), *bounds);
            stats.spawned += 1;
            commands.spawn((
                target,
                SpawnIndex(sequence.next_index()),
                TargetAge::default(),
                Transform::from_translation(world.extend(0.0)),
                Visibility::default(),
            ));
        }
        Err(e) => eprintln!("⚠ Target spawn skipped: {e}"),
    }
}

/// Age every live target; resolve targets past their lifetime as missed.
///
/// An expired target costs one point (floored at zero) and is despawned along
/// with its visuals.  Targets a click already resolved this frame are gone
/// from the query by the time this runs, so the miss penalty can never stack
/// on top of a hit.
pub fn target_expiry_system(
    mut commands: Commands,
    time: Res<Time>,
    mut targets: Query<(Entity, &mut Target, &mut TargetAge)>,
    config: Res<TrainerConfig>,
    mut score: ResMut<Score>,
    mut stats: ResMut<SessionStats>,
) {
    let dt = time.delta_secs();
    for (entity, mut target, mut age) in targets.iter_mut() {
        age.secs += dt;
        if age.secs < config.target_lifetime || !target.is_active() {
            continue;
        }
        if target.resolve_miss().is_ok() {
            score.record_miss();
            stats.expired += 1;
        }
        commands.entity(entity).despawn();
    }
}

/// Track the window's logical size into [`SurfaceBounds`] so resizes keep the
/// cursor↔surface mapping exact.
pub fn sync_surface_bounds_system(
    windows: Query<&Window>,
    mut bounds: ResMut<SurfaceBounds>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (w, h) = (window.width(), window.height());
    if (bounds.width - w).abs() > f32::EPSILON || (bounds.height - h).abs() > f32::EPSILON {
        bounds.width = w;
        bounds.height = h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_sequence_is_monotonic_from_zero() {
        let mut seq = SpawnSequence::default();
        assert_eq!(seq.next_index(), 0);
        assert_eq!(seq.next_index(), 1);
        assert_eq!(seq.next_index(), 2);
    }

    #[test]
    fn surface_to_world_maps_corners_and_center() {
        let bounds = SurfaceBounds {
            width: 400.0,
            height: 300.0,
        };
        // Surface centre → world origin.
        assert_eq!(
            surface_to_world(Vec2::new(200.0, 150.0), bounds),
            Vec2::ZERO
        );
        // Top-left corner → (−w/2, +h/2): y flips from down to up.
        assert_eq!(
            surface_to_world(Vec2::ZERO, bounds),
            Vec2::new(-200.0, 150.0)
        );
        // Bottom-right corner → (+w/2, −h/2).
        assert_eq!(
            surface_to_world(Vec2::new(400.0, 300.0), bounds),
            Vec2::new(200.0, -150.0)
        );
    }
}
