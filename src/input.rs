//! Pointer input routing: click → first matching target → hit, else stray.
//!
//! Input is abstracted through the [`ClickIntent`] resource: the
//! device-reading system records a pressed surface-space point, and
//! [`apply_click_system`] consumes it.  Tests populate the resource directly
//! to drive routing without a real window or mouse.

use crate::score::{Score, SessionStats};
use crate::target::{SpawnIndex, Target};
use bevy::input::mouse::MouseButton;
use bevy::prelude::*;

/// Pending pointer press for this frame, in surface coordinates.
///
/// `Some(point)` is written by [`mouse_to_intent_system`] on a left press and
/// taken by [`apply_click_system`]; `None` means no unrouted press.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ClickIntent {
    pub press: Option<Vec2>,
}

/// Record the cursor position as a pending press on left-button down.
///
/// The window's logical coordinates are already surface coordinates
/// (top-left origin, y down), so no conversion is needed here.
pub fn mouse_to_intent_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut intent: ResMut<ClickIntent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        intent.press = Some(cursor);
    }
}

/// Route the pending press: resolve the first-registered matching target as a
/// hit, or record a stray-click penalty when nothing matches.
///
/// Matches are snapshotted before any mutation, and "first" means the lowest
/// [`SpawnIndex`] — registration order, independent of ECS iteration order.
/// Exactly one target resolves per press, however many overlap the point.
pub fn apply_click_system(
    mut commands: Commands,
    mut intent: ResMut<ClickIntent>,
    mut targets: Query<(Entity, &mut Target, &SpawnIndex)>,
    mut score: ResMut<Score>,
    mut stats: ResMut<SessionStats>,
) {
    let Some(point) = intent.press.take() else {
        return;
    };

    let first_match = targets
        .iter()
        .filter(|(_, target, _)| target.is_active() && target.contains_point(point))
        .min_by_key(|(_, _, index)| **index)
        .map(|(entity, _, _)| entity);

    match first_match {
        Some(entity) => {
            let Ok((_, mut target, _)) = targets.get_mut(entity) else {
                return;
            };
            match target.resolve_hit() {
                Ok(_) => {
                    score.record_hit();
                    stats.hits += 1;
                    commands.entity(entity).despawn();
                }
                // Unreachable through the snapshot filter above; surfaced
                // rather than swallowed in case a future system resolves
                // targets outside this router.
                Err(e) => eprintln!("⚠ Click routing skipped a resolved target: {e}"),
            }
        }
        None => {
            score.record_stray_click();
            stats.stray_clicks += 1;
        }
    }
}
