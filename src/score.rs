//! Score accounting and session counters.
//!
//! The score is a single non-negative integer: +1 per hit, −1 per expired
//! target or stray click, floored at zero.  [`SessionStats`] keeps the raw
//! event counts for the HUD stats line.

use bevy::prelude::*;

/// The player's current score.
///
/// Stored as a `u32` so `score >= 0` holds by construction; penalties use
/// saturating subtraction for the zero floor.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    points: u32,
}

impl Score {
    /// A target was clicked: +1.
    #[inline]
    pub fn record_hit(&mut self) {
        self.points += 1;
    }

    /// A target expired unclicked: −1, floored at zero.
    #[inline]
    pub fn record_miss(&mut self) {
        self.penalize();
    }

    /// A click landed on empty surface: −1, floored at zero.
    #[inline]
    pub fn record_stray_click(&mut self) {
        self.penalize();
    }

    /// Current score for display.
    #[inline]
    pub fn total(self) -> u32 {
        self.points
    }

    fn penalize(&mut self) {
        self.points = self.points.saturating_sub(1);
    }
}

/// Raw per-session event counters, displayed under the score.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SessionStats {
    /// Targets produced by the spawner.
    pub spawned: u32,
    /// Targets resolved by a click.
    pub hits: u32,
    /// Targets that aged out unclicked.
    pub expired: u32,
    /// Clicks that landed on empty surface.
    pub stray_clicks: u32,
}

impl SessionStats {
    /// Total clicks routed (hits + strays).
    #[inline]
    pub fn shots(&self) -> u32 {
        self.hits + self.stray_clicks
    }

    /// Fraction of clicks that landed on a target; 0.0 before the first click.
    pub fn accuracy(&self) -> f32 {
        if self.shots() == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots() as f32
        }
    }
}
