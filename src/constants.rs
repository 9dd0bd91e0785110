//! Centralised gameplay and presentation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::TrainerConfig`] mirrors every constant for runtime
//! override via `assets/trainer.toml`.
//!
//! ## Tuning guidance
//!
//! Each constant includes the observable consequence of changing it.

// ── Play Surface ──────────────────────────────────────────────────────────────

/// Width of the play surface in surface units (matches the window's logical
/// width, so cursor coordinates map 1:1 onto surface coordinates).
pub const SURFACE_WIDTH: f32 = 1200.0;

/// Height of the play surface (matches the window's logical height).
pub const SURFACE_HEIGHT: f32 = 680.0;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Seconds between consecutive target spawns.
///
/// Lower values crowd the surface faster and raise the expiry pressure on the
/// player; 2.0 gives a relaxed warm-up pace.
pub const SPAWN_INTERVAL_SECS: f32 = 2.0;

/// Smallest target diameter the spawner will produce (surface units).
pub const TARGET_DIAMETER_MIN: f32 = 50.0;

/// Largest target diameter the spawner will produce (surface units).
///
/// Diameters above the shorter surface axis are clamped at spawn time so the
/// full circle always fits the surface.
pub const TARGET_DIAMETER_MAX: f32 = 150.0;

/// Seconds an unclicked target stays alive before it expires as a miss.
///
/// Raising this softens the game considerably: with a 2 s spawn interval and
/// a 5 s lifetime, at most ~3 targets are in flight at once.
pub const TARGET_LIFETIME_SECS: f32 = 5.0;

// ── Target Geometry ───────────────────────────────────────────────────────────

/// Hit-zone diameter as a fraction of the full target diameter.
///
/// The hit zone is purely visual — the concentric rings step from the full
/// diameter down to this inner diameter.  Clicks are tested against the full
/// outer circle.
pub const HIT_ZONE_COEFFICIENT: f32 = 0.8;

/// Number of concentric rings drawn between the hit-zone and full diameters.
pub const HIT_ZONE_RING_COUNT: u32 = 3;

/// Centre-dot diameter as a fraction of the full target diameter.
pub const DOT_COEFFICIENT: f32 = 0.1;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Stroke width of the target outline and rings (surface units).
pub const RING_STROKE_WIDTH: f32 = 2.0;

/// Segment count for circle and ring meshes.  64 is visually smooth at the
/// largest target diameter; higher values cost vertices for no visible gain.
pub const CIRCLE_SEGMENTS: u32 = 64;

/// Font size of the score HUD text.
pub const HUD_FONT_SIZE: f32 = 24.0;

/// Font size of the session-stats line under the score.
pub const STATS_FONT_SIZE: f32 = 16.0;
