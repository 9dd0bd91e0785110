//! Runtime gameplay configuration loaded from `assets/trainer.toml`.
//!
//! [`TrainerConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_trainer_config`] reads
//! `assets/trainer.toml` and overwrites the defaults with any values present
//! in the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<TrainerConfig>` to any system parameter list and read
//! values with `config.spawn_interval`, `config.target_lifetime`, etc.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/trainer.toml`.
//! 2. Restart the game — no recompilation required.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `TrainerConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay and presentation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/trainer.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    // ── Play Surface ─────────────────────────────────────────────────────────
    pub surface_width: f32,
    pub surface_height: f32,

    // ── Spawning ─────────────────────────────────────────────────────────────
    pub spawn_interval: f32,
    pub target_diameter_min: f32,
    pub target_diameter_max: f32,
    pub target_lifetime: f32,

    // ── Target Geometry ──────────────────────────────────────────────────────
    pub hit_zone_coefficient: f32,
    pub hit_zone_ring_count: u32,
    pub dot_coefficient: f32,

    // ── Rendering ────────────────────────────────────────────────────────────
    pub ring_stroke_width: f32,
    pub circle_segments: u32,
    pub hud_font_size: f32,
    pub stats_font_size: f32,

    // ── Randomness ───────────────────────────────────────────────────────────
    /// Fixed seed for the spawn RNG.  `None` (the default) seeds from OS
    /// entropy; set a value to replay the exact same target sequence.
    pub rng_seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            // Play Surface
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            // Spawning
            spawn_interval: SPAWN_INTERVAL_SECS,
            target_diameter_min: TARGET_DIAMETER_MIN,
            target_diameter_max: TARGET_DIAMETER_MAX,
            target_lifetime: TARGET_LIFETIME_SECS,
            // Target Geometry
            hit_zone_coefficient: HIT_ZONE_COEFFICIENT,
            hit_zone_ring_count: HIT_ZONE_RING_COUNT,
            dot_coefficient: DOT_COEFFICIENT,
            // Rendering
            ring_stroke_width: RING_STROKE_WIDTH,
            circle_segments: CIRCLE_SEGMENTS,
            hud_font_size: HUD_FONT_SIZE,
            stats_font_size: STATS_FONT_SIZE,
            // Randomness
            rng_seed: None,
        }
    }
}

/// Startup system: attempt to load `assets/trainer.toml` and overwrite the
/// `TrainerConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `init_resource`).
pub fn load_trainer_config(mut config: ResMut<TrainerConfig>) {
    let path = "assets/trainer.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<TrainerConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded trainer config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
