//! Session plugin: resource setup and the core gameplay schedule.
//!
//! All gameplay mutation runs in one explicitly chained `Update` sequence —
//! click routing, then spawning, then expiry — so each handler runs to
//! completion before the next and a click can never race the expiry pass on
//! the same target.

use crate::config::TrainerConfig;
use crate::input::{self, ClickIntent};
use crate::score::{Score, SessionStats};
use crate::spawner::{self, SpawnRng, SpawnSequence, SpawnTimer, SurfaceBounds};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct TrainerPlugin;

impl Plugin for TrainerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrainerConfig>()
            .init_resource::<Score>()
            .init_resource::<SessionStats>()
            .init_resource::<SpawnSequence>()
            .init_resource::<ClickIntent>()
            .add_systems(Startup, init_session_state)
            .add_systems(
                Update,
                (
                    input::apply_click_system,
                    spawner::target_spawn_system,
                    spawner::target_expiry_system,
                )
                    .chain(),
            );
    }
}

/// Build the per-session resources from the (possibly file-overridden) config.
///
/// Registered by [`TrainerPlugin`]; the binary orders
/// [`crate::config::load_trainer_config`] before this so file overrides land
/// first.
pub fn init_session_state(mut commands: Commands, config: Res<TrainerConfig>) {
    commands.insert_resource(SurfaceBounds {
        width: config.surface_width,
        height: config.surface_height,
    });
    commands.insert_resource(SpawnTimer(Timer::from_seconds(
        config.spawn_interval,
        TimerMode::Repeating,
    )));
    let rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    commands.insert_resource(SpawnRng(rng));
    println!(
        "✓ Session ready: {}×{} surface, one target every {}s",
        config.surface_width, config.surface_height, config.spawn_interval
    );
}
