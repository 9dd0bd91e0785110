use bevy::prelude::*;
use bevy::window::WindowResolution;

use bullseye::config;
use bullseye::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use bullseye::graphics;
use bullseye::input;
use bullseye::rendering;
use bullseye::session::{self, TrainerPlugin};
use bullseye::spawner;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bullseye".into(),
                resolution: WindowResolution::new(SURFACE_WIDTH as u32, SURFACE_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.13, 0.15, 0.18)))
        .add_plugins(TrainerPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_trainer_config.before(session::init_session_state),
                graphics::setup_camera.after(config::load_trainer_config),
                rendering::setup_hud_score
                    .after(graphics::setup_camera)
                    .after(config::load_trainer_config),
                rendering::setup_stats_text
                    .after(graphics::setup_camera)
                    .after(config::load_trainer_config),
            ),
        )
        .add_systems(
            Update,
            (
                spawner::sync_surface_bounds_system,
                input::mouse_to_intent_system.before(input::apply_click_system),
                rendering::attach_target_mesh_system,
                rendering::hud_score_display_system,
                rendering::stats_display_system,
            ),
        )
        .run();
}
