use bevy::prelude::*;

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d at the origin shows the full surface: world space is
    // the surface centred on (0, 0).
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}
