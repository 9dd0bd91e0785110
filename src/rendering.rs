//! Retained `Mesh2d` rendering for targets, plus the score HUD.
//!
//! ## Layer model
//!
//! | Layer             | Technology | Colour             |
//! |-------------------|------------|--------------------|
//! | Target disc       | `Mesh2d`   | white fill         |
//! | Outline + rings   | `Mesh2d`   | black annuli       |
//! | Centre dot        | `Mesh2d`   | red disc           |
//! | Score HUD         | Bevy UI    | gold text          |
//! | Stats line        | Bevy UI    | grey text          |
//!
//! Target visuals are retained GPU meshes built once when the target entity
//! appears (`Added<Target>`) and spawned as children, so despawning the
//! target releases every primitive with it.  Immediate-mode gizmos would
//! rebuild and re-upload the circle geometry every frame for every live
//! target; retained meshes upload once and then cost nothing on the CPU.
//!
//! ## System responsibilities
//!
//! | System                       | Schedule | Purpose                        |
//! |------------------------------|----------|--------------------------------|
//! | `setup_hud_score`            | Startup  | Spawn score HUD node           |
//! | `setup_stats_text`           | Startup  | Spawn stats line node          |
//! | `attach_target_mesh_system`  | Update   | Build visuals for new targets  |
//! | `hud_score_display_system`   | Update   | Refresh score HUD text         |
//! | `stats_display_system`       | Update   | Refresh stats line text        |

use crate::config::TrainerConfig;
use crate::score::{Score, SessionStats};
use crate::target::{SpawnIndex, Target};
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the permanent score HUD node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the session-stats text node.
#[derive(Component)]
pub struct StatsTextDisplay;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn disc_color() -> Color {
    Color::WHITE
}
fn ring_color() -> Color {
    Color::BLACK
}
fn dot_color() -> Color {
    Color::srgb(0.85, 0.1, 0.1)
}

// ── Spawn-time mesh attachment ────────────────────────────────────────────────

/// Attach retained mesh visuals to every newly spawned target.
///
/// Uses [`Added<Target>`] so this only executes for entities that appeared
/// since the previous frame — there is no per-frame overhead for existing
/// targets.
///
/// Children are spawned in target-local space (origin = circle centre):
/// a white disc, a black outline annulus at the full diameter, the concentric
/// rings stepping from the full diameter down to the hit-zone diameter, and
/// the red centre dot.  The parent's z is nudged by spawn order so later
/// targets draw above earlier ones where discs overlap.
pub fn attach_target_mesh_system(
    mut commands: Commands,
    mut query: Query<(Entity, &Target, &SpawnIndex, &mut Transform), Added<Target>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<TrainerConfig>,
) {
    for (entity, target, index, mut transform) in query.iter_mut() {
        transform.translation.z = 0.05 + (index.0 % 64) as f32 * 0.01;

        let radius = target.diameter() / 2.0;
        let stroke = config.ring_stroke_width;
        let segments = config.circle_segments;

        let disc = meshes.add(disc_mesh(radius, segments));
        let dot = meshes.add(disc_mesh(
            target.diameter() * config.dot_coefficient / 2.0,
            segments,
        ));
        let white = materials.add(ColorMaterial::from_color(disc_color()));
        let black = materials.add(ColorMaterial::from_color(ring_color()));
        let red = materials.add(ColorMaterial::from_color(dot_color()));

        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh2d(disc),
                MeshMaterial2d(white),
                Transform::from_translation(Vec3::new(0.0, 0.0, 0.0)),
            ));
            // Outline at the full diameter, then the inner rings down to the
            // hit-zone diameter.
            for diameter in std::iter::once(target.diameter())
                .chain(ring_diameters(target, config.hit_zone_ring_count))
            {
                let ring_radius = diameter / 2.0;
                let ring = meshes.add(annulus_mesh(
                    (ring_radius - stroke).max(0.0),
                    ring_radius,
                    segments,
                ));
                parent.spawn((
                    Mesh2d(ring),
                    MeshMaterial2d(black.clone()),
                    Transform::from_translation(Vec3::new(0.0, 0.0, 0.001)),
                ));
            }
            parent.spawn((
                Mesh2d(dot),
                MeshMaterial2d(red),
                Transform::from_translation(Vec3::new(0.0, 0.0, 0.002)),
            ));
        });
    }
}

/// Diameters of the concentric rings between the full and hit-zone diameters.
///
/// Each step closes an equal share of the gap; the innermost ring lands
/// exactly on the hit-zone diameter.
pub fn ring_diameters(target: &Target, ring_count: u32) -> impl Iterator<Item = f32> + '_ {
    let gap = target.diameter() - target.hit_zone_diameter();
    let full = target.diameter();
    (0..ring_count).map(move |i| full - (i + 1) as f32 * gap / ring_count as f32)
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Build a filled disc as a triangle fan around a centre vertex.
pub fn disc_mesh(radius: f32, segments: u32) -> Mesh {
    debug_assert!(segments >= 3, "disc needs at least 3 segments");
    debug_assert!(radius > 0.0, "disc radius must be positive");
    let n = segments as usize;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    positions.push([0.0, 0.0, 0.0]);
    for i in 0..n {
        let angle = 2.0 * std::f32::consts::PI * i as f32 / n as f32;
        positions.push([radius * angle.cos(), radius * angle.sin(), 0.0]);
    }
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n + 1];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| [(p[0] / (2.0 * radius)) + 0.5, (p[1] / (2.0 * radius)) + 0.5])
        .collect();

    let mut indices: Vec<u32> = Vec::with_capacity(n * 3);
    for i in 0..segments {
        indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % segments]);
    }

    build_mesh(positions, normals, uvs, indices)
}

/// Build a ring (annulus) between two radii as a triangulated strip.
pub fn annulus_mesh(inner_radius: f32, outer_radius: f32, segments: u32) -> Mesh {
    debug_assert!(segments >= 3, "annulus needs at least 3 segments");
    debug_assert!(
        (0.0..outer_radius).contains(&inner_radius),
        "annulus radii must satisfy 0 <= inner < outer"
    );
    let n = segments as usize;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n * 2);
    for i in 0..n {
        let angle = 2.0 * std::f32::consts::PI * i as f32 / n as f32;
        let (sin, cos) = angle.sin_cos();
        positions.push([inner_radius * cos, inner_radius * sin, 0.0]);
        positions.push([outer_radius * cos, outer_radius * sin, 0.0]);
    }
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n * 2];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| {
            [
                (p[0] / (2.0 * outer_radius)) + 0.5,
                (p[1] / (2.0 * outer_radius)) + 0.5,
            ]
        })
        .collect();

    // Two counter-clockwise triangles per segment quad.
    let mut indices: Vec<u32> = Vec::with_capacity(n * 6);
    for i in 0..segments {
        let i0 = 2 * i;
        let i1 = 2 * i + 1;
        let j0 = 2 * ((i + 1) % segments);
        let j1 = j0 + 1;
        indices.extend_from_slice(&[i0, i1, j1, i0, j1, j0]);
    }

    build_mesh(positions, normals, uvs, indices)
}

fn build_mesh(
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

// ── Startup: HUD ──────────────────────────────────────────────────────────────

/// Spawn the permanent top-left score HUD (always visible).
pub fn setup_hud_score(mut commands: Commands, config: Res<TrainerConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
        });
}

/// Spawn the session-stats line directly under the score HUD.
pub fn setup_stats_text(mut commands: Commands, config: Res<TrainerConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0 + config.hud_font_size + 6.0),
                ..default()
            },
            StatsTextDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.stats_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}

// ── Update: HUD refresh ───────────────────────────────────────────────────────

/// Refresh the score HUD whenever the score changes.
pub fn hud_score_display_system(
    score: Res<Score>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !score.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!("Score: {}", score.total()));
            }
        }
    }
}

/// Refresh the stats line whenever the session counters change.
pub fn stats_display_system(
    stats: Res<SessionStats>,
    parent_query: Query<&Children, With<StatsTextDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !stats.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!(
                    "{} hit / {} expired / {} stray   accuracy {:.0}%",
                    stats.hits,
                    stats.expired,
                    stats.stray_clicks,
                    stats.accuracy() * 100.0
                ));
            }
        }
    }
}
