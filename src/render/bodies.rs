//! Body rendering and spawning.
//!
//! Handles the visual representation of the star, planets, moons and rings.

use bevy::prelude::*;

use crate::ephemeris::Ephemeris;
use crate::time::PositionSnapshot;

/// Component marking an entity as a renderable body.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    /// Index into the catalog arena
    pub index: usize,
    /// Human-readable name.
    pub name: String,
    /// Render radius in scene units.
    pub radius: f64,
}

/// Inner and outer ring radii, in body radii.
const RING_INNER: f32 = 1.4;
const RING_OUTER: f32 = 2.2;

/// Ring thickness relative to its width.
const RING_FLATTEN: f32 = 0.04;

/// Approximate visual color for a body by name. Unknown bodies are gray.
pub fn body_color(name: &str) -> Color {
    match name {
        "Sun" => Color::srgb(1.0, 0.95, 0.4),
        "Mercury" => Color::srgb(0.6, 0.6, 0.6),
        "Venus" => Color::srgb(0.9, 0.85, 0.7),
        "Earth" => Color::srgb(0.2, 0.5, 0.8),
        "Mars" => Color::srgb(0.8, 0.4, 0.2),
        "Jupiter" => Color::srgb(0.8, 0.7, 0.6),
        "Saturn" => Color::srgb(0.9, 0.85, 0.6),
        "Uranus" => Color::srgb(0.6, 0.8, 0.9),
        "Neptune" => Color::srgb(0.3, 0.5, 0.9),
        "Pluto" => Color::srgb(0.75, 0.7, 0.65),
        "Io" => Color::srgb(0.9, 0.8, 0.3),
        "Titan" => Color::srgb(0.8, 0.6, 0.3),
        _ => Color::srgb(0.7, 0.7, 0.7),
    }
}

/// Spawn every body in the catalog, plus the star's light.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ephemeris: Res<Ephemeris>,
    snapshot: Res<PositionSnapshot>,
) {
    let catalog = ephemeris.catalog();

    for (index, body) in catalog.bodies().iter().enumerate() {
        let radius = body.radius as f32;
        let color = body_color(&body.name);
        let position = snapshot
            .0
            .get(index)
            .map_or(Vec3::ZERO, |pose| pose.position.as_vec3());

        // The star glows, everything else is lit by it
        let material = materials.add(StandardMaterial {
            base_color: color,
            emissive: if body.is_root() {
                color.to_linear() * 4.0
            } else {
                LinearRgba::BLACK
            },
            ..default()
        });

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(48, 24))),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            CelestialBody {
                index,
                name: body.name.clone(),
                radius: body.radius,
            },
        ));

        if body.has_rings {
            let ring_material = materials.add(StandardMaterial {
                base_color: color.with_alpha(0.6),
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                ..default()
            });
            entity.with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Torus::new(radius * RING_INNER, radius * RING_OUTER))),
                    MeshMaterial3d(ring_material),
                    Transform::from_scale(Vec3::new(1.0, RING_FLATTEN, 1.0)),
                ));
            });
        }

        if body.is_root() {
            entity.with_children(|parent| {
                parent.spawn(PointLight {
                    intensity: 2.0e8,
                    range: 200.0,
                    radius,
                    shadows_enabled: false,
                    ..default()
                });
            });
        }
    }

    info!("Spawned {} bodies", catalog.len());
}
