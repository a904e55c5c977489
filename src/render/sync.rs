//! Position synchronization between the snapshot and rendering.

use bevy::prelude::*;

use crate::render::bodies::CelestialBody;
use crate::time::PositionSnapshot;

/// Copy each body's pose from the current snapshot into its `Transform`.
///
/// Spin is applied about +Y. f64 scene coordinates are narrowed to f32 here
/// and nowhere else.
pub fn sync_body_transforms(
    snapshot: Res<PositionSnapshot>,
    mut query: Query<(&mut Transform, &CelestialBody)>,
) {
    for (mut transform, body) in query.iter_mut() {
        let Some(pose) = snapshot.0.get(body.index) else {
            continue;
        };
        transform.translation = pose.position.as_vec3();
        transform.rotation = Quat::from_rotation_y(pose.rotation as f32);
    }
}
