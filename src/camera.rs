//! Camera targeting and smooth focus transitions.
//!
//! `resolve_camera_target` derives an eye/look-at pair for a body at its current
//! position. The plugin turns `NavigateTo` messages into such targets and eases
//! the main camera toward them.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::ephemeris::{Ephemeris, OrbitalBody};
use crate::time::TimeSystemSet;
use crate::types::SimulationClock;

/// Horizontal distance of the overview camera from the star.
pub const ROOT_VIEW_DISTANCE: f64 = 8.0;

/// Azimuth of the overview camera.
pub const ROOT_VIEW_AZIMUTH: f64 = FRAC_PI_4;

/// Overview camera height as a fraction of `ROOT_VIEW_DISTANCE`.
pub const ROOT_VIEW_HEIGHT: f64 = 0.3;

/// Camera distance from a body: `radius * BODY_VIEW_RADII + BODY_VIEW_PADDING`.
pub const BODY_VIEW_RADII: f64 = 4.0;
pub const BODY_VIEW_PADDING: f64 = 2.0;

/// Camera azimuth lead over the body's orbital angle.
pub const BODY_VIEW_AZIMUTH_OFFSET: f64 = FRAC_PI_6;

/// Camera height above the orbital plane, in body radii.
pub const BODY_VIEW_HEIGHT_RADII: f64 = 0.8;

/// Eye and look-at point for one navigation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub eye: DVec3,
    pub look_at: DVec3,
}

/// Frame `body`, currently at absolute `position`.
///
/// The star gets a fixed overview regardless of time. Other bodies are viewed
/// from slightly ahead of their orbital angle and a little above the plane.
pub fn resolve_camera_target(
    body: &OrbitalBody,
    position: DVec3,
    elapsed_days: f64,
) -> CameraTarget {
    let Some(orbit) = body.orbit else {
        let d = ROOT_VIEW_DISTANCE;
        return CameraTarget {
            eye: DVec3::new(
                d * ROOT_VIEW_AZIMUTH.cos(),
                d * ROOT_VIEW_HEIGHT,
                d * ROOT_VIEW_AZIMUTH.sin(),
            ),
            look_at: DVec3::ZERO,
        };
    };

    let distance = body.radius * BODY_VIEW_RADII + BODY_VIEW_PADDING;
    let azimuth = orbit.angle_at(elapsed_days) + BODY_VIEW_AZIMUTH_OFFSET;
    let height = body.radius * BODY_VIEW_HEIGHT_RADII;

    CameraTarget {
        eye: position + DVec3::new(distance * azimuth.cos(), height, distance * azimuth.sin()),
        look_at: position,
    }
}

/// Request to move the camera to a body by name.
#[derive(Message, Clone, Debug)]
pub struct NavigateTo(pub String);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Tunable camera behavior.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    /// Exponential smoothing rate (1/s). Higher is snappier.
    pub smooth_speed: f32,
    /// Distance at which a transition counts as finished.
    pub arrive_epsilon: f32,
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            smooth_speed: 4.0,
            arrive_epsilon: 1e-3,
            fov_degrees: 50.0,
        }
    }
}

/// Resource for smooth camera focus animation.
#[derive(Resource, Default)]
pub struct CameraFocus {
    /// Target being approached, cleared on arrival
    pub target: Option<CameraTarget>,
    /// Point the camera is currently looking at
    pub look_at: Vec3,
    /// Name of the last body navigated to
    pub body: Option<String>,
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<CameraFocus>()
            .add_message::<NavigateTo>()
            .add_systems(Startup, setup_camera)
            // Targets are resolved against this frame's clock, like the snapshot
            .add_systems(
                Update,
                (handle_navigation, animate_camera)
                    .chain()
                    .after(TimeSystemSet::Advance),
            );
    }
}

/// Spawn the main camera at the star overview.
fn setup_camera(
    mut commands: Commands,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    settings: Res<CameraSettings>,
    mut focus: ResMut<CameraFocus>,
) {
    let root = ephemeris.catalog().root();
    let Some(target) = ephemeris.camera_target(root, clock.elapsed_days) else {
        return;
    };

    let eye = target.eye.as_vec3();
    let look_at = target.look_at.as_vec3();
    focus.look_at = look_at;

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(eye).looking_at(look_at, Vec3::Y),
        MainCamera,
    ));
}

/// Resolve navigation requests into camera targets.
///
/// Unknown names leave the current focus untouched.
pub fn handle_navigation(
    mut requests: MessageReader<NavigateTo>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    mut focus: ResMut<CameraFocus>,
) {
    for NavigateTo(name) in requests.read() {
        match ephemeris.camera_target_by_name(name, clock.elapsed_days) {
            Some(target) => {
                info!("Navigating to {}", name.trim());
                focus.target = Some(target);
                focus.body = Some(name.trim().to_string());
            }
            None => warn!("Cannot navigate: no body named {:?}", name),
        }
    }
}

/// Ease the camera toward the focus target.
fn animate_camera(
    time: Res<Time>,
    settings: Res<CameraSettings>,
    mut focus: ResMut<CameraFocus>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(target) = focus.target else {
        return;
    };
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let eye = target.eye.as_vec3();
    let look_at = target.look_at.as_vec3();
    let t = smoothing_factor(settings.smooth_speed, time.delta_secs());

    transform.translation = transform.translation.lerp(eye, t);
    focus.look_at = focus.look_at.lerp(look_at, t);

    if transform.translation.distance(eye) < settings.arrive_epsilon
        && focus.look_at.distance(look_at) < settings.arrive_epsilon
    {
        transform.translation = eye;
        focus.look_at = look_at;
        focus.target = None;
    }

    let look_at = focus.look_at;
    transform.look_at(look_at, Vec3::Y);
}

/// Frame-rate independent interpolation factor in `[0, 1]`.
pub fn smoothing_factor(speed: f32, dt: f32) -> f32 {
    (1.0 - (-speed * dt).exp()).clamp(0.0, 1.0)
}
