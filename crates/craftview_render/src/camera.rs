//! Free-fly camera
//!
//! The camera is a plain pose: position plus yaw and pitch in degrees.
//! The projection pipeline reads it as an immutable snapshot each frame;
//! only the input controller mutates it, through [`CameraControl`].

use craftview_input::CameraControl;
use craftview_math::Vec4;

/// Pitch is clamped to this range so the view never flips over the poles
pub const PITCH_LIMIT: f32 = 90.0;

/// Camera pose: position and two orientation angles.
///
/// Yaw rotates about the vertical axis, pitch about the lateral axis, both
/// in degrees. At yaw = pitch = 0 the camera looks down -Z.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// World position (w unused, kept zero)
    pub position: Vec4,
    /// Rotation about the vertical axis, degrees
    pub yaw: f32,
    /// Rotation about the lateral axis, degrees, clamped to [-90, 90]
    pub pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec4::ZERO)
    }
}

impl Camera {
    /// Camera at `position` looking down -Z
    pub fn new(position: Vec4) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Apply look deltas in degrees, clamping pitch
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move in the horizontal plane rotated by yaw.
    ///
    /// Forward is `(-sin yaw, 0, -cos yaw)`: straight down -Z at yaw = 0.
    /// Pitch does not affect movement, so looking up never lifts the player.
    pub fn move_local_xz(&mut self, forward: f32, right: f32) {
        let yaw = self.yaw.to_radians();
        let (sin, cos) = yaw.sin_cos();

        self.position.x += -sin * forward + cos * right;
        self.position.z += -cos * forward - sin * right;
    }

    /// Move along world Y
    pub fn move_y(&mut self, delta: f32) {
        self.position.y += delta;
    }
}

impl CameraControl for Camera {
    fn move_local_xz(&mut self, forward: f32, right: f32) {
        Camera::move_local_xz(self, forward, right);
    }

    fn move_y(&mut self, delta: f32) {
        Camera::move_y(self, delta);
    }

    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        Camera::rotate(self, delta_yaw, delta_pitch);
    }
}
