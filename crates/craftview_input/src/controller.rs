//! Free-fly controller
//!
//! Controls:
//! - W/S: forward/backward in the yaw plane
//! - A/D: left/right strafe
//! - Space/Shift: up/down (world Y)
//! - Mouse motion: yaw/pitch look (when the cursor is captured)

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Per-frame camera mutation seam.
///
/// The controller only ever talks to the camera through this trait, so it
/// stays independent of the render crate. All angles are in degrees.
pub trait CameraControl {
    /// Move in the horizontal plane rotated by yaw
    fn move_local_xz(&mut self, forward: f32, right: f32);
    /// Move along world Y
    fn move_y(&mut self, delta: f32);
    /// Apply look deltas; the implementation clamps pitch
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
}

/// Accumulates input events and integrates them once per frame.
///
/// Mouse motion arrives as raw deltas and is buffered until [`update`]
/// (`PlayerController::update`) converts it into look angles. The frame
/// clock (`dt`) is threaded in by the caller; there is no hidden timer.
pub struct PlayerController {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,

    pending_yaw: f32,
    pending_pitch: f32,

    /// Movement speed in world units per second
    pub move_speed: f32,
    /// Look sensitivity in degrees per mouse count
    pub mouse_sensitivity: f32,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,

            pending_yaw: 0.0,
            pending_pitch: 0.0,

            move_speed: 1.0,
            mouse_sensitivity: 0.05,
        }
    }

    /// Process keyboard input; returns true if the key was handled
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => {
                self.forward = pressed;
                true
            }
            KeyCode::KeyS => {
                self.backward = pressed;
                true
            }
            KeyCode::KeyA => {
                self.left = pressed;
                true
            }
            KeyCode::KeyD => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.up = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.down = pressed;
                true
            }
            _ => false,
        }
    }

    /// Buffer relative mouse motion until the next update
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_yaw += delta_x as f32;
        self.pending_pitch += delta_y as f32;
    }

    /// Integrate accumulated input into the camera for one frame.
    ///
    /// Look is only applied while the cursor is captured; movement always is.
    /// Pending mouse deltas are consumed either way.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32, cursor_captured: bool) {
        let fwd = (self.forward as i32 - self.backward as i32) as f32;
        let rgt = (self.right as i32 - self.left as i32) as f32;
        let up_down = (self.up as i32 - self.down as i32) as f32;

        camera.move_local_xz(fwd * self.move_speed * dt, rgt * self.move_speed * dt);
        camera.move_y(up_down * self.move_speed * dt);

        if cursor_captured {
            // Mouse right turns right, mouse down looks down
            camera.rotate(
                -self.pending_yaw * self.mouse_sensitivity,
                -self.pending_pitch * self.mouse_sensitivity,
            );
        }

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    /// Check if any movement key is held
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set mouse sensitivity
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what the controller asked for
    #[derive(Default)]
    struct RigSpy {
        forward: f32,
        right: f32,
        y: f32,
        yaw: f32,
        pitch: f32,
    }

    impl CameraControl for RigSpy {
        fn move_local_xz(&mut self, forward: f32, right: f32) {
            self.forward += forward;
            self.right += right;
        }
        fn move_y(&mut self, delta: f32) {
            self.y += delta;
        }
        fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
        }
    }

    #[test]
    fn test_keyboard_drives_movement() {
        let mut controller = PlayerController::new().with_move_speed(2.0);
        let mut rig = RigSpy::default();

        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        controller.update(&mut rig, 0.5, false);

        assert_eq!(rig.forward, 1.0);
        assert_eq!(rig.right, 1.0);
        assert_eq!(rig.y, 0.0);
    }

    #[test]
    fn test_key_release_stops_movement() {
        let mut controller = PlayerController::new();
        let mut rig = RigSpy::default();

        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
        controller.update(&mut rig, 1.0, false);

        assert_eq!(rig.forward, 0.0);
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut controller = PlayerController::new();
        let mut rig = RigSpy::default();

        controller.process_keyboard(KeyCode::Space, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Pressed);
        controller.update(&mut rig, 1.0, false);

        assert_eq!(rig.y, 0.0);
    }

    #[test]
    fn test_mouse_look_only_when_captured() {
        let mut controller = PlayerController::new().with_mouse_sensitivity(0.1);
        let mut rig = RigSpy::default();

        controller.process_mouse_motion(10.0, -5.0);
        controller.update(&mut rig, 0.016, false);
        assert_eq!(rig.yaw, 0.0);
        assert_eq!(rig.pitch, 0.0);

        // Deltas were consumed by the uncaptured update
        controller.process_mouse_motion(10.0, -5.0);
        controller.update(&mut rig, 0.016, true);
        assert!((rig.yaw - -1.0).abs() < 1e-6);
        assert!((rig.pitch - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_mouse_deltas_accumulate_between_frames() {
        let mut controller = PlayerController::new().with_mouse_sensitivity(1.0);
        let mut rig = RigSpy::default();

        controller.process_mouse_motion(1.0, 0.0);
        controller.process_mouse_motion(2.0, 0.0);
        controller.update(&mut rig, 0.016, true);

        assert!((rig.yaw - -3.0).abs() < 1e-6);
    }
}
