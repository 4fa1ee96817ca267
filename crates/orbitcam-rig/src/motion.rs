//! Camera-relative subject movement

use glam::Vec3;
use orbitcam_core::DirectionalFlags;

/// Below this horizontal length a camera forward is treated as vertical
const MIN_HORIZONTAL_LENGTH: f32 = 1e-4;

/// Turns held directions into a subject displacement relative to the camera
///
/// The camera forward is flattened onto the ground plane. When the camera
/// looks straight up or down there is no horizontal heading, so the last
/// usable heading is reused (world -Z before any was seen).
#[derive(Debug, Clone)]
pub struct MotionController {
    last_forward: Vec3,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionController {
    pub fn new() -> Self {
        Self {
            last_forward: Vec3::NEG_Z,
        }
    }

    /// Heading used when the camera forward has no horizontal component
    pub fn last_forward(&self) -> Vec3 {
        self.last_forward
    }

    /// Horizontal (forward, right) basis for a camera forward vector
    ///
    /// Right is `up x forward`, normalized.
    pub fn horizontal_basis(&mut self, camera_forward: Vec3) -> (Vec3, Vec3) {
        let flat = Vec3::new(camera_forward.x, 0.0, camera_forward.z);
        let length = flat.length();

        let forward = if length.is_finite() && length >= MIN_HORIZONTAL_LENGTH {
            let forward = flat / length;
            self.last_forward = forward;
            forward
        } else {
            log::trace!(
                "camera forward {:?} has no horizontal heading, reusing {:?}",
                camera_forward,
                self.last_forward
            );
            self.last_forward
        };

        let right = Vec3::Y.cross(forward).normalize();
        (forward, right)
    }

    /// Displacement for one tick
    ///
    /// Each held direction contributes `move_speed` along its axis. The sum is
    /// not renormalized, so diagonals move up to sqrt(2) times faster.
    pub fn compute_displacement(
        &mut self,
        camera_forward: Vec3,
        flags: &DirectionalFlags,
        move_speed: f32,
    ) -> Vec3 {
        let (forward, right) = self.horizontal_basis(camera_forward);

        let mut displacement = Vec3::ZERO;
        if flags.forward {
            displacement += forward * move_speed;
        }
        if flags.backward {
            displacement -= forward * move_speed;
        }
        if flags.right {
            displacement += right * move_speed;
        }
        if flags.left {
            displacement -= right * move_speed;
        }
        displacement
    }
}
