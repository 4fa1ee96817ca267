//! Orbitcam Rig - per-tick camera and subject math
//!
//! Two pure computations evaluated once per frame:
//! - `CameraRig` - places the camera on a sphere around the subject
//! - `MotionController` - turns held directions into a camera-relative displacement

mod camera;
mod motion;

pub use camera::CameraRig;
pub use motion::MotionController;
