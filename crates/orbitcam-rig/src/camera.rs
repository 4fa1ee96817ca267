//! Spherical camera placement around a subject

use glam::Vec3;
use orbitcam_core::{CameraPose, OrbitState};

/// Places a camera on a sphere centered on the subject, polar axis on world up
///
/// Yaw 0 and pitch 0 put the camera on the subject's +Z side, looking back
/// toward -Z.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraRig;

impl CameraRig {
    pub fn new() -> Self {
        Self
    }

    /// Offset from the subject to the camera for the given orbit
    pub fn offset(&self, orbit: &OrbitState) -> Vec3 {
        let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = orbit.pitch.sin_cos();
        Vec3::new(
            orbit.distance * sin_yaw * cos_pitch,
            orbit.distance * sin_pitch,
            orbit.distance * cos_yaw * cos_pitch,
        )
    }

    /// Camera pose orbiting `subject`, always looking at it
    pub fn compute_pose(&self, subject: Vec3, orbit: &OrbitState) -> CameraPose {
        CameraPose::new(subject + self.offset(orbit), subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_behind_subject_at_rest() {
        let rig = CameraRig::new();
        let pose = rig.compute_pose(Vec3::ZERO, &OrbitState::new(0.0, 0.0, 10.0));
        assert!(approx(pose.position, Vec3::new(0.0, 0.0, 10.0)));
        assert_eq!(pose.look_target, Vec3::ZERO);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let rig = CameraRig::new();
        let pose = rig.compute_pose(Vec3::ZERO, &OrbitState::new(FRAC_PI_2, 0.0, 4.0));
        assert!(approx(pose.position, Vec3::new(4.0, 0.0, 0.0)));
    }

    #[test]
    fn test_pitch_straight_up() {
        let rig = CameraRig::new();
        let subject = Vec3::new(1.0, 2.0, 3.0);
        let pose = rig.compute_pose(subject, &OrbitState::new(0.7, FRAC_PI_2, 5.0));
        assert!(approx(pose.position, Vec3::new(1.0, 7.0, 3.0)));
        assert_eq!(pose.look_target, subject);
    }

    #[test]
    fn test_distance_preserved_for_any_angles() {
        let rig = CameraRig::new();
        let subjects = [
            Vec3::ZERO,
            Vec3::new(12.5, -3.0, 7.25),
            Vec3::new(-100.0, 40.0, 0.5),
        ];
        let yaws = [-10.0, -PI, -1.0, 0.0, 0.3, FRAC_PI_4, 2.5, 37.0];
        let pitches = [-FRAC_PI_2, -1.0, -0.2, 0.0, 0.6, 1.2, FRAC_PI_2];
        let distances = [0.0, 0.5, 10.0, 20.0];

        for subject in subjects {
            for yaw in yaws {
                for pitch in pitches {
                    for distance in distances {
                        let orbit = OrbitState::new(yaw, pitch, distance);
                        let pose = rig.compute_pose(subject, &orbit);
                        assert!(
                            (pose.distance() - distance).abs() < 1e-3,
                            "yaw={} pitch={} distance={} got {}",
                            yaw,
                            pitch,
                            distance,
                            pose.distance()
                        );
                        assert_eq!(pose.look_target, subject);
                    }
                }
            }
        }
    }

    #[test]
    fn test_yaw_wraps() {
        let rig = CameraRig::new();
        let a = rig.compute_pose(Vec3::ZERO, &OrbitState::new(0.4, 0.3, 8.0));
        let b = rig.compute_pose(Vec3::ZERO, &OrbitState::new(0.4 + 2.0 * PI, 0.3, 8.0));
        assert!(approx(a.position, b.position));
    }
}
