//! Pose sink trait

use glam::Vec3;
use orbitcam_core::CameraPose;

/// Consumer of the camera pose computed on each running tick
///
/// Implemented by the rendering layer. The driver calls `apply_pose` once per
/// running tick, after the subject has moved.
pub trait PoseSink {
    fn apply_pose(&mut self, position: Vec3, look_target: Vec3);
}

impl<F> PoseSink for F
where
    F: FnMut(Vec3, Vec3),
{
    fn apply_pose(&mut self, position: Vec3, look_target: Vec3) {
        self(position, look_target)
    }
}

/// A sink that keeps every pose it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    poses: Vec<CameraPose>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poses(&self) -> &[CameraPose] {
        &self.poses
    }

    pub fn last(&self) -> Option<&CameraPose> {
        self.poses.last()
    }

    /// Take all recorded poses, leaving the sink empty
    pub fn drain(&mut self) -> Vec<CameraPose> {
        std::mem::take(&mut self.poses)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

impl PoseSink for RecordingSink {
    fn apply_pose(&mut self, position: Vec3, look_target: Vec3) {
        self.poses.push(CameraPose::new(position, look_target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_and_drain() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.apply_pose(Vec3::Z, Vec3::ZERO);
        sink.apply_pose(Vec3::X, Vec3::ONE);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last(), Some(&CameraPose::new(Vec3::X, Vec3::ONE)));

        let poses = sink.drain();
        assert_eq!(poses.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut applied = Vec::new();
        {
            let mut sink = |position: Vec3, target: Vec3| applied.push((position, target));
            sink.apply_pose(Vec3::Y, Vec3::ZERO);
        }
        assert_eq!(applied, vec![(Vec3::Y, Vec3::ZERO)]);
    }
}
