//! Per-frame driver
//!
//! The loop starts in [`LoopState::WaitingForSubject`] and moves to
//! [`LoopState::Running`] exactly once, when the host binds a subject. Only a
//! running loop moves the subject and repositions the camera; ticks before
//! that are skipped and the sink keeps whatever it last had.

use crate::event::InputEvent;
use crate::input::InputState;
use crate::sink::PoseSink;
use orbitcam_core::{CameraPose, MotionConfig, Result, RigConfig, SubjectTransform};
use orbitcam_rig::{CameraRig, MotionController};

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopState {
    /// No subject placed in the world yet
    WaitingForSubject,
    /// Subject present, ticks move it and the camera
    Running { subject: SubjectTransform },
}

/// Owns the input state and runs motion then camera placement once per tick
pub struct FrameLoop<S: PoseSink> {
    motion_config: MotionConfig,
    input: InputState,
    rig: CameraRig,
    motion: MotionController,
    state: LoopState,
    sink: S,
    /// Pose most recently handed to the sink
    last_pose: Option<CameraPose>,
    /// Running ticks executed
    ticks: u64,
    /// Ticks skipped while waiting for a subject
    skipped_ticks: u64,
}

impl<S: PoseSink> FrameLoop<S> {
    /// Create a loop from a config, failing if the config is invalid
    pub fn new(config: &RigConfig, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            motion_config: config.motion.clone(),
            input: InputState::new(&config.orbit)?,
            rig: CameraRig::new(),
            motion: MotionController::new(),
            state: LoopState::WaitingForSubject,
            sink,
            last_pose: None,
            ticks: 0,
            skipped_ticks: 0,
        })
    }

    /// Create a loop with the default config
    pub fn with_defaults(sink: S) -> Self {
        Self {
            motion_config: MotionConfig::default(),
            input: InputState::default(),
            rig: CameraRig::new(),
            motion: MotionController::new(),
            state: LoopState::WaitingForSubject,
            sink,
            last_pose: None,
            ticks: 0,
            skipped_ticks: 0,
        }
    }

    /// Place the subject and start running
    ///
    /// The camera is positioned immediately. Returns false, leaving the loop
    /// untouched, if a subject is already bound.
    pub fn bind_subject(&mut self, subject: SubjectTransform) -> bool {
        if let LoopState::Running { .. } = self.state {
            log::warn!(
                "ignoring subject bind at {:?}: a subject is already bound",
                subject.position
            );
            return false;
        }

        log::debug!("subject bound at {:?}, loop running", subject.position);
        self.state = LoopState::Running { subject };

        let orbit = *self.input.orbit();
        let pose = self.rig.compute_pose(subject.position, &orbit);
        self.apply(pose);
        true
    }

    /// Advance one frame
    ///
    /// Moves the subject relative to the camera as it was at the start of the
    /// tick, then places the camera around the moved subject.
    pub fn tick(&mut self) {
        let LoopState::Running { subject } = &mut self.state else {
            self.skipped_ticks += 1;
            log::trace!("tick skipped, waiting for subject");
            return;
        };

        let snapshot = self.input.snapshot();

        let camera_forward = match self.last_pose {
            Some(pose) => pose.forward(),
            None => self.motion.last_forward(),
        };
        let displacement = self.motion.compute_displacement(
            camera_forward,
            &snapshot.flags,
            self.motion_config.move_speed,
        );
        subject.position += displacement;

        let pose = self.rig.compute_pose(subject.position, &snapshot.orbit);
        self.ticks += 1;
        log::trace!(
            "tick {}: subject {:?}, camera {:?}",
            self.ticks,
            subject.position,
            pose.position
        );
        self.apply(pose);
    }

    fn apply(&mut self, pose: CameraPose) {
        self.sink.apply_pose(pose.position, pose.look_target);
        self.last_pose = Some(pose);
    }

    /// Feed a raw input event into the input state
    ///
    /// Never moves the subject or camera; that happens on the next tick.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.handle_event(event);
    }

    // --- Query methods ---

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// The bound subject, if any
    pub fn subject(&self) -> Option<&SubjectTransform> {
        match &self.state {
            LoopState::Running { subject } => Some(subject),
            LoopState::WaitingForSubject => None,
        }
    }

    pub fn last_pose(&self) -> Option<&CameraPose> {
        self.last_pose.as_ref()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn skipped_ticks(&self) -> u64 {
        self.skipped_ticks
    }
}
