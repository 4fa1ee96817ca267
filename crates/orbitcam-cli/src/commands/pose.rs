//! Pose command

use anyhow::{Context, Result};
use glam::Vec3;
use orbitcam_core::{OrbitConfig, OrbitState, RigConfig};
use orbitcam_rig::CameraRig;

pub struct PoseArgs {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub subject: Option<[f32; 3]>,
    pub degrees: bool,
    pub config: Option<String>,
}

pub fn run(args: PoseArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => RigConfig::default(),
    };

    let orbit = orbit_from_args(&args, &config.orbit)?;
    let subject = Vec3::from_array(args.subject.unwrap_or([0.0; 3]));
    let pose = CameraRig::new().compute_pose(subject, &orbit);

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "orbit": orbit,
            "position": pose.position,
            "look_target": pose.look_target,
        }))?
    );
    Ok(())
}

/// Orbit for the requested angles, clamped like the interactive rig would
fn orbit_from_args(args: &PoseArgs, bounds: &OrbitConfig) -> Result<OrbitState> {
    let (yaw, pitch) = if args.degrees {
        (args.yaw.to_radians(), args.pitch.to_radians())
    } else {
        (args.yaw, args.pitch)
    };

    let requested = OrbitConfig {
        initial_yaw: yaw,
        initial_pitch: pitch,
        initial_distance: args.distance,
        ..bounds.clone()
    };
    let orbit = OrbitState::from_config(&requested).context("Invalid pose arguments")?;
    if orbit.pitch != pitch || orbit.distance != args.distance {
        log::warn!(
            "requested pitch {} / distance {} clamped to {} / {}",
            pitch,
            args.distance,
            orbit.pitch,
            orbit.distance
        );
    }
    Ok(orbit)
}
