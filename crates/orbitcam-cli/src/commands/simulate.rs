//! Simulate command

use crate::script::{Script, Step};
use anyhow::{Context, Result};
use glam::Vec3;
use orbitcam_core::{RigConfig, SubjectTransform};
use orbitcam_runtime::{key_from_name, FrameLoop, InputEvent, RecordingSink};
use serde::Serialize;

/// One pose handed to the sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseRecord {
    /// Running tick that produced the pose, 0 for the pose placed on bind
    pub tick: u64,
    /// Subject position after the tick's movement
    pub subject: Vec3,
    pub position: Vec3,
    pub look_target: Vec3,
}

pub fn run(script_path: &str, config_path: Option<&str>, format: &str) -> Result<()> {
    if format != "json" && format != "text" {
        anyhow::bail!("Unknown format: {}", format);
    }

    let config = match config_path {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => RigConfig::default(),
    };
    let script = Script::load(script_path)?;

    let records = replay(&script, &config)?;
    if records.is_empty() {
        log::warn!("script produced no poses; does it bind a subject?");
    }

    for record in &records {
        match format {
            "json" => println!("{}", serde_json::to_string(record)?),
            _ => println!("{}", format_text(record)),
        }
    }

    Ok(())
}

/// Run every step of a script through a fresh frame loop
pub fn replay(script: &Script, config: &RigConfig) -> Result<Vec<PoseRecord>> {
    let mut frame_loop =
        FrameLoop::new(config, RecordingSink::new()).context("Invalid rig config")?;
    let mut records = Vec::new();

    for step in &script.step {
        match step {
            Step::Bind { position } => {
                frame_loop.bind_subject(SubjectTransform::new(Vec3::from_array(*position)));
            }
            Step::Tick { count } => {
                for _ in 0..*count {
                    frame_loop.tick();
                    collect(&mut frame_loop, &mut records);
                }
            }
            Step::PointerDown { x, y } => {
                frame_loop.handle_event(&InputEvent::PointerDown { x: *x, y: *y })
            }
            Step::PointerMove { x, y } => {
                frame_loop.handle_event(&InputEvent::PointerMove { x: *x, y: *y })
            }
            Step::PointerUp => frame_loop.handle_event(&InputEvent::PointerUp),
            Step::Scroll { delta_y } => {
                frame_loop.handle_event(&InputEvent::Scroll { delta_y: *delta_y })
            }
            Step::Key { key, pressed } => match key_from_name(key) {
                Some(key) => frame_loop.handle_event(&InputEvent::Key {
                    key,
                    pressed: *pressed,
                }),
                None => log::warn!("unknown key name '{}', ignoring", key),
            },
        }
        collect(&mut frame_loop, &mut records);
    }

    Ok(records)
}

fn collect(frame_loop: &mut FrameLoop<RecordingSink>, records: &mut Vec<PoseRecord>) {
    let tick = frame_loop.ticks();
    let subject = frame_loop
        .subject()
        .map(|subject| subject.position)
        .unwrap_or(Vec3::ZERO);
    records.extend(frame_loop.sink_mut().drain().into_iter().map(|pose| PoseRecord {
        tick,
        subject,
        position: pose.position,
        look_target: pose.look_target,
    }));
}

fn format_text(record: &PoseRecord) -> String {
    format!(
        "tick {:>5}  subject ({:.3}, {:.3}, {:.3})  camera ({:.3}, {:.3}, {:.3})  target ({:.3}, {:.3}, {:.3})",
        record.tick,
        record.subject.x,
        record.subject.y,
        record.subject.z,
        record.position.x,
        record.position.y,
        record.position.z,
        record.look_target.x,
        record.look_target.y,
        record.look_target.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_replay_walk_forward() {
        let script = Script::from_toml_str(
            r#"
[[step]]
action = "tick"
count = 3

[[step]]
action = "bind"

[[step]]
action = "key"
key = "w"

[[step]]
action = "tick"
count = 2
"#,
        )
        .unwrap();

        let records = replay(&script, &RigConfig::default()).unwrap();
        // Ticks before the bind produce nothing
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].tick, 0);
        assert!(approx(records[0].position, Vec3::new(0.0, 0.0, 10.0)));
        assert_eq!(records[2].tick, 2);
        assert!(approx(records[2].look_target, Vec3::new(0.0, 0.0, -0.1)));
        assert!(approx(records[2].subject, Vec3::new(0.0, 0.0, -0.1)));
        assert_eq!(records[0].subject, Vec3::ZERO);
        assert!(approx(records[2].position, Vec3::new(0.0, 0.0, 9.9)));
    }

    #[test]
    fn test_replay_ignores_unknown_keys() {
        let script = Script::from_toml_str(
            r#"
[[step]]
action = "bind"

[[step]]
action = "key"
key = "NotAKey"

[[step]]
action = "tick"
"#,
        )
        .unwrap();

        let records = replay(&script, &RigConfig::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].look_target, Vec3::ZERO);
    }

    #[test]
    fn test_replay_zoom_clamps() {
        let script = Script::from_toml_str(
            r#"
[[step]]
action = "bind"
position = [1.0, 2.0, 3.0]

[[step]]
action = "scroll"
delta_y = 100000.0

[[step]]
action = "tick"
"#,
        )
        .unwrap();

        let records = replay(&script, &RigConfig::default()).unwrap();
        let last = records.last().unwrap();
        assert!((last.position.distance(last.look_target) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_replay_rejects_invalid_config() {
        let mut config = RigConfig::default();
        config.orbit.max_distance = -1.0;
        assert!(replay(&Script::default(), &config).is_err());
    }

    #[test]
    fn test_bundled_script_and_config() {
        let script = Script::from_toml_str(include_str!("../../scripts/walk_and_orbit.toml")).unwrap();
        let config = RigConfig::from_toml_str(include_str!("../../scripts/rig.toml")).unwrap();

        let records = replay(&script, &config).unwrap();
        // Bind pose plus 31 running ticks
        assert_eq!(records.len(), 32);
        for record in &records {
            let distance = record.position.distance(record.look_target);
            assert!((2.0 - 1e-4..=20.0 + 1e-4).contains(&distance));
        }
    }

    #[test]
    fn test_format_text() {
        let record = PoseRecord {
            tick: 7,
            subject: Vec3::ZERO,
            position: Vec3::new(0.0, 0.0, 10.0),
            look_target: Vec3::ZERO,
        };
        assert_eq!(
            format_text(&record),
            "tick     7  subject (0.000, 0.000, 0.000)  camera (0.000, 0.000, 10.000)  target (0.000, 0.000, 0.000)"
        );
    }
}
