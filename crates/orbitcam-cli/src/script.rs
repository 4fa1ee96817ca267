//! Input script format for the simulate command
//!
//! A script is an ordered list of `[[step]]` tables, each tagged by `action`:
//!
//! ```toml
//! [[step]]
//! action = "bind"
//! position = [0.0, 0.0, 0.0]
//!
//! [[step]]
//! action = "key"
//! key = "w"
//!
//! [[step]]
//! action = "tick"
//! count = 30
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub step: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Place the subject and start the loop
    Bind {
        #[serde(default)]
        position: [f32; 3],
    },
    /// Run one or more frame ticks
    Tick {
        #[serde(default = "default_count")]
        count: u32,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    Scroll {
        delta_y: f64,
    },
    /// A key edge, pressed unless `pressed = false`
    Key {
        key: String,
        #[serde(default = "default_pressed")]
        pressed: bool,
    },
}

fn default_count() -> u32 {
    1
}

fn default_pressed() -> bool {
    true
}

impl Script {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse script")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_actions() {
        let toml = r#"
[[step]]
action = "bind"
position = [1.0, 0.0, -2.0]

[[step]]
action = "pointer_down"
x = 10.0
y = 20.0

[[step]]
action = "pointer_move"
x = 30.0
y = 20.0

[[step]]
action = "pointer_up"

[[step]]
action = "scroll"
delta_y = -120.0

[[step]]
action = "key"
key = "ArrowUp"

[[step]]
action = "key"
key = "ArrowUp"
pressed = false

[[step]]
action = "tick"
count = 5

[[step]]
action = "tick"
"#;
        let script = Script::from_toml_str(toml).unwrap();
        assert_eq!(
            script.step,
            vec![
                Step::Bind {
                    position: [1.0, 0.0, -2.0]
                },
                Step::PointerDown { x: 10.0, y: 20.0 },
                Step::PointerMove { x: 30.0, y: 20.0 },
                Step::PointerUp,
                Step::Scroll { delta_y: -120.0 },
                Step::Key {
                    key: "ArrowUp".into(),
                    pressed: true
                },
                Step::Key {
                    key: "ArrowUp".into(),
                    pressed: false
                },
                Step::Tick { count: 5 },
                Step::Tick { count: 1 },
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::from_toml_str("").unwrap();
        assert!(script.step.is_empty());
    }

    #[test]
    fn test_unknown_action_rejected() {
        let toml = r#"
[[step]]
action = "jump"
"#;
        assert!(Script::from_toml_str(toml).is_err());
    }
}
