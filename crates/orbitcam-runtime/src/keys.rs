//! Movement key bindings

use winit::keyboard::KeyCode;

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];
}

/// Keys bound to each movement direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    forward: Vec<KeyCode>,
    backward: Vec<KeyCode>,
    left: Vec<KeyCode>,
    right: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            backward: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
        }
    }
}

impl KeyBindings {
    /// Keys bound to a direction
    pub fn keys(&self, direction: Direction) -> &[KeyCode] {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// Replace the keys bound to a direction
    pub fn bind(&mut self, direction: Direction, keys: Vec<KeyCode>) {
        match direction {
            Direction::Forward => self.forward = keys,
            Direction::Backward => self.backward = keys,
            Direction::Left => self.left = keys,
            Direction::Right => self.right = keys,
        }
    }

    /// Direction a key moves in, if it is bound at all
    pub fn direction_of(&self, key: KeyCode) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.keys(*direction).contains(&key))
    }
}

/// Resolve a key name from a script or config file
///
/// Accepts winit `KeyCode` names (`"KeyW"`, `"ArrowUp"`, `"Space"`) and bare
/// letters or digits (`"w"`, `"7"`).
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return letter_or_digit(c.to_ascii_uppercase());
    }

    if let Some(rest) = name.strip_prefix("Key") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return letter_or_digit(c).filter(|_| c.is_ascii_uppercase());
        }
    }
    if let Some(rest) = name.strip_prefix("Digit") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return letter_or_digit(c).filter(|_| c.is_ascii_digit());
        }
    }

    let key = match name {
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        _ => return None,
    };
    Some(key)
}

fn letter_or_digit(c: char) -> Option<KeyCode> {
    let key = match c {
        'A' => KeyCode::KeyA,
        'B' => KeyCode::KeyB,
        'C' => KeyCode::KeyC,
        'D' => KeyCode::KeyD,
        'E' => KeyCode::KeyE,
        'F' => KeyCode::KeyF,
        'G' => KeyCode::KeyG,
        'H' => KeyCode::KeyH,
        'I' => KeyCode::KeyI,
        'J' => KeyCode::KeyJ,
        'K' => KeyCode::KeyK,
        'L' => KeyCode::KeyL,
        'M' => KeyCode::KeyM,
        'N' => KeyCode::KeyN,
        'O' => KeyCode::KeyO,
        'P' => KeyCode::KeyP,
        'Q' => KeyCode::KeyQ,
        'R' => KeyCode::KeyR,
        'S' => KeyCode::KeyS,
        'T' => KeyCode::KeyT,
        'U' => KeyCode::KeyU,
        'V' => KeyCode::KeyV,
        'W' => KeyCode::KeyW,
        'X' => KeyCode::KeyX,
        'Y' => KeyCode::KeyY,
        'Z' => KeyCode::KeyZ,
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_have_arrow_aliases() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.direction_of(KeyCode::KeyW), Some(Direction::Forward));
        assert_eq!(bindings.direction_of(KeyCode::ArrowUp), Some(Direction::Forward));
        assert_eq!(bindings.direction_of(KeyCode::KeyS), Some(Direction::Backward));
        assert_eq!(bindings.direction_of(KeyCode::ArrowDown), Some(Direction::Backward));
        assert_eq!(bindings.direction_of(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(bindings.direction_of(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(bindings.direction_of(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(bindings.direction_of(KeyCode::ArrowRight), Some(Direction::Right));
        assert_eq!(bindings.direction_of(KeyCode::Space), None);
    }

    #[test]
    fn test_rebind() {
        let mut bindings = KeyBindings::default();
        bindings.bind(Direction::Forward, vec![KeyCode::KeyI]);
        assert_eq!(bindings.direction_of(KeyCode::KeyI), Some(Direction::Forward));
        assert_eq!(bindings.direction_of(KeyCode::KeyW), None);
        assert_eq!(bindings.keys(Direction::Forward), &[KeyCode::KeyI]);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("w"), Some(KeyCode::KeyW));
        assert_eq!(key_from_name("W"), Some(KeyCode::KeyW));
        assert_eq!(key_from_name("KeyW"), Some(KeyCode::KeyW));
        assert_eq!(key_from_name("ArrowLeft"), Some(KeyCode::ArrowLeft));
        assert_eq!(key_from_name("Digit3"), Some(KeyCode::Digit3));
        assert_eq!(key_from_name(" d "), Some(KeyCode::KeyD));
        assert_eq!(key_from_name("Keyw"), None);
        assert_eq!(key_from_name("F13"), None);
        assert_eq!(key_from_name(""), None);
        assert_eq!(key_from_name("?"), None);
    }
}
