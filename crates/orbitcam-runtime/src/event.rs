//! Raw input events delivered by the host

use winit::keyboard::KeyCode;

/// A raw input event, in window pixel coordinates where applicable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Signed wheel delta, positive zooms out
    Scroll { delta_y: f64 },
    Key { key: KeyCode, pressed: bool },
}
