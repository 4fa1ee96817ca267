//! Input state management

use crate::event::InputEvent;
use crate::keys::{Direction, KeyBindings};
use orbitcam_core::{DirectionalFlags, OrbitConfig, OrbitState, Result};
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// What a tick reads from the input state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub orbit: OrbitState,
    pub flags: DirectionalFlags,
}

/// Accumulates raw pointer, scroll and key events into orbit angles, zoom
/// distance and movement flags
pub struct InputState {
    config: OrbitConfig,
    orbit: OrbitState,
    flags: DirectionalFlags,
    bindings: KeyBindings,

    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Is a pointer drag in progress?
    dragging: bool,
    /// Last pointer position in window pixels
    pointer_position: (f64, f64),
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_orbit(OrbitConfig::default(), OrbitState::default())
    }
}

impl InputState {
    /// Create input state with the orbit starting at the config's initial values
    ///
    /// Fails with `InvalidConfiguration` if the config does not validate.
    pub fn new(config: &OrbitConfig) -> Result<Self> {
        let orbit = OrbitState::from_config(config)?;
        Ok(Self::with_orbit(config.clone(), orbit))
    }

    fn with_orbit(config: OrbitConfig, orbit: OrbitState) -> Self {
        Self {
            config,
            orbit,
            flags: DirectionalFlags::default(),
            bindings: KeyBindings::default(),
            keys_down: HashSet::new(),
            dragging: false,
            pointer_position: (0.0, 0.0),
        }
    }

    /// Rebind a movement direction to a new set of keys
    pub fn bind(&mut self, direction: Direction, keys: Vec<KeyCode>) {
        self.bindings.bind(direction, keys);
        self.refresh_flags();
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Start a drag at the given pointer position
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.pointer_position = (x, y);
    }

    /// End the current drag
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Rotate the orbit by the pointer delta while dragging
    ///
    /// The last pointer position is tracked even when not dragging. Deltas
    /// that are not finite in f32 leave the orbit alone.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.dragging {
            let sensitivity = self.config.angular_sensitivity;
            let dx = (x - self.pointer_position.0) as f32 * sensitivity;
            let dy = (y - self.pointer_position.1) as f32 * sensitivity;
            if dx.is_finite() && dy.is_finite() {
                self.orbit.rotate(dx, dy, &self.config);
            }
        }
        self.pointer_position = (x, y);
    }

    /// Zoom by a wheel delta
    pub fn on_scroll(&mut self, delta_y: f64) {
        let delta = delta_y as f32 * self.config.scroll_sensitivity * self.config.zoom_speed;
        self.orbit.zoom(delta, &self.config);
    }

    /// Process a key press or release; unbound keys change nothing
    pub fn on_key_edge(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
        if self.bindings.direction_of(key).is_some() {
            self.refresh_flags();
        }
    }

    /// Dispatch a raw event to its handler
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::Scroll { delta_y } => self.on_scroll(delta_y),
            InputEvent::Key { key, pressed } => self.on_key_edge(key, pressed),
        }
    }

    fn refresh_flags(&mut self) {
        let held = |direction: Direction| {
            self.bindings
                .keys(direction)
                .iter()
                .any(|key| self.keys_down.contains(key))
        };
        self.flags = DirectionalFlags {
            forward: held(Direction::Forward),
            backward: held(Direction::Backward),
            left: held(Direction::Left),
            right: held(Direction::Right),
        };
    }

    // --- Query methods ---

    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    pub fn flags(&self) -> &DirectionalFlags {
        &self.flags
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Copy of the orbit and flags for the next tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            orbit: self.orbit,
            flags: self.flags,
        }
    }
}
