//! Orbitcam Runtime - input and frame driver
//!
//! Provides the pieces a host wires into its event and frame callbacks:
//! - `InputState` - accumulates pointer, scroll and key events into orbit and movement state
//! - `InputEvent` - raw events the host delivers
//! - `KeyBindings` - movement keys, with arrow-key aliases by default
//! - `FrameLoop` - waits for a subject, then moves it and places the camera each tick
//! - `PoseSink` - receives the camera pose on each running tick

mod event;
mod frame_loop;
mod input;
mod keys;
mod sink;

pub use event::InputEvent;
pub use frame_loop::{FrameLoop, LoopState};
pub use input::{InputSnapshot, InputState};
pub use keys::{key_from_name, Direction, KeyBindings};
pub use sink::{PoseSink, RecordingSink};
