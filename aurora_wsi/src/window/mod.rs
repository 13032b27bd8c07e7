//! Window module — window creation and the normalized event pump.
//!
//! `InputState` holds the platform-independent device state and packages
//! platform events into portable [`Event`](crate::Event) values; `WsiWindow`
//! owns the platform window and event loop and feeds that state.

mod state;
mod window;

pub use state::InputState;
pub use window::{EventHandlers, WsiWindow};
