/*!
# Aurora WSI

Window System Integration layer for Vulkan applications.

This crate provides platform-independent window creation and input handling.
Platform events (mouse, keyboard, text, resize, move, focus, close) are
normalized into a single portable [`Event`] representation, and the window
keeps queryable device state (key table, button table, mouse position, window
shape, focus) alongside the event stream.

## Architecture

- **WsiWindow**: window creation and the normalized event pump
- **InputState**: the device-state tables and event packaging
- **Event / Action / Keycode**: the portable event vocabulary
- **EventHandlers**: per-event callback dispatch with default no-ops

Vulkan surface and object helpers live in the companion `aurora_wsi_vulkan`
crate, which consumes any window through the `raw-window-handle` traits that
`WsiWindow` implements.
*/

// Internal modules
mod error;
mod event;
mod keycode;
pub mod log;
pub mod window;

// Main aurora namespace module
pub mod aurora {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: wsi_* macros are NOT re-exported here - they live at the crate root
    }

    // Event vocabulary
    pub use crate::event::{Action, Event, Modifiers, MouseButton, WindowShape};
    pub use crate::keycode::Keycode;

    // Window sub-module
    pub use crate::window::{EventHandlers, InputState, WsiWindow};
}

// Flat re-exports for the common case
pub use error::{Error, Result};
pub use event::{Action, Event, Modifiers, MouseButton, WindowShape};
pub use keycode::Keycode;
pub use window::{EventHandlers, InputState, WsiWindow};
