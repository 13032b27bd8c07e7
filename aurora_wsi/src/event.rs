//! Portable event representation
//!
//! Platform event handlers store input-device state and package the event
//! parameters into these platform-independent types. One [`Event`] value is
//! produced per platform event; device state (button/key tables, mouse
//! position, window shape) is updated before the event is surfaced.

use bitflags::bitflags;

use crate::keycode::Keycode;

/// Input transition for mouse and key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Button or key pressed
    Down,
    /// Button or key released
    Up,
    /// Pointer moved (mouse events only)
    Move,
}

/// Mouse buttons, numbered by their state-table slot
///
/// Wheel steps are delivered as press/release pairs of `WheelUp`/`WheelDown`
/// (slots 4 and 5, the X11 button convention). Slot 0 is the "no button"
/// slot carried by plain pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    None = 0,
    Left = 1,
    Middle = 2,
    Right = 3,
    WheelUp = 4,
    WheelDown = 5,
    Back = 6,
    Forward = 7,
}

/// Number of slots in the button-state table
pub(crate) const BUTTON_COUNT: usize = 8;

impl MouseButton {
    /// Slot of this button in the button-state table
    pub fn index(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// Modifier-key state, updated from platform modifier-change events
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Current window geometry: outer position and inner (client-area) size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowShape {
    /// Outer x position in physical pixels
    pub x: i32,
    /// Outer y position in physical pixels
    pub y: i32,
    /// Client-area width in physical pixels
    pub width: u32,
    /// Client-area height in physical pixels
    pub height: u32,
}

/// A normalized platform event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer moved, or a button was pressed/released at the given position
    Mouse {
        action: Action,
        x: i32,
        y: i32,
        btn: MouseButton,
    },

    /// A physical key was pressed or released
    Key {
        action: Action,
        keycode: Keycode,
    },

    /// Committed character input (only while text input is enabled)
    Text {
        text: String,
    },

    /// Window moved to a new outer position
    Move {
        x: i32,
        y: i32,
    },

    /// Window client area resized
    Resize {
        width: u32,
        height: u32,
    },

    /// Window gained or lost keyboard focus
    Focus {
        has_focus: bool,
    },

    /// Window close requested
    Close,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
