//! Platform-independent input-device state
//!
//! Platform event handlers call these functions to store input-device state,
//! and package the event parameters into a portable [`Event`] value.

use crate::event::{Action, Event, Modifiers, MouseButton, WindowShape, BUTTON_COUNT};
use crate::keycode::Keycode;

/// Number of slots in the key-state table
const KEY_COUNT: usize = 256;

/// Input-device and window state, updated as events are packaged
///
/// One instance lives inside every [`WsiWindow`](crate::WsiWindow); it is
/// public so event translation can be exercised without a platform window.
pub struct InputState {
    /// Key-state table, indexed by `Keycode::index()`
    keystate: [bool; KEY_COUNT],
    /// Button-state table, indexed by `MouseButton::index()`
    btnstate: [bool; BUTTON_COUNT],
    /// Last reported cursor position, in physical pixels
    mousepos: (i32, i32),
    /// Window position and size
    shape: WindowShape,
    /// Window has keyboard focus
    has_focus: bool,
    /// Window has not been closed
    running: bool,
    /// Text events are enabled
    text_input: bool,
    /// Modifier-key state
    modifiers: Modifiers,
}

impl InputState {
    pub fn new(shape: WindowShape) -> Self {
        Self {
            keystate: [false; KEY_COUNT],
            btnstate: [false; BUTTON_COUNT],
            mousepos: (0, 0),
            shape,
            has_focus: false,
            running: true,
            text_input: false,
            modifiers: Modifiers::empty(),
        }
    }

    // --- Events ---

    /// Package a mouse event, tracking cursor position and button state
    pub fn mouse_event(&mut self, action: Action, x: i32, y: i32, btn: MouseButton) -> Event {
        self.mousepos = (x, y);
        if action != Action::Move {
            // Keep track of button state
            self.btnstate[btn.index()] = action == Action::Down;
        }
        Event::Mouse { action, x, y, btn }
    }

    /// Package a key event, tracking key state
    pub fn key_event(&mut self, action: Action, keycode: Keycode) -> Event {
        self.keystate[keycode.index()] = action == Action::Down;
        Event::Key { action, keycode }
    }

    /// Package a text event (committed character input)
    pub fn text_event(&mut self, text: &str) -> Event {
        Event::Text {
            text: text.to_string(),
        }
    }

    /// Package a window-move event, tracking the outer position
    pub fn move_event(&mut self, x: i32, y: i32) -> Event {
        self.shape.x = x;
        self.shape.y = y;
        Event::Move { x, y }
    }

    /// Package a window-resize event, tracking the client-area size
    pub fn resize_event(&mut self, width: u32, height: u32) -> Event {
        self.shape.width = width;
        self.shape.height = height;
        Event::Resize { width, height }
    }

    /// Package a focus event, tracking the focus flag
    pub fn focus_event(&mut self, has_focus: bool) -> Event {
        self.has_focus = has_focus;
        Event::Focus { has_focus }
    }

    /// Package a close event; the window stops running
    pub fn close_event(&mut self) -> Event {
        self.running = false;
        Event::Close
    }

    // --- State queries ---

    /// Current pressed state of a key
    pub fn key_state(&self, keycode: Keycode) -> bool {
        self.keystate[keycode.index()]
    }

    /// Current pressed state of a mouse button
    pub fn btn_state(&self, btn: MouseButton) -> bool {
        self.btnstate[btn.index()]
    }

    /// Last reported cursor position
    pub fn mouse_pos(&self) -> (i32, i32) {
        self.mousepos
    }

    /// Current window position and size
    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    /// Whether the window has keyboard focus
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the window is still open
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current modifier-key state
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub(crate) fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Whether text events are enabled
    pub fn text_input(&self) -> bool {
        self.text_input
    }

    pub(crate) fn set_text_input(&mut self, enabled: bool) {
        self.text_input = enabled;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(WindowShape::default())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
