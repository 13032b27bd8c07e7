//! Portable key codes
//!
//! Symbolic (read: layout-independent) names for keyboard keys, plus the
//! mapping from the platform layer's physical key codes. Every `Keycode`
//! has a stable slot in the 256-entry key-state table.

use winit::keyboard::KeyCode;

/// The symbolic name for a physical key on the keyboard.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keycode {
    /// Platform key with no portable name
    Unknown,

    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,

    KeypadAdd,
    KeypadSubtract,
    KeypadMultiply,
    KeypadDivide,
    KeypadDecimal,
    KeypadEnter,

    /// For any country/region, the '=+' key.
    Equals,
    /// For any country/region, the ',<' key.
    Comma,
    /// For any country/region, the '-_' key.
    Minus,
    /// For any country/region, the '.>' key.
    Period,

    /// For the US standard keyboard, the ';:' key.
    Semicolon,
    /// For the US standard keyboard, the '/?' key.
    Slash,
    /// For the US standard keyboard, the '`~' key.
    Grave,
    /// For the US standard keyboard, the '[{' key.
    LBracket,
    /// For the US standard keyboard, the '\\|' key.
    Backslash,
    /// For the US standard keyboard, the ']}' key.
    RBracket,
    /// For the US standard keyboard, the 'single-quote/double-quote' key.
    Apostrophe,

    Tab,
    Space,

    ImeKana,
    ImeKanji,
    ImeConvert,
    ImeNonConvert,

    Insert,
    Delete,

    Backspace,
    Enter,
    LShift,
    RShift,
    LControl,
    RControl,
    LMenu,
    RMenu,
    Pause,
    CapsLock,
    Escape,

    PageUp,
    PageDown,
    End,
    Home,

    Left,
    Right,
    Up,
    Down,

    NumLock,
    ScrollLock,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,

    LSuper,
    RSuper,

    Select,
    Snapshot,

    MediaNextTrack,
    MediaPrevTrack,
    MediaStop,
    MediaPlayPause,
}

impl Keycode {
    /// Slot of this key in the key-state table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a platform physical key code to its portable name.
    ///
    /// Total: codes without a portable name become [`Keycode::Unknown`].
    pub fn from_winit(code: KeyCode) -> Keycode {
        match code {
            KeyCode::Digit0 => Keycode::Key0,
            KeyCode::Digit1 => Keycode::Key1,
            KeyCode::Digit2 => Keycode::Key2,
            KeyCode::Digit3 => Keycode::Key3,
            KeyCode::Digit4 => Keycode::Key4,
            KeyCode::Digit5 => Keycode::Key5,
            KeyCode::Digit6 => Keycode::Key6,
            KeyCode::Digit7 => Keycode::Key7,
            KeyCode::Digit8 => Keycode::Key8,
            KeyCode::Digit9 => Keycode::Key9,

            KeyCode::KeyA => Keycode::A,
            KeyCode::KeyB => Keycode::B,
            KeyCode::KeyC => Keycode::C,
            KeyCode::KeyD => Keycode::D,
            KeyCode::KeyE => Keycode::E,
            KeyCode::KeyF => Keycode::F,
            KeyCode::KeyG => Keycode::G,
            KeyCode::KeyH => Keycode::H,
            KeyCode::KeyI => Keycode::I,
            KeyCode::KeyJ => Keycode::J,
            KeyCode::KeyK => Keycode::K,
            KeyCode::KeyL => Keycode::L,
            KeyCode::KeyM => Keycode::M,
            KeyCode::KeyN => Keycode::N,
            KeyCode::KeyO => Keycode::O,
            KeyCode::KeyP => Keycode::P,
            KeyCode::KeyQ => Keycode::Q,
            KeyCode::KeyR => Keycode::R,
            KeyCode::KeyS => Keycode::S,
            KeyCode::KeyT => Keycode::T,
            KeyCode::KeyU => Keycode::U,
            KeyCode::KeyV => Keycode::V,
            KeyCode::KeyW => Keycode::W,
            KeyCode::KeyX => Keycode::X,
            KeyCode::KeyY => Keycode::Y,
            KeyCode::KeyZ => Keycode::Z,

            KeyCode::Numpad0 => Keycode::Keypad0,
            KeyCode::Numpad1 => Keycode::Keypad1,
            KeyCode::Numpad2 => Keycode::Keypad2,
            KeyCode::Numpad3 => Keycode::Keypad3,
            KeyCode::Numpad4 => Keycode::Keypad4,
            KeyCode::Numpad5 => Keycode::Keypad5,
            KeyCode::Numpad6 => Keycode::Keypad6,
            KeyCode::Numpad7 => Keycode::Keypad7,
            KeyCode::Numpad8 => Keycode::Keypad8,
            KeyCode::Numpad9 => Keycode::Keypad9,
            KeyCode::NumpadAdd => Keycode::KeypadAdd,
            KeyCode::NumpadSubtract => Keycode::KeypadSubtract,
            KeyCode::NumpadMultiply => Keycode::KeypadMultiply,
            KeyCode::NumpadDivide => Keycode::KeypadDivide,
            KeyCode::NumpadDecimal => Keycode::KeypadDecimal,
            KeyCode::NumpadEnter => Keycode::KeypadEnter,

            KeyCode::Equal => Keycode::Equals,
            KeyCode::Comma => Keycode::Comma,
            KeyCode::Minus => Keycode::Minus,
            KeyCode::Period => Keycode::Period,

            KeyCode::Semicolon => Keycode::Semicolon,
            KeyCode::Slash => Keycode::Slash,
            KeyCode::Backquote => Keycode::Grave,
            KeyCode::BracketLeft => Keycode::LBracket,
            KeyCode::Backslash => Keycode::Backslash,
            KeyCode::BracketRight => Keycode::RBracket,
            KeyCode::Quote => Keycode::Apostrophe,

            KeyCode::Tab => Keycode::Tab,
            KeyCode::Space => Keycode::Space,

            KeyCode::KanaMode => Keycode::ImeKana,
            KeyCode::Hiragana => Keycode::ImeKana,
            KeyCode::Katakana => Keycode::ImeKanji,
            KeyCode::Convert => Keycode::ImeConvert,
            KeyCode::NonConvert => Keycode::ImeNonConvert,

            KeyCode::Insert => Keycode::Insert,
            KeyCode::Delete => Keycode::Delete,

            KeyCode::Backspace => Keycode::Backspace,
            KeyCode::Enter => Keycode::Enter,
            KeyCode::ShiftLeft => Keycode::LShift,
            KeyCode::ShiftRight => Keycode::RShift,
            KeyCode::ControlLeft => Keycode::LControl,
            KeyCode::ControlRight => Keycode::RControl,
            KeyCode::AltLeft => Keycode::LMenu,
            KeyCode::AltRight => Keycode::RMenu,
            KeyCode::Pause => Keycode::Pause,
            KeyCode::CapsLock => Keycode::CapsLock,
            KeyCode::Escape => Keycode::Escape,

            KeyCode::PageUp => Keycode::PageUp,
            KeyCode::PageDown => Keycode::PageDown,
            KeyCode::End => Keycode::End,
            KeyCode::Home => Keycode::Home,

            KeyCode::ArrowLeft => Keycode::Left,
            KeyCode::ArrowRight => Keycode::Right,
            KeyCode::ArrowUp => Keycode::Up,
            KeyCode::ArrowDown => Keycode::Down,

            KeyCode::NumLock => Keycode::NumLock,
            KeyCode::ScrollLock => Keycode::ScrollLock,

            KeyCode::F1 => Keycode::F1,
            KeyCode::F2 => Keycode::F2,
            KeyCode::F3 => Keycode::F3,
            KeyCode::F4 => Keycode::F4,
            KeyCode::F5 => Keycode::F5,
            KeyCode::F6 => Keycode::F6,
            KeyCode::F7 => Keycode::F7,
            KeyCode::F8 => Keycode::F8,
            KeyCode::F9 => Keycode::F9,
            KeyCode::F10 => Keycode::F10,
            KeyCode::F11 => Keycode::F11,
            KeyCode::F12 => Keycode::F12,
            KeyCode::F13 => Keycode::F13,
            KeyCode::F14 => Keycode::F14,
            KeyCode::F15 => Keycode::F15,
            KeyCode::F16 => Keycode::F16,
            KeyCode::F17 => Keycode::F17,
            KeyCode::F18 => Keycode::F18,
            KeyCode::F19 => Keycode::F19,
            KeyCode::F20 => Keycode::F20,
            KeyCode::F21 => Keycode::F21,
            KeyCode::F22 => Keycode::F22,
            KeyCode::F23 => Keycode::F23,
            KeyCode::F24 => Keycode::F24,

            KeyCode::SuperLeft => Keycode::LSuper,
            KeyCode::SuperRight => Keycode::RSuper,

            KeyCode::MediaSelect => Keycode::Select,
            KeyCode::PrintScreen => Keycode::Snapshot,

            KeyCode::MediaTrackNext => Keycode::MediaNextTrack,
            KeyCode::MediaTrackPrevious => Keycode::MediaPrevTrack,
            KeyCode::MediaStop => Keycode::MediaStop,
            KeyCode::MediaPlayPause => Keycode::MediaPlayPause,

            _ => Keycode::Unknown,
        }
    }
}

impl From<KeyCode> for Keycode {
    fn from(code: KeyCode) -> Self {
        Keycode::from_winit(code)
    }
}

#[cfg(test)]
#[path = "keycode_tests.rs"]
mod tests;
