//! Unit tests for window.rs
//!
//! The platform window itself needs a display, so these tests cover the pure
//! translation helpers feeding the event pump.

use super::{translate_button, translate_modifiers, wheel_button};
use crate::event::{Modifiers, MouseButton};
use winit::dpi::PhysicalPosition;
use winit::event::MouseScrollDelta;
use winit::keyboard::ModifiersState;

// ============================================================================
// BUTTON TRANSLATION
// ============================================================================

#[test]
fn test_standard_buttons_translate() {
    assert_eq!(
        translate_button(winit::event::MouseButton::Left),
        Some(MouseButton::Left)
    );
    assert_eq!(
        translate_button(winit::event::MouseButton::Middle),
        Some(MouseButton::Middle)
    );
    assert_eq!(
        translate_button(winit::event::MouseButton::Right),
        Some(MouseButton::Right)
    );
    assert_eq!(
        translate_button(winit::event::MouseButton::Back),
        Some(MouseButton::Back)
    );
    assert_eq!(
        translate_button(winit::event::MouseButton::Forward),
        Some(MouseButton::Forward)
    );
}

#[test]
fn test_unnumbered_buttons_are_dropped() {
    assert_eq!(translate_button(winit::event::MouseButton::Other(9)), None);
}

// ============================================================================
// WHEEL TRANSLATION
// ============================================================================

#[test]
fn test_wheel_line_delta_sign_picks_slot() {
    assert_eq!(
        wheel_button(MouseScrollDelta::LineDelta(0.0, 1.0)),
        Some(MouseButton::WheelUp)
    );
    assert_eq!(
        wheel_button(MouseScrollDelta::LineDelta(0.0, -2.0)),
        Some(MouseButton::WheelDown)
    );
}

#[test]
fn test_wheel_pixel_delta_sign_picks_slot() {
    assert_eq!(
        wheel_button(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
        Some(MouseButton::WheelUp)
    );
    assert_eq!(
        wheel_button(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -0.5))),
        Some(MouseButton::WheelDown)
    );
}

#[test]
fn test_horizontal_only_wheel_is_dropped() {
    assert_eq!(wheel_button(MouseScrollDelta::LineDelta(1.0, 0.0)), None);
}

// ============================================================================
// MODIFIER TRANSLATION
// ============================================================================

#[test]
fn test_empty_modifiers_translate_empty() {
    assert_eq!(
        translate_modifiers(ModifiersState::empty()),
        Modifiers::empty()
    );
}

#[test]
fn test_each_modifier_translates() {
    assert_eq!(
        translate_modifiers(ModifiersState::SHIFT),
        Modifiers::SHIFT
    );
    assert_eq!(
        translate_modifiers(ModifiersState::CONTROL),
        Modifiers::CTRL
    );
    assert_eq!(translate_modifiers(ModifiersState::ALT), Modifiers::ALT);
    assert_eq!(
        translate_modifiers(ModifiersState::SUPER),
        Modifiers::SUPER
    );
}

#[test]
fn test_combined_modifiers_translate() {
    let state = ModifiersState::SHIFT | ModifiersState::CONTROL;
    assert_eq!(
        translate_modifiers(state),
        Modifiers::SHIFT | Modifiers::CTRL
    );
}
