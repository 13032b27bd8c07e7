//! WsiWindow — platform window plus the normalized event pump
//!
//! The platform event loop is pumped on demand (poll or wait) and every
//! platform event is translated into a portable [`Event`], updating the
//! window's [`InputState`] on the way through.

use std::collections::VecDeque;
use std::time::Duration;

use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Ime, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{ModifiersState, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::{Error, Result};
use crate::event::{Action, Event, Modifiers, MouseButton, WindowShape};
use crate::keycode::Keycode;
use crate::window::state::InputState;

/// Per-event callbacks with default no-op implementations
///
/// Implement the handlers you care about and pass the value to
/// [`WsiWindow::process_events`]:
///
/// ```no_run
/// use aurora_wsi::{Action, EventHandlers, Keycode, WsiWindow};
///
/// struct App;
///
/// impl EventHandlers for App {
///     fn on_key_event(&mut self, action: Action, keycode: Keycode) {
///         println!("key {:?} {:?}", keycode, action);
///     }
/// }
///
/// let mut window = WsiWindow::new("demo", 640, 480)?;
/// let mut app = App;
/// while window.process_events(&mut app) {}
/// # Ok::<(), aurora_wsi::Error>(())
/// ```
pub trait EventHandlers {
    fn on_mouse_event(&mut self, _action: Action, _x: i32, _y: i32, _btn: MouseButton) {}
    fn on_key_event(&mut self, _action: Action, _keycode: Keycode) {}
    fn on_text_event(&mut self, _text: &str) {}
    fn on_move_event(&mut self, _x: i32, _y: i32) {}
    fn on_resize_event(&mut self, _width: u32, _height: u32) {}
    fn on_focus_event(&mut self, _has_focus: bool) {}
    fn on_close_event(&mut self) {}
}

/// Application-side half of the platform event loop.
///
/// Holds the platform window once the loop delivers it, the input state, and
/// the queue of normalized events waiting for the caller.
struct WindowApp {
    attributes: WindowAttributes,
    window: Option<Window>,
    state: InputState,
    events: VecDeque<Event>,
}

impl WindowApp {
    fn new(attributes: WindowAttributes, width: u32, height: u32) -> Self {
        Self {
            attributes,
            window: None,
            state: InputState::new(WindowShape {
                x: 0,
                y: 0,
                width,
                height,
            }),
            events: VecDeque::new(),
        }
    }

    fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                // Seed the shape from what the platform actually gave us;
                // this is initial state, not an event.
                let size = window.inner_size();
                let position = window
                    .outer_position()
                    .unwrap_or_else(|_| PhysicalPosition::new(0, 0));
                self.state.move_event(position.x, position.y);
                self.state.resize_event(size.width, size.height);
                self.window = Some(window);
            }
            Err(e) => {
                crate::wsi_error!("aurora::Window", "Failed to create window: {}", e);
                self.state.close_event();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                let e = self.state.close_event();
                self.push(e);
            }
            WindowEvent::Destroyed => {
                if self.state.is_running() {
                    let e = self.state.close_event();
                    self.push(e);
                }
            }
            WindowEvent::Resized(size) => {
                let e = self.state.resize_event(size.width, size.height);
                self.push(e);
            }
            WindowEvent::Moved(position) => {
                let e = self.state.move_event(position.x, position.y);
                self.push(e);
            }
            WindowEvent::Focused(has_focus) => {
                let e = self.state.focus_event(has_focus);
                self.push(e);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let e = self.state.mouse_event(
                    Action::Move,
                    position.x as i32,
                    position.y as i32,
                    MouseButton::None,
                );
                self.push(e);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = translate_button(button) {
                    let action = if state == ElementState::Pressed {
                        Action::Down
                    } else {
                        Action::Up
                    };
                    let (x, y) = self.state.mouse_pos();
                    let e = self.state.mouse_event(action, x, y, btn);
                    self.push(e);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // One press/release pair per wheel event, on button slot 4/5
                if let Some(btn) = wheel_button(delta) {
                    let (x, y) = self.state.mouse_pos();
                    let down = self.state.mouse_event(Action::Down, x, y, btn);
                    self.push(down);
                    let up = self.state.mouse_event(Action::Up, x, y, btn);
                    self.push(up);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let keycode = match event.physical_key {
                    PhysicalKey::Code(code) => Keycode::from_winit(code),
                    PhysicalKey::Unidentified(_) => Keycode::Unknown,
                };
                let action = match event.state {
                    ElementState::Pressed => Action::Down,
                    ElementState::Released => Action::Up,
                };
                let e = self.state.key_event(action, keycode);
                self.push(e);

                // Committed text rides along with the key press
                if action == Action::Down && self.state.text_input() {
                    if let Some(text) = event.text.as_ref() {
                        let e = self.state.text_event(text.as_str());
                        self.push(e);
                    }
                }
            }
            WindowEvent::Ime(Ime::Commit(text)) => {
                if self.state.text_input() {
                    let e = self.state.text_event(&text);
                    self.push(e);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.state.set_modifiers(translate_modifiers(modifiers.state()));
            }
            _ => {}
        }
    }
}

/// Map a platform mouse button to its state-table slot.
///
/// Unnumbered extra buttons are dropped.
fn translate_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Back => Some(MouseButton::Back),
        winit::event::MouseButton::Forward => Some(MouseButton::Forward),
        winit::event::MouseButton::Other(_) => None,
    }
}

/// Map a wheel delta to the button slot it presses (4 up, 5 down)
fn wheel_button(delta: MouseScrollDelta) -> Option<MouseButton> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(position) => position.y,
    };
    if vertical > 0.0 {
        Some(MouseButton::WheelUp)
    } else if vertical < 0.0 {
        Some(MouseButton::WheelDown)
    } else {
        None
    }
}

fn translate_modifiers(state: ModifiersState) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if state.shift_key() {
        modifiers |= Modifiers::SHIFT;
    }
    if state.control_key() {
        modifiers |= Modifiers::CTRL;
    }
    if state.alt_key() {
        modifiers |= Modifiers::ALT;
    }
    if state.super_key() {
        modifiers |= Modifiers::SUPER;
    }
    modifiers
}

/// Platform window with a normalized event pump
///
/// Events are pulled with [`poll_event`](WsiWindow::poll_event) (non-blocking),
/// [`get_event`](WsiWindow::get_event) (waiting), or dispatched to an
/// [`EventHandlers`] value with [`process_events`](WsiWindow::process_events).
/// Device state stays queryable between events.
pub struct WsiWindow {
    event_loop: EventLoop<()>,
    app: WindowApp,
}

impl WsiWindow {
    /// Create the platform event loop and window
    ///
    /// # Arguments
    ///
    /// * `title` - Window title
    /// * `width` - Client-area width in logical pixels
    /// * `height` - Client-area height in logical pixels
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let event_loop = EventLoop::new().map_err(|e| {
            crate::wsi_error!("aurora::Window", "Failed to create event loop: {}", e);
            Error::InitializationFailed(format!("Failed to create event loop: {}", e))
        })?;

        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height));

        let mut window = Self {
            event_loop,
            app: WindowApp::new(attributes, width, height),
        };

        // The platform hands the window over on the first resumed callback,
        // so pump the loop until it arrives.
        while window.app.window.is_none() {
            let status = window
                .event_loop
                .pump_app_events(Some(Duration::from_millis(10)), &mut window.app);
            if let PumpStatus::Exit(code) = status {
                crate::wsi_error!(
                    "aurora::Window",
                    "Event loop exited during window creation (status {})",
                    code
                );
                return Err(Error::InitializationFailed(
                    "Event loop exited during window creation".to_string(),
                ));
            }
            if !window.app.state.is_running() {
                return Err(Error::InitializationFailed(
                    "Window creation failed".to_string(),
                ));
            }
        }

        crate::wsi_info!(
            "aurora::Window",
            "Window created: \"{}\" ({}x{})",
            title,
            width,
            height
        );
        Ok(window)
    }

    /// Pump the platform loop once, queueing any normalized events
    fn pump(&mut self, timeout: Option<Duration>) {
        let status = self.event_loop.pump_app_events(timeout, &mut self.app);
        if let PumpStatus::Exit(_) = status {
            if self.app.state.is_running() {
                let event = self.app.state.close_event();
                self.app.events.push_back(event);
            }
        }
    }

    /// Fetch the next normalized event without blocking
    pub fn poll_event(&mut self) -> Option<Event> {
        if self.app.events.is_empty() {
            self.pump(Some(Duration::ZERO));
        }
        self.app.events.pop_front()
    }

    /// Fetch the next normalized event, waiting for one to arrive
    ///
    /// Returns `None` once the window has stopped running and the queue is
    /// drained.
    pub fn get_event(&mut self) -> Option<Event> {
        while self.app.events.is_empty() && self.app.state.is_running() {
            self.pump(None);
        }
        self.app.events.pop_front()
    }

    /// Drain pending events into the given handlers
    ///
    /// Returns false once the window has stopped running:
    ///
    /// ```no_run
    /// # use aurora_wsi::{EventHandlers, WsiWindow};
    /// # struct App;
    /// # impl EventHandlers for App {}
    /// # let mut window = WsiWindow::new("demo", 640, 480)?;
    /// # let mut app = App;
    /// while window.process_events(&mut app) {}
    /// # Ok::<(), aurora_wsi::Error>(())
    /// ```
    pub fn process_events(&mut self, handlers: &mut dyn EventHandlers) -> bool {
        self.pump(Some(Duration::ZERO));
        while let Some(event) = self.app.events.pop_front() {
            match event {
                Event::Mouse { action, x, y, btn } => handlers.on_mouse_event(action, x, y, btn),
                Event::Key { action, keycode } => handlers.on_key_event(action, keycode),
                Event::Text { text } => handlers.on_text_event(&text),
                Event::Move { x, y } => handlers.on_move_event(x, y),
                Event::Resize { width, height } => handlers.on_resize_event(width, height),
                Event::Focus { has_focus } => handlers.on_focus_event(has_focus),
                Event::Close => handlers.on_close_event(),
            }
        }
        self.app.state.is_running()
    }

    /// Queue a close event; [`is_running`](WsiWindow::is_running) turns false
    /// immediately
    pub fn close(&mut self) {
        let event = self.app.state.close_event();
        self.app.events.push_back(event);
    }

    // --- State queries ---

    /// Current pressed state of a key
    pub fn key_state(&self, keycode: Keycode) -> bool {
        self.app.state.key_state(keycode)
    }

    /// Current pressed state of a mouse button
    pub fn btn_state(&self, btn: MouseButton) -> bool {
        self.app.state.btn_state(btn)
    }

    /// Last reported cursor position
    pub fn mouse_pos(&self) -> (i32, i32) {
        self.app.state.mouse_pos()
    }

    /// Current window position and size
    pub fn shape(&self) -> WindowShape {
        self.app.state.shape()
    }

    /// Whether the window has keyboard focus
    pub fn has_focus(&self) -> bool {
        self.app.state.has_focus()
    }

    /// Whether the window is still open
    pub fn is_running(&self) -> bool {
        self.app.state.is_running()
    }

    /// Current modifier-key state
    pub fn modifiers(&self) -> Modifiers {
        self.app.state.modifiers()
    }

    /// Whether text events are enabled
    pub fn text_input(&self) -> bool {
        self.app.state.text_input()
    }

    /// Enable or disable text events (allows the IME where relevant)
    pub fn set_text_input(&mut self, enabled: bool) {
        self.app.state.set_text_input(enabled);
        if let Some(window) = &self.app.window {
            window.set_ime_allowed(enabled);
        }
    }

    // --- Window manipulation ---

    /// Change the window title
    pub fn set_title(&self, title: &str) {
        if let Some(window) = &self.app.window {
            window.set_title(title);
        }
    }

    /// Request a new client-area size, in physical pixels
    pub fn set_size(&mut self, width: u32, height: u32) {
        if let Some(window) = &self.app.window {
            let _ = window.request_inner_size(PhysicalSize::new(width, height));
        }
    }

    /// Move the window to a new outer position, in physical pixels
    pub fn set_position(&mut self, x: i32, y: i32) {
        if let Some(window) = &self.app.window {
            window.set_outer_position(PhysicalPosition::new(x, y));
        }
    }

    /// Borrow the underlying platform window
    pub fn raw(&self) -> Option<&Window> {
        self.app.window.as_ref()
    }
}

impl HasWindowHandle for WsiWindow {
    fn window_handle(&self) -> std::result::Result<WindowHandle<'_>, HandleError> {
        match &self.app.window {
            Some(window) => window.window_handle(),
            None => Err(HandleError::Unavailable),
        }
    }
}

impl HasDisplayHandle for WsiWindow {
    fn display_handle(&self) -> std::result::Result<DisplayHandle<'_>, HandleError> {
        match &self.app.window {
            Some(window) => window.display_handle(),
            None => Err(HandleError::Unavailable),
        }
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
