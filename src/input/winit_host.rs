//! winit as the host windowing system
//!
//! [`WinitSurface`] gives the [`InputManager`] access to the window, and
//! [`WinitInput`] turns `WindowEvent`s into intake calls.

use std::sync::Arc;

use tracing::trace;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use super::codes::{KeyCode, PhysicalButton};
use super::error::InputError;
use super::host::{CursorControl, CursorStyle, InputSurface, Point, Size};
use super::manager::InputManager;
use crate::config::InputConfig;

impl From<MouseButton> for PhysicalButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PhysicalButton::Primary,
            MouseButton::Middle => PhysicalButton::Middle,
            MouseButton::Right => PhysicalButton::Secondary,
            MouseButton::Back => PhysicalButton::Other(4),
            MouseButton::Forward => PhysicalButton::Other(5),
            MouseButton::Other(n) => PhysicalButton::Other(n),
        }
    }
}

/// Rounds a winit cursor position to whole pixels
pub fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.round() as i32, position.y.round() as i32)
}

/// A winit window as an input surface
///
/// winit reports cursor positions relative to the window's client area and
/// places the cursor in the same space, so screen and surface coordinates
/// coincide here.
pub struct WinitSurface {
    window: Arc<Window>,
}

impl WinitSurface {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl InputSurface for WinitSurface {
    fn is_showing(&self) -> bool {
        // Platforms that can't tell report None; assume visible
        self.window.is_visible().unwrap_or(true) && !self.window.is_minimized().unwrap_or(false)
    }

    fn size(&self) -> Size {
        let size = self.window.inner_size();
        Size::new(size.width, size.height)
    }

    fn to_screen(&self, local: Point) -> Point {
        local
    }

    /// winit has no way to ask whether cursor placement works, so control is
    /// always granted; a rejected move then drops it again.
    fn acquire_cursor_control(&self) -> Result<Box<dyn CursorControl>, InputError> {
        Ok(Box::new(WinitCursor {
            window: Arc::clone(&self.window),
        }))
    }

    fn set_cursor(&self, style: CursorStyle) {
        self.window
            .set_cursor_visible(matches!(style, CursorStyle::Default));
    }
}

struct WinitCursor {
    window: Arc<Window>,
}

impl CursorControl for WinitCursor {
    fn move_cursor(&mut self, to: Point) -> Result<(), InputError> {
        self.window
            .set_cursor_position(PhysicalPosition::new(to.x, to.y))
            .map_err(|e| InputError::CursorMoveRejected(e.to_string()))
    }
}

/// Translates winit window events into [`InputManager`] intake calls
#[derive(Debug, Clone)]
pub struct WinitInput {
    pixels_per_notch: f64,
    /// Fractional wheel rotation not yet reported
    wheel_remainder: f64,
    buttons_down: u32,
}

impl WinitInput {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            pixels_per_notch: config.wheel_pixels_per_notch.max(1.0),
            wheel_remainder: 0.0,
            buttons_down: 0,
        }
    }

    /// Feeds one window event to `input`
    ///
    /// Returns true if the event was an input event.
    pub fn handle_window_event(&mut self, input: &InputManager, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return false;
                };
                let Some(code) = KeyCode::from_winit(key) else {
                    trace!(?key, "Unmapped key");
                    return false;
                };

                match event.state {
                    ElementState::Pressed => {
                        // Auto-repeat is not a new physical press
                        if !event.repeat {
                            input.key_pressed(code);
                        }
                        if event.text.is_some() {
                            input.key_typed(code);
                        }
                    }
                    ElementState::Released => input.key_released(code),
                }
                true
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = PhysicalButton::from(*button);
                match state {
                    ElementState::Pressed => {
                        self.buttons_down += 1;
                        input.mouse_pressed(button);
                    }
                    ElementState::Released => {
                        self.buttons_down = self.buttons_down.saturating_sub(1);
                        input.mouse_released(button);
                    }
                }
                true
            }

            WindowEvent::CursorMoved { position, .. } => {
                let point = to_point(*position);
                if self.buttons_down > 0 {
                    input.mouse_dragged(point);
                } else {
                    input.mouse_moved(point);
                }
                true
            }

            WindowEvent::CursorEntered { .. } => {
                input.mouse_entered(input.mouse_position());
                true
            }

            WindowEvent::CursorLeft { .. } => {
                input.mouse_exited(input.mouse_position());
                // Releases outside the window are not delivered
                self.buttons_down = 0;
                true
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let notches = self.wheel_notches(*delta);
                if notches != 0 {
                    input.mouse_wheel(notches);
                }
                true
            }

            _ => false,
        }
    }

    /// Converts a scroll delta to whole wheel notches
    ///
    /// Positive winit deltas scroll away from the user, which is a negative
    /// (wheel up) rotation. Fractions carry over to the next event.
    pub fn wheel_notches(&mut self, delta: MouseScrollDelta) -> i32 {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
            MouseScrollDelta::PixelDelta(pos) => -pos.y / self.pixels_per_notch,
        };

        let total = self.wheel_remainder + lines;
        let notches = total.trunc();
        self.wheel_remainder = total - notches;
        notches as i32
    }
}
