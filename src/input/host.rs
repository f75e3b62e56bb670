//! Interface to the host windowing system
//!
//! The host pushes raw events into [`InputManager`](super::InputManager) and
//! is asked back for surface geometry and for control over the cursor.

use super::error::InputError;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Center of a surface of this size, in surface-local coordinates
    pub fn center(&self) -> Point {
        Point::new(half(self.width), half(self.height))
    }
}

fn half(extent: u32) -> i32 {
    i32::try_from(extent / 2).unwrap_or(i32::MAX)
}

/// Cursor appearance over the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// No visible cursor, typically used with relative mouse mode
    Hidden,
}

/// Programmatic control over the system cursor
pub trait CursorControl: Send {
    /// Moves the cursor to a point in screen coordinates
    fn move_cursor(&mut self, to: Point) -> Result<(), InputError>;
}

/// The surface that receives input
pub trait InputSurface: Send + Sync {
    /// Whether the surface is currently visible on screen
    fn is_showing(&self) -> bool;

    /// Surface size in pixels
    fn size(&self) -> Size;

    /// Converts a surface-local point to screen coordinates
    fn to_screen(&self, local: Point) -> Point;

    /// Tries to acquire control over the system cursor
    ///
    /// Hosts that cannot place the cursor return
    /// [`InputError::CursorControlUnavailable`].
    fn acquire_cursor_control(&self) -> Result<Box<dyn CursorControl>, InputError>;

    /// Sets the cursor shown over the surface
    fn set_cursor(&self, style: CursorStyle);
}

/// A surface with no window behind it
///
/// Never showing and never grants cursor control. Used before a window exists
/// and by tools that only inspect bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurface;

impl InputSurface for HeadlessSurface {
    fn is_showing(&self) -> bool {
        false
    }

    fn size(&self) -> Size {
        Size::default()
    }

    fn to_screen(&self, local: Point) -> Point {
        local
    }

    fn acquire_cursor_control(&self) -> Result<Box<dyn CursorControl>, InputError> {
        Err(InputError::CursorControlUnavailable(
            "headless surface".to_string(),
        ))
    }

    fn set_cursor(&self, _style: CursorStyle) {}
}
