//! Physical input codes
//!
//! Key codes use the USB HID keyboard usage table (page 0x07), which gives a
//! small, bounded integer space shared by every desktop platform. Mouse codes
//! are a fixed set of nine logical sources.

use std::fmt;

use enum_map::Enum;
use winit::keyboard::KeyCode as WinitKeyCode;

/// A physical key, identified by its HID usage code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(pub u16);

macro_rules! key_codes {
    ($($konst:ident = $code:literal, $winit:ident, $name:literal;)*) => {
        impl KeyCode {
            $(pub const $konst: Self = Self($code);)*

            /// Human-readable name of this key, if it is a known key
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($code => Some($name),)*
                    _ => None,
                }
            }

            /// Converts a winit physical key code
            ///
            /// Returns `None` for keys outside the supported table.
            pub fn from_winit(key: WinitKeyCode) -> Option<Self> {
                match key {
                    $(WinitKeyCode::$winit => Some(Self::$konst),)*
                    _ => None,
                }
            }
        }
    };
}

key_codes! {
    A = 0x04, KeyA, "A";
    B = 0x05, KeyB, "B";
    C = 0x06, KeyC, "C";
    D = 0x07, KeyD, "D";
    E = 0x08, KeyE, "E";
    F = 0x09, KeyF, "F";
    G = 0x0A, KeyG, "G";
    H = 0x0B, KeyH, "H";
    I = 0x0C, KeyI, "I";
    J = 0x0D, KeyJ, "J";
    K = 0x0E, KeyK, "K";
    L = 0x0F, KeyL, "L";
    M = 0x10, KeyM, "M";
    N = 0x11, KeyN, "N";
    O = 0x12, KeyO, "O";
    P = 0x13, KeyP, "P";
    Q = 0x14, KeyQ, "Q";
    R = 0x15, KeyR, "R";
    S = 0x16, KeyS, "S";
    T = 0x17, KeyT, "T";
    U = 0x18, KeyU, "U";
    V = 0x19, KeyV, "V";
    W = 0x1A, KeyW, "W";
    X = 0x1B, KeyX, "X";
    Y = 0x1C, KeyY, "Y";
    Z = 0x1D, KeyZ, "Z";

    NUM_1 = 0x1E, Digit1, "1";
    NUM_2 = 0x1F, Digit2, "2";
    NUM_3 = 0x20, Digit3, "3";
    NUM_4 = 0x21, Digit4, "4";
    NUM_5 = 0x22, Digit5, "5";
    NUM_6 = 0x23, Digit6, "6";
    NUM_7 = 0x24, Digit7, "7";
    NUM_8 = 0x25, Digit8, "8";
    NUM_9 = 0x26, Digit9, "9";
    NUM_0 = 0x27, Digit0, "0";

    ENTER = 0x28, Enter, "Enter";
    ESCAPE = 0x29, Escape, "Escape";
    BACKSPACE = 0x2A, Backspace, "Backspace";
    TAB = 0x2B, Tab, "Tab";
    SPACE = 0x2C, Space, "Space";
    MINUS = 0x2D, Minus, "Minus";
    EQUAL = 0x2E, Equal, "Equals";
    BRACKET_LEFT = 0x2F, BracketLeft, "Open Bracket";
    BRACKET_RIGHT = 0x30, BracketRight, "Close Bracket";
    BACKSLASH = 0x31, Backslash, "Back Slash";
    SEMICOLON = 0x33, Semicolon, "Semicolon";
    QUOTE = 0x34, Quote, "Quote";
    BACKQUOTE = 0x35, Backquote, "Back Quote";
    COMMA = 0x36, Comma, "Comma";
    PERIOD = 0x37, Period, "Period";
    SLASH = 0x38, Slash, "Slash";
    CAPS_LOCK = 0x39, CapsLock, "Caps Lock";

    F1 = 0x3A, F1, "F1";
    F2 = 0x3B, F2, "F2";
    F3 = 0x3C, F3, "F3";
    F4 = 0x3D, F4, "F4";
    F5 = 0x3E, F5, "F5";
    F6 = 0x3F, F6, "F6";
    F7 = 0x40, F7, "F7";
    F8 = 0x41, F8, "F8";
    F9 = 0x42, F9, "F9";
    F10 = 0x43, F10, "F10";
    F11 = 0x44, F11, "F11";
    F12 = 0x45, F12, "F12";

    PRINT_SCREEN = 0x46, PrintScreen, "Print Screen";
    SCROLL_LOCK = 0x47, ScrollLock, "Scroll Lock";
    PAUSE = 0x48, Pause, "Pause";
    INSERT = 0x49, Insert, "Insert";
    HOME = 0x4A, Home, "Home";
    PAGE_UP = 0x4B, PageUp, "Page Up";
    DELETE = 0x4C, Delete, "Delete";
    END = 0x4D, End, "End";
    PAGE_DOWN = 0x4E, PageDown, "Page Down";
    RIGHT = 0x4F, ArrowRight, "Right";
    LEFT = 0x50, ArrowLeft, "Left";
    DOWN = 0x51, ArrowDown, "Down";
    UP = 0x52, ArrowUp, "Up";

    NUM_LOCK = 0x53, NumLock, "Num Lock";
    NUMPAD_DIVIDE = 0x54, NumpadDivide, "NumPad /";
    NUMPAD_MULTIPLY = 0x55, NumpadMultiply, "NumPad *";
    NUMPAD_SUBTRACT = 0x56, NumpadSubtract, "NumPad -";
    NUMPAD_ADD = 0x57, NumpadAdd, "NumPad +";
    NUMPAD_ENTER = 0x58, NumpadEnter, "NumPad Enter";
    NUMPAD_1 = 0x59, Numpad1, "NumPad-1";
    NUMPAD_2 = 0x5A, Numpad2, "NumPad-2";
    NUMPAD_3 = 0x5B, Numpad3, "NumPad-3";
    NUMPAD_4 = 0x5C, Numpad4, "NumPad-4";
    NUMPAD_5 = 0x5D, Numpad5, "NumPad-5";
    NUMPAD_6 = 0x5E, Numpad6, "NumPad-6";
    NUMPAD_7 = 0x5F, Numpad7, "NumPad-7";
    NUMPAD_8 = 0x60, Numpad8, "NumPad-8";
    NUMPAD_9 = 0x61, Numpad9, "NumPad-9";
    NUMPAD_0 = 0x62, Numpad0, "NumPad-0";
    NUMPAD_DECIMAL = 0x63, NumpadDecimal, "NumPad .";

    CONTROL_LEFT = 0xE0, ControlLeft, "Ctrl";
    SHIFT_LEFT = 0xE1, ShiftLeft, "Shift";
    ALT_LEFT = 0xE2, AltLeft, "Alt";
    SUPER_LEFT = 0xE3, SuperLeft, "Meta";
    CONTROL_RIGHT = 0xE4, ControlRight, "Right Ctrl";
    SHIFT_RIGHT = 0xE5, ShiftRight, "Right Shift";
    ALT_RIGHT = 0xE6, AltRight, "Right Alt";
    SUPER_RIGHT = 0xE7, SuperRight, "Right Meta";
}

impl KeyCode {
    /// Size of the supported key code space; codes at or above this are never bound
    pub const COUNT: u16 = 256;

    /// Returns true if this code can be bound to an action
    pub fn is_supported(self) -> bool {
        self.0 < Self::COUNT
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown keyCode: 0x{:02X}", self.0),
        }
    }
}

/// Physical mouse button as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalButton {
    /// Usually the left button
    Primary,
    /// Wheel click
    Middle,
    /// Usually the right button
    Secondary,
    /// Any extra button; never bound
    Other(u16),
}

/// Logical mouse sources that can be bound to an action
///
/// Declaration order is the ordering used when listing mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
pub enum MouseCode {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    WheelUp,
    WheelDown,
    Button1,
    Button2,
    Button3,
}

impl MouseCode {
    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            MouseCode::MoveLeft => "Mouse Left",
            MouseCode::MoveRight => "Mouse Right",
            MouseCode::MoveUp => "Mouse Up",
            MouseCode::MoveDown => "Mouse Down",
            MouseCode::WheelUp => "Mouse Wheel Up",
            MouseCode::WheelDown => "Mouse Wheel Down",
            MouseCode::Button1 => "Mouse Button 1",
            MouseCode::Button2 => "Mouse Button 2",
            MouseCode::Button3 => "Mouse Button 3",
        }
    }

    /// Maps a physical button to its bindable code
    pub fn from_button(button: PhysicalButton) -> Option<Self> {
        match button {
            PhysicalButton::Primary => Some(MouseCode::Button1),
            PhysicalButton::Middle => Some(MouseCode::Button2),
            PhysicalButton::Secondary => Some(MouseCode::Button3),
            PhysicalButton::Other(_) => None,
        }
    }
}

impl fmt::Display for MouseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
