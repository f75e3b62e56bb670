//! Binding registry and raw event dispatch

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use enum_map::EnumMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace, warn};

use super::action::GameAction;
use super::codes::{KeyCode, MouseCode, PhysicalButton};
use super::host::{CursorControl, CursorStyle, InputSurface, Point};

/// Physical code to action tables
#[derive(Default)]
struct Bindings {
    keys: BTreeMap<KeyCode, Arc<GameAction>>,
    mouse: EnumMap<MouseCode, Option<Arc<GameAction>>>,
}

impl Bindings {
    fn all_actions(&self) -> impl Iterator<Item = &Arc<GameAction>> {
        self.keys.values().chain(self.mouse.values().flatten())
    }
}

/// Cursor tracking and relative mode emulation
struct Motion {
    surface: Arc<dyn InputSurface>,
    position: Point,
    /// Last recenter target, surface-local
    center: Point,
    recentering: bool,
    /// Present iff relative mode is enabled
    cursor: Option<Box<dyn CursorControl>>,
}

impl Motion {
    fn recenter(&mut self) {
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        if !self.surface.is_showing() {
            return;
        }

        let center = self.surface.size().center();
        let target = self.surface.to_screen(center);
        self.center = center;
        self.recentering = true;

        if let Err(e) = cursor.move_cursor(target) {
            warn!(error = %e, "Falling back to absolute mouse mode");
            self.cursor = None;
            self.recentering = false;
        }
    }
}

/// Maps physical keys and mouse input to [`GameAction`]s
///
/// The host feeds raw events through the intake methods (`key_pressed`,
/// `mouse_moved`, ...); game code binds actions and polls them. All methods
/// take `&self`, so the manager can be shared between the event thread and the
/// game loop.
///
/// Each key or mouse code maps to at most one action. Binding a code again
/// replaces the previous action.
pub struct InputManager {
    bindings: RwLock<Bindings>,
    motion: Mutex<Motion>,
}

impl InputManager {
    /// Creates a manager receiving input from `surface`
    pub fn new(surface: Arc<dyn InputSurface>) -> Self {
        Self {
            bindings: RwLock::new(Bindings::default()),
            motion: Mutex::new(Motion {
                surface,
                position: Point::default(),
                center: Point::default(),
                recentering: false,
                cursor: None,
            }),
        }
    }

    /// Moves the manager to a new surface
    ///
    /// If relative mouse mode was enabled, cursor control is re-acquired from
    /// the new surface.
    pub fn set_surface(&self, surface: Arc<dyn InputSurface>) {
        let relative = {
            let mut motion = self.motion.lock();
            motion.surface = surface;
            motion.recentering = false;
            motion.cursor.take().is_some()
        };
        if relative {
            self.set_relative_mouse_mode(true);
        }
    }

    /// Sets the cursor shown over the surface
    pub fn set_cursor(&self, style: CursorStyle) {
        self.motion.lock().surface.set_cursor(style);
    }

    /// Enables or disables relative mouse mode
    ///
    /// In relative mode the cursor is kept at the surface center so motion is
    /// reported as unbounded deltas. If the host cannot move the cursor the
    /// manager stays in absolute mode; check
    /// [`is_relative_mouse_mode`](Self::is_relative_mouse_mode).
    pub fn set_relative_mouse_mode(&self, enabled: bool) {
        let mut motion = self.motion.lock();
        if enabled == motion.cursor.is_some() {
            return;
        }

        if enabled {
            match motion.surface.acquire_cursor_control() {
                Ok(cursor) => {
                    motion.cursor = Some(cursor);
                    motion.recenter();
                    if motion.cursor.is_some() {
                        info!("Relative mouse mode enabled");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Relative mouse mode unavailable");
                }
            }
        } else {
            motion.cursor = None;
            info!("Relative mouse mode disabled");
        }
    }

    pub fn is_relative_mouse_mode(&self) -> bool {
        self.motion.lock().cursor.is_some()
    }

    /// Last known cursor position, surface-local
    pub fn mouse_position(&self) -> Point {
        self.motion.lock().position
    }

    pub fn mouse_x(&self) -> i32 {
        self.mouse_position().x
    }

    pub fn mouse_y(&self) -> i32 {
        self.mouse_position().y
    }

    /// Binds `action` to a key
    ///
    /// Codes outside the supported range are ignored.
    pub fn map_to_key(&self, action: &Arc<GameAction>, code: KeyCode) {
        if !code.is_supported() {
            debug!(action = action.name(), code = code.0, "Ignoring unsupported key code");
            return;
        }
        debug!(action = action.name(), key = %code, "Mapping key");
        self.bindings.write().keys.insert(code, Arc::clone(action));
    }

    /// Binds `action` to a mouse code
    pub fn map_to_mouse(&self, action: &Arc<GameAction>, code: MouseCode) {
        debug!(action = action.name(), mouse = %code, "Mapping mouse");
        self.bindings.write().mouse[code] = Some(Arc::clone(action));
    }

    /// Removes every binding to `action` and resets it
    pub fn clear_map(&self, action: &GameAction) {
        {
            let mut bindings = self.bindings.write();
            bindings.keys.retain(|_, bound| !is_same(bound, action));
            for slot in bindings.mouse.values_mut() {
                if matches!(&*slot, Some(bound) if is_same(bound, action)) {
                    *slot = None;
                }
            }
        }
        debug!(action = action.name(), "Cleared mappings");
        action.reset();
    }

    /// Names of every input bound to `action`
    ///
    /// Keys come first in ascending code order, then mouse codes in
    /// [`MouseCode`] order.
    pub fn mappings(&self, action: &GameAction) -> Vec<String> {
        let bindings = self.bindings.read();
        let keys = bindings
            .keys
            .iter()
            .filter(|(_, bound)| is_same(bound, action))
            .map(|(code, _)| code.to_string());
        let mouse = bindings
            .mouse
            .iter()
            .filter(|(_, slot)| matches!(slot, Some(bound) if is_same(bound, action)))
            .map(|(code, _)| code.name().to_string());
        keys.chain(mouse).collect()
    }

    /// Resets every bound action once
    ///
    /// Useful when switching screens or game modes so no stale presses leak
    /// through.
    pub fn reset_all_actions(&self) {
        let bindings = self.bindings.read();
        let mut seen = HashSet::new();
        for action in bindings.all_actions() {
            if seen.insert(Arc::as_ptr(action)) {
                action.reset();
            }
        }
        debug!(count = seen.len(), "Reset all actions");
    }

    pub fn key_pressed(&self, code: KeyCode) {
        trace!(key = %code, "Key pressed");
        if let Some(action) = self.key_action(code) {
            action.press();
        }
    }

    pub fn key_released(&self, code: KeyCode) {
        trace!(key = %code, "Key released");
        if let Some(action) = self.key_action(code) {
            action.release();
        }
    }

    /// Consumes a typed-character event; typing never drives actions
    pub fn key_typed(&self, code: KeyCode) {
        trace!(key = %code, "Key typed");
    }

    pub fn mouse_pressed(&self, button: PhysicalButton) {
        if let Some(action) = self.button_action(button) {
            action.press();
        }
    }

    pub fn mouse_released(&self, button: PhysicalButton) {
        if let Some(action) = self.button_action(button) {
            action.release();
        }
    }

    /// Handles cursor motion to `position`, surface-local
    ///
    /// Motion is reported as pulses on the `Move*` codes, with the pixel
    /// distance as the amount. In relative mode the cursor is recentered after
    /// each event, and the motion event caused by recentering is dropped.
    pub fn mouse_moved(&self, position: Point) {
        let mut motion = self.motion.lock();

        if motion.recentering && position == motion.center {
            trace!(x = position.x, y = position.y, "Recenter echo");
            motion.recentering = false;
        } else {
            let dx = position.x.saturating_sub(motion.position.x);
            let dy = position.y.saturating_sub(motion.position.y);
            self.pulse_direction(MouseCode::MoveLeft, MouseCode::MoveRight, dx);
            self.pulse_direction(MouseCode::MoveUp, MouseCode::MoveDown, dy);
        }

        motion.position = position;
        motion.recenter();
    }

    /// Dragging is motion with a button held; buttons are tracked separately
    pub fn mouse_dragged(&self, position: Point) {
        self.mouse_moved(position);
    }

    pub fn mouse_entered(&self, position: Point) {
        self.mouse_moved(position);
    }

    pub fn mouse_exited(&self, position: Point) {
        self.mouse_moved(position);
    }

    /// Handles wheel rotation; negative notches are away from the user
    pub fn mouse_wheel(&self, notches: i32) {
        trace!(notches, "Mouse wheel");
        self.pulse_direction(MouseCode::WheelUp, MouseCode::WheelDown, notches);
    }

    fn key_action(&self, code: KeyCode) -> Option<Arc<GameAction>> {
        self.bindings.read().keys.get(&code).cloned()
    }

    fn mouse_action(&self, code: MouseCode) -> Option<Arc<GameAction>> {
        self.bindings.read().mouse[code].clone()
    }

    fn button_action(&self, button: PhysicalButton) -> Option<Arc<GameAction>> {
        MouseCode::from_button(button).and_then(|code| self.mouse_action(code))
    }

    fn pulse_direction(&self, negative: MouseCode, positive: MouseCode, amount: i32) {
        let code = match amount.cmp(&0) {
            Ordering::Less => negative,
            Ordering::Greater => positive,
            Ordering::Equal => return,
        };
        if let Some(action) = self.mouse_action(code) {
            action.pulse(amount.unsigned_abs());
        }
    }
}

fn is_same(bound: &Arc<GameAction>, action: &GameAction) -> bool {
    std::ptr::eq(Arc::as_ptr(bound), action)
}

impl std::fmt::Debug for InputManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never hold the table lock while taking the motion lock
        let (keys, mouse) = {
            let bindings = self.bindings.read();
            (
                bindings.keys.len(),
                bindings.mouse.values().flatten().count(),
            )
        };
        let (position, relative) = {
            let motion = self.motion.lock();
            (motion.position, motion.cursor.is_some())
        };
        f.debug_struct("InputManager")
            .field("keys", &keys)
            .field("mouse", &mouse)
            .field("position", &position)
            .field("relative", &relative)
            .finish()
    }
}
