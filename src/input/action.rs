//! Logical game actions
//!
//! A [`GameAction`] is a named game command ("jump", "move-left") whose state
//! is driven by whatever physical inputs are bound to it and read by game
//! logic on its own cadence.

use std::fmt;

use parking_lot::Mutex;

/// How an action reports its amount while held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behavior {
    /// Reports the amount on every read until released
    #[default]
    Normal,
    /// Reports the amount once per press; further reads return 0 until the
    /// action is released and pressed again
    DetectInitialPressOnly,
}

/// Press state of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Released,
    Pressed,
    /// Initial press was reported; presses are ignored until release
    WaitingForRelease,
}

#[derive(Debug, Default)]
struct ActionInner {
    state: ActionState,
    amount: u32,
}

impl ActionInner {
    fn press(&mut self, amount: u32) {
        if self.state != ActionState::WaitingForRelease {
            self.amount = self.amount.saturating_add(amount);
            self.state = ActionState::Pressed;
        }
    }

    fn release(&mut self) {
        self.state = ActionState::Released;
    }

    fn take_amount(&mut self, behavior: Behavior) -> u32 {
        let amount = self.amount;
        if amount != 0 {
            if self.state == ActionState::Released {
                self.amount = 0;
            } else if behavior == Behavior::DetectInitialPressOnly {
                self.state = ActionState::WaitingForRelease;
                self.amount = 0;
            }
        }
        amount
    }
}

/// A named, thread-safe logical game action
///
/// Input producers call [`press`](Self::press) and [`release`](Self::release);
/// game logic polls [`amount`](Self::amount) or [`is_pressed`](Self::is_pressed).
/// Every operation runs under a lock owned by the action, so the event thread
/// and the game loop may share it through an `Arc`.
pub struct GameAction {
    name: String,
    behavior: Behavior,
    inner: Mutex<ActionInner>,
}

impl GameAction {
    /// Creates an action with [`Behavior::Normal`]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_behavior(name, Behavior::Normal)
    }

    /// Creates an action with the given behavior
    pub fn with_behavior(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            behavior,
            inner: Mutex::new(ActionInner::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Current state, without the read transition performed by [`amount`](Self::amount)
    pub fn state(&self) -> ActionState {
        self.inner.lock().state
    }

    /// Returns the action to the released state with no pending amount
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.state = ActionState::Released;
        inner.amount = 0;
    }

    /// Presses and immediately releases the action with an amount of 1
    pub fn tap(&self) {
        self.pulse(1);
    }

    /// Presses the action with an amount of 1
    pub fn press(&self) {
        self.press_amount(1);
    }

    /// Presses the action, adding `amount` to what is already pending
    ///
    /// Has no effect while the action is waiting for release.
    pub fn press_amount(&self, amount: u32) {
        self.inner.lock().press(amount);
    }

    /// Pulses the action: press with `amount`, then release, as one step
    pub(crate) fn pulse(&self, amount: u32) {
        let mut inner = self.inner.lock();
        inner.press(amount);
        inner.release();
    }

    /// Marks the action as released
    ///
    /// The pending amount is kept until the next read.
    pub fn release(&self) {
        self.inner.lock().release();
    }

    /// Returns true if a read of [`amount`](Self::amount) is non-zero
    ///
    /// This performs the same read transition as `amount`.
    pub fn is_pressed(&self) -> bool {
        self.amount() != 0
    }

    /// Reads the pending amount
    ///
    /// A released action is cleared by the read. A
    /// [`DetectInitialPressOnly`](Behavior::DetectInitialPressOnly) action that
    /// is still held is cleared and ignores presses until it is released.
    pub fn amount(&self) -> u32 {
        self.inner.lock().take_amount(self.behavior)
    }
}

impl fmt::Debug for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("GameAction")
            .field("name", &self.name)
            .field("behavior", &self.behavior)
            .field("state", &inner.state)
            .field("amount", &inner.amount)
            .finish()
    }
}
