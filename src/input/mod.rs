//! Input action system
//!
//! Decouples physical input from what the game does with it:
//! - [`GameAction`]s are named commands with their own press state
//! - [`InputManager`] binds keys and mouse codes to actions and dispatches raw
//!   events to them
//! - Relative mouse mode keeps the cursor centered so motion is reported as
//!   unbounded deltas
//!
//! # Architecture
//!
//! ```text
//! WindowEvent (winit) → WinitInput → InputManager → GameAction
//!                                        ↑               ↓
//!                            InputSurface (cursor)   game loop polls amount()
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let jump = Arc::new(GameAction::with_behavior("jump", Behavior::DetectInitialPressOnly));
//! input.map_to_key(&jump, KeyCode::SPACE);
//!
//! // In window_event()
//! winit_input.handle_window_event(&input, &event);
//!
//! // Each tick
//! if jump.is_pressed() {
//!     player.jump();
//! }
//! ```

mod action;
mod codes;
mod error;
mod host;
mod manager;
mod winit_host;

// Re-export public API
pub use action::{ActionState, Behavior, GameAction};
pub use codes::{KeyCode, MouseCode, PhysicalButton};
pub use error::InputError;
pub use host::{CursorControl, CursorStyle, HeadlessSurface, InputSurface, Point, Size};
pub use manager::InputManager;
pub use winit_host::{WinitInput, WinitSurface, to_point};
