//! Errors reported by the host windowing seam
//!
//! These never escape [`InputManager`](super::InputManager); they are logged
//! and turned into a fallback to absolute mouse mode.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The host cannot move the system cursor
    #[error("cursor control unavailable: {0}")]
    CursorControlUnavailable(String),

    /// The host rejected a cursor move
    #[error("cursor move rejected: {0}")]
    CursorMoveRejected(String),
}
