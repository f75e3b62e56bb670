//! Demo game application
//!
//! Owns the window and feeds its events to the input layer. Drawing belongs
//! to the screen manager and is not done here.

pub mod controls;
mod runner;

pub use controls::{Controls, format_bindings};
pub use runner::App;
