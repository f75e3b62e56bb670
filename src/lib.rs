//! Input Actions
//!
//! The input layer of a small 2D game engine: maps keyboard and mouse input
//! onto logical game actions, with emulated relative mouse motion.

/// Demo application - windowing and the default control scheme
pub mod app;

/// Build-time information (version, target, timestamp)
pub mod build_info;

/// Profile-based configuration
pub mod config;

/// Game actions, bindings and event dispatch
pub mod input;
