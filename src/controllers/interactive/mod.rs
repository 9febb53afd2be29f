//! Interactive controller for exploring the Mandelbrot set.
//!
//! Turns discrete user input into view transitions and re-renders the whole
//! frame after each one.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values translated by the windowing layer
//! - **Output**: `InteractiveControllerPresenterPort` for receiving completed frames
//! - **Core**: Uses `FrameRenderer` engines from `core/` for the actual computation

pub mod commands;
mod controller;
pub mod data;
pub mod ports;

pub use controller::{InteractiveController, SessionStatus};
