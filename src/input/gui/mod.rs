//! GUI input adapter for interactive Mandelbrot exploration.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer rendering.

pub mod errors;
pub mod events;
mod run_gui;

pub use run_gui::{WINDOW_TITLE, run_gui};
