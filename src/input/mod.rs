//! Input adapters for the Mandelbrot explorer.
//!
//! This module contains adapters that receive input from a window system
//! and translate them into controller input events.

#[cfg(feature = "gui")]
pub mod gui;
