//! Port definitions for the interactive controller.
//!
//! Traits the controller calls out through to reach the display.

pub mod presenter;
