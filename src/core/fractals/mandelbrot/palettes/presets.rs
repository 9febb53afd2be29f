//! Warm and cool presets.
//!
//! The saturated channel in the last two segments is a product of breakpoint
//! constants rather than the running ratio. That is what gives the presets
//! their look, so the numbers are kept exactly as they are.

use crate::core::data::colour::Colour;

const FIRST_BREAK: f64 = 0.1;
const SECOND_BREAK: f64 = 0.15;
const THIRD_BREAK: f64 = 0.3;

/// Dark red through red into orange.
#[must_use]
pub fn warm(ratio: f64) -> Colour {
    if ratio < FIRST_BREAK {
        Colour::from_channels(255.0 * (ratio * 2.0), 0.0, 0.0)
    } else if ratio < SECOND_BREAK {
        Colour::from_channels(255.0 * (ratio * 3.0), 0.0, 0.0)
    } else if ratio < THIRD_BREAK {
        Colour::from_channels(255.0 * (0.15 * 3.0), 165.0 * ratio, 0.0)
    } else {
        Colour::from_channels(255.0 * (0.2 * 4.0), 255.0 * ratio, 0.0)
    }
}

/// Dark blue through blue into cyan.
#[must_use]
pub fn cool(ratio: f64) -> Colour {
    if ratio < FIRST_BREAK {
        Colour::from_channels(0.0, 0.0, 255.0 * (ratio * 2.0))
    } else if ratio < SECOND_BREAK {
        Colour::from_channels(0.0, 0.0, 255.0 * (ratio * 3.0))
    } else if ratio < THIRD_BREAK {
        Colour::from_channels(0.0, 140.0 * ratio, 255.0 * (0.15 * 3.0))
    } else {
        Colour::from_channels(0.0, 220.0 * ratio, 255.0 * (0.2 * 4.0))
    }
}
