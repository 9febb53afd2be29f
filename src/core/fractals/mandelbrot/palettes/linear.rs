use crate::core::data::colour::Colour;

/// Grey level rising with the escape ratio.
#[must_use]
pub fn light(ratio: f64) -> Colour {
    let level = 255.0 * ratio;
    Colour::from_channels(level, level, level)
}

/// Inverted grey, bright for points that escape quickly.
#[must_use]
pub fn dark(ratio: f64) -> Colour {
    let level = 255.0 - (255.0 * ratio).trunc();
    Colour::from_channels(level, level, level)
}
