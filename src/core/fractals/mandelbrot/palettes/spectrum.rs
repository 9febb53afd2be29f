use crate::core::data::colour::Colour;

const SEGMENT: f64 = 0.2;

/// Red, orange, yellow, green, blue, then dark blue as the ratio grows.
#[must_use]
pub fn spectrum(ratio: f64) -> Colour {
    let local = |start: f64| (ratio - start) / SEGMENT;

    if ratio < 0.2 {
        Colour::from_channels(255.0, 165.0 * (ratio / SEGMENT), 0.0)
    } else if ratio < 0.4 {
        Colour::from_channels(255.0, 165.0 + 90.0 * local(0.2), 0.0)
    } else if ratio < 0.6 {
        Colour::from_channels(255.0 - 255.0 * local(0.4), 255.0, 0.0)
    } else if ratio < 0.8 {
        let t = local(0.6);
        Colour::from_channels(0.0, 255.0 - 205.0 * t, 255.0 * t)
    } else if ratio < 1.0 {
        Colour::from_channels(0.0, 50.0, 255.0 - 127.0 * local(0.8))
    } else {
        Colour::BLACK
    }
}
