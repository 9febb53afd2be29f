use crate::core::data::complex::Complex;

/// Maps screen coordinates to the complex plane.
///
/// The screen centre maps to `offset` and each pixel spans `zoom` plane units.
#[must_use]
pub fn screen_to_plane(x: f64, y: f64, width: u32, height: u32, zoom: f64, offset: Complex) -> Complex {
    Complex {
        real: (x - f64::from(width) / 2.0) * zoom + offset.real,
        imag: (y - f64::from(height) / 2.0) * zoom + offset.imag,
    }
}
