use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::util::screen_to_plane::screen_to_plane;

/// Immutable snapshot of the view handed to a renderer.
///
/// Renderers only ever see a copy, so a render never observes a view that is
/// halfway through an update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub offset: Complex,
    pub iteration_cap: u32,
    pub quality: u32,
    pub palette: PaletteKind,
}

impl RenderRequest {
    #[must_use]
    pub fn plane_point(&self, x: u32, y: u32) -> Complex {
        screen_to_plane(
            f64::from(x),
            f64::from(y),
            self.width,
            self.height,
            self.zoom,
            self.offset,
        )
    }
}
