use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::kinds::{PaletteKind, Ramp};

/// Colours escape counts for one render.
///
/// Built once per render so the ramp lookup is not repeated per pixel.
#[derive(Debug, Clone, Copy)]
pub struct PaletteMapper {
    ramp: Ramp,
    iteration_cap: u32,
}

impl PaletteMapper {
    #[must_use]
    pub fn new(kind: PaletteKind, iteration_cap: u32) -> Self {
        assert!(iteration_cap >= 1, "iteration cap must be at least 1");

        Self {
            ramp: kind.ramp(),
            iteration_cap,
        }
    }

    #[must_use]
    pub fn map(&self, iterations: u32) -> Colour {
        debug_assert!(
            iterations <= self.iteration_cap,
            "iterations {} exceed cap {}",
            iterations,
            self.iteration_cap
        );

        if iterations >= self.iteration_cap {
            return Colour::BLACK;
        }

        (self.ramp)(f64::from(iterations) / f64::from(self.iteration_cap))
    }
}
