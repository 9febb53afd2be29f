use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::{linear, presets, spectrum};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Maps an escape ratio in `[0, 1)` to a colour.
pub type Ramp = fn(f64) -> Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    LinearLight,
    LinearDark,
    Spectrum,
    Warm,
    Cool,
}

impl PaletteKind {
    /// Cycling order, starting from the default.
    pub const ALL: &'static [Self] = &[
        Self::LinearLight,
        Self::LinearDark,
        Self::Spectrum,
        Self::Warm,
        Self::Cool,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LinearLight => "White on black",
            Self::LinearDark => "Reverse",
            Self::Spectrum => "Rainbow",
            Self::Warm => "Fire",
            Self::Cool => "Blue-green",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearLight => "linear-light",
            Self::LinearDark => "linear-dark",
            Self::Spectrum => "spectrum",
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }

    #[must_use]
    pub const fn ramp(self) -> Ramp {
        match self {
            Self::LinearLight => linear::light,
            Self::LinearDark => linear::dark,
            Self::Spectrum => spectrum::spectrum,
            Self::Warm => presets::warm,
            Self::Cool => presets::cool,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePaletteKindError {
    input: String,
}

impl fmt::Display for ParsePaletteKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = PaletteKind::ALL.iter().map(|kind| kind.name()).collect();
        write!(f, "unknown palette '{}', expected one of: {}", self.input, names.join(", "))
    }
}

impl Error for ParsePaletteKindError {}

impl FromStr for PaletteKind {
    type Err = ParsePaletteKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePaletteKindError { input: s.to_string() })
    }
}
