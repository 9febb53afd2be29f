use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use std::io::{self, Write};

const GLYPHS: &[u8] = b".,-~:;=!*#$@";
const INTERIOR_GLYPH: char = ' ';

const REAL_RANGE: (f64, f64) = (-2.0, 1.0);
const IMAG_RANGE: (f64, f64) = (-1.0, 1.0);

/// Character-cell rendering of the whole set on a single thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRender {
    pub columns: u32,
    pub rows: u32,
    pub iteration_cap: u32,
}

impl Default for TextRender {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 20,
            iteration_cap: 1000,
        }
    }
}

impl TextRender {
    #[must_use]
    pub fn cell_point(&self, column: u32, row: u32) -> Complex {
        Complex {
            real: REAL_RANGE.0 + (f64::from(column) / f64::from(self.columns)) * (REAL_RANGE.1 - REAL_RANGE.0),
            imag: IMAG_RANGE.0 + (f64::from(row) / f64::from(self.rows)) * (IMAG_RANGE.1 - IMAG_RANGE.0),
        }
    }

    #[must_use]
    pub fn glyph(&self, iterations: u32) -> char {
        if iterations >= self.iteration_cap {
            INTERIOR_GLYPH
        } else {
            char::from(GLYPHS[iterations as usize % GLYPHS.len()])
        }
    }

    /// Renders every row, each terminated by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(((self.columns + 1) * self.rows) as usize);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let iterations = escape_time(self.cell_point(column, row), self.iteration_cap);
                text.push(self.glyph(iterations));
            }
            text.push('\n');
        }

        text
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }
}
