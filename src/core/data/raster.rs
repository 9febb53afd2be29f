use crate::core::data::band::Band;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn raster_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BandNotContiguous {
        band: Band,
        expected_start_y: u32,
    },
    BandsDoNotCover {
        covered_rows: u32,
        height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { x, y, width, height } => {
                write!(f, "pixel at x:{}, y:{} outside of {}x{} raster", x, y, width, height)
            }
            Self::BandNotContiguous {
                band,
                expected_start_y,
            } => {
                write!(
                    f,
                    "band [{}, {}) does not start at row {}",
                    band.start_y, band.end_y, expected_start_y
                )
            }
            Self::BandsDoNotCover {
                covered_rows,
                height,
            } => {
                write!(f, "bands cover {} rows of a raster {} rows high", covered_rows, height)
            }
        }
    }
}

impl Error for RasterError {}

/// A fixed-size RGB image, three bytes per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Raster {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; raster_buffer_size(width, height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, RasterError> {
        let index = self.index_of(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), RasterError> {
        let index = self.index_of(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Splits the raster into one mutable view per band.
    ///
    /// The bands must be sorted, contiguous and together cover every row, which
    /// is what lets concurrent workers write without any locking.
    pub fn band_views_mut(&mut self, bands: &[Band]) -> Result<Vec<BandView<'_>>, RasterError> {
        let width = self.width;
        let height = self.height;
        let stride = width as usize * BYTES_PER_PIXEL;
        let mut rest: &mut [u8] = &mut self.buffer;
        let mut next_row = 0;
        let mut views = Vec::with_capacity(bands.len());

        for &band in bands {
            if band.start_y != next_row || band.end_y < band.start_y || band.end_y > height {
                return Err(RasterError::BandNotContiguous {
                    band,
                    expected_start_y: next_row,
                });
            }

            let (pixels, tail) = std::mem::take(&mut rest).split_at_mut(band.rows() as usize * stride);
            rest = tail;
            next_row = band.end_y;

            views.push(BandView {
                band,
                width,
                pixels,
            });
        }

        if next_row != height {
            return Err(RasterError::BandsDoNotCover {
                covered_rows: next_row,
                height,
            });
        }

        Ok(views)
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, RasterError> {
        if x >= self.width || y >= self.height {
            return Err(RasterError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Exclusive access to the rows of one band.
#[derive(Debug)]
pub struct BandView<'a> {
    band: Band,
    width: u32,
    pixels: &'a mut [u8],
}

impl BandView<'_> {
    #[must_use]
    pub fn band(&self) -> Band {
        self.band
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Fills the `size x size` block anchored at raster coordinates `(x, y)`,
    /// clipped to the raster width and to the rows of this band.
    pub fn fill_block(&mut self, x: u32, y: u32, size: u32, colour: Colour) {
        if x >= self.width || !self.band.contains_row(y) {
            return;
        }

        let x_end = x.saturating_add(size).min(self.width);
        let y_end = y.saturating_add(size).min(self.band.end_y);
        let stride = self.width as usize * BYTES_PER_PIXEL;

        for row in y..y_end {
            let row_start = (row - self.band.start_y) as usize * stride;
            let from = row_start + x as usize * BYTES_PER_PIXEL;
            let to = row_start + x_end as usize * BYTES_PER_PIXEL;

            for pixel in self.pixels[from..to].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let raster = Raster::new(10, 10);

        assert_eq!(raster.buffer().len(), 300);
        assert!(raster.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_writes_rgb_triplet() {
        let mut raster = Raster::new(3, 3);
        raster.set_pixel(1, 1, RED).unwrap();

        assert_eq!(&raster.buffer()[12..15], &[255, 0, 0]);
        assert_eq!(raster.pixel(1, 1).unwrap(), RED);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut raster = Raster::new(3, 3);

        assert_eq!(
            raster.set_pixel(3, 0, RED),
            Err(RasterError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_band_views_split_rows() {
        let mut raster = Raster::new(4, 5);
        let bands = [Band::new(0, 2), Band::new(2, 5)];
        let views = raster.band_views_mut(&bands).unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].pixels.len(), 2 * 4 * 3);
        assert_eq!(views[1].pixels.len(), 3 * 4 * 3);
    }

    #[test]
    fn test_band_views_reject_gap() {
        let mut raster = Raster::new(4, 5);
        let bands = [Band::new(0, 2), Band::new(3, 5)];

        assert_eq!(
            raster.band_views_mut(&bands).unwrap_err(),
            RasterError::BandNotContiguous {
                band: Band::new(3, 5),
                expected_start_y: 2
            }
        );
    }

    #[test]
    fn test_band_views_reject_partial_cover() {
        let mut raster = Raster::new(4, 5);
        let bands = [Band::new(0, 4)];

        assert_eq!(
            raster.band_views_mut(&bands).unwrap_err(),
            RasterError::BandsDoNotCover {
                covered_rows: 4,
                height: 5
            }
        );
    }

    #[test]
    fn test_fill_block_clips_to_band_and_width() {
        let mut raster = Raster::new(4, 4);
        let bands = [Band::new(0, 2), Band::new(2, 4)];

        {
            let mut views = raster.band_views_mut(&bands).unwrap();
            views[0].fill_block(2, 1, 3, RED);
        }

        for y in 0..4 {
            for x in 0..4 {
                let expected = if y == 1 && x >= 2 { RED } else { Colour::BLACK };
                assert_eq!(raster.pixel(x, y).unwrap(), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_block_ignores_anchor_outside_band() {
        let mut raster = Raster::new(4, 4);
        let bands = [Band::new(0, 2), Band::new(2, 4)];

        {
            let mut views = raster.band_views_mut(&bands).unwrap();
            views[1].fill_block(0, 0, 2, RED);
        }

        assert!(raster.buffer().iter().all(|&b| b == 0));
    }
}
