/// A contiguous row range `[start_y, end_y)` of the raster owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Band {
    pub start_y: u32,
    pub end_y: u32,
}

impl Band {
    #[must_use]
    pub const fn new(start_y: u32, end_y: u32) -> Self {
        Self { start_y, end_y }
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.end_y.saturating_sub(self.start_y)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    #[must_use]
    pub fn contains_row(&self, y: u32) -> bool {
        self.start_y <= y && y < self.end_y
    }
}
