//! Whole-frame rendering engines.
//!
//! Each engine partitions the raster into row bands and fills every band
//! with `render_band`. They differ only in how bands are scheduled.

pub mod engines;
pub mod errors;
pub mod ports;
pub mod rayon_pool;
pub mod scoped_threads;
pub mod serial;
