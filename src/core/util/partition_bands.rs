use crate::core::data::band::Band;
use std::num::NonZeroUsize;

/// Number of workers to use when the platform cannot tell us.
const FALLBACK_WORKERS: NonZeroUsize = NonZeroUsize::MIN;

#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(FALLBACK_WORKERS)
}

/// Splits rows `[0, height)` into at most `workers` contiguous bands.
///
/// The worker count is clamped to `height` so every band holds at least one
/// row. Each band is `height / workers` rows high and the last band absorbs the
/// remainder.
#[must_use]
pub fn partition_bands(height: u32, workers: NonZeroUsize) -> Vec<Band> {
    if height == 0 {
        return Vec::new();
    }

    let total_bands = u32::try_from(workers.get()).unwrap_or(u32::MAX).min(height);
    let step = height / total_bands;

    (0..total_bands)
        .map(|band_num| {
            let start_y = band_num * step;
            let end_y = if band_num == total_bands - 1 {
                height // Last band takes any remainder rows
            } else {
                (band_num + 1) * step
            };

            Band::new(start_y, end_y)
        })
        .collect()
}
