use std::num::NonZeroUsize;
use std::thread;

use crate::core::actions::render_band::render_band;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::frame_renderer::{FrameRenderer, check_dimensions};
use crate::core::data::raster::Raster;
use crate::core::data::render_request::RenderRequest;
use crate::core::util::partition_bands::{available_workers, partition_bands};

/// Spawns one scoped thread per band for every render and joins them all
/// before returning.
#[derive(Debug, Clone, Copy)]
pub struct ScopedThreadRenderer {
    workers: NonZeroUsize,
}

impl Default for ScopedThreadRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopedThreadRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_workers(available_workers())
    }

    #[must_use]
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }
}

impl FrameRenderer for ScopedThreadRenderer {
    fn render(&self, request: &RenderRequest, raster: &mut Raster) -> Result<(), RenderError> {
        check_dimensions(request, raster)?;

        let bands = partition_bands(request.height, self.workers);
        log::debug!("rendering {} bands on scoped threads", bands.len());

        let views = raster.band_views_mut(&bands)?;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(views.len());
            let mut failure = None;

            for (band_idx, mut view) in views.into_iter().enumerate() {
                let spawned = thread::Builder::new()
                    .name(format!("band-{band_idx}"))
                    .spawn_scoped(scope, move || render_band(&mut view, request));

                match spawned {
                    Ok(handle) => handles.push((band_idx, handle)),
                    Err(source) => {
                        failure = Some(RenderError::WorkerSpawn {
                            band: band_idx,
                            source,
                        });
                        break;
                    }
                }
            }

            // Join everything that did start, even after a spawn failure
            for (band_idx, handle) in handles {
                if handle.join().is_err() && failure.is_none() {
                    failure = Some(RenderError::WorkerPanicked { band: band_idx });
                }
            }

            failure.map_or(Ok(()), Err)
        })
    }

    fn name(&self) -> &str {
        "scoped-threads"
    }
}
