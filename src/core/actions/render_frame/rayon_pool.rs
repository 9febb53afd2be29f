use std::num::NonZeroUsize;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::render_band::render_band;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::frame_renderer::{FrameRenderer, check_dimensions};
use crate::core::data::raster::Raster;
use crate::core::data::render_request::RenderRequest;
use crate::core::util::partition_bands::{available_workers, partition_bands};

/// Renders bands on a rayon pool that lives as long as the renderer.
///
/// Threads are created once instead of per render. The rayon scope is the join
/// barrier, so the raster is complete when [`FrameRenderer::render`] returns.
#[derive(Debug)]
pub struct RayonPoolRenderer {
    pool: ThreadPool,
}

impl RayonPoolRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_workers(available_workers())
    }

    pub fn with_workers(workers: NonZeroUsize) -> Result<Self, RenderError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|idx| format!("band-pool-{idx}"))
            .build()
            .map_err(RenderError::PoolBuild)?;

        log::debug!("built render pool with {} threads", pool.current_num_threads());

        Ok(Self { pool })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl FrameRenderer for RayonPoolRenderer {
    fn render(&self, request: &RenderRequest, raster: &mut Raster) -> Result<(), RenderError> {
        check_dimensions(request, raster)?;

        let workers = NonZeroUsize::new(self.workers()).unwrap_or(NonZeroUsize::MIN);
        let bands = partition_bands(request.height, workers);
        log::debug!("rendering {} bands on the rayon pool", bands.len());

        let views = raster.band_views_mut(&bands)?;

        self.pool.scope(|scope| {
            for mut view in views {
                scope.spawn(move |_| render_band(&mut view, request));
            }
        });

        Ok(())
    }

    fn name(&self) -> &str {
        "rayon-pool"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::scoped_threads::ScopedThreadRenderer;
    use crate::core::actions::render_frame::serial::SerialRenderer;
    use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
    use crate::core::fractals::mandelbrot::view_state::ViewState;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn request(width: u32, height: u32, quality: u32) -> RenderRequest {
        let mut request = ViewState::default().render_request(width, height);
        request.zoom = 3.0 / f64::from(width);
        request.quality = quality;
        request.palette = PaletteKind::Warm;
        request
    }

    fn render_serial(request: &RenderRequest) -> Raster {
        let mut raster = Raster::new(request.width, request.height);
        SerialRenderer.render(request, &mut raster).unwrap();
        raster
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let renderer = RayonPoolRenderer::with_workers(workers(4)).unwrap();
        let request = request(64, 48, 1);
        let mut raster = Raster::new(64, 48);

        renderer.render(&request, &mut raster).unwrap();

        assert_eq!(raster, render_serial(&request));
    }

    #[test]
    fn test_rayon_with_quality_blocks() {
        let renderer = RayonPoolRenderer::with_workers(workers(3)).unwrap();
        let request = request(50, 37, 4);
        let mut raster = Raster::new(50, 37);

        renderer.render(&request, &mut raster).unwrap();

        // block grids restart at each band, so compare against the same partition
        let mut expected = Raster::new(50, 37);
        ScopedThreadRenderer::with_workers(workers(3))
            .render(&request, &mut expected)
            .unwrap();
        assert_eq!(raster, expected);
    }

    #[test]
    fn test_pool_is_reused_across_renders() {
        let renderer = RayonPoolRenderer::with_workers(workers(2)).unwrap();
        let first = request(30, 20, 1);
        let mut second = first;
        second.palette = PaletteKind::Cool;
        let mut raster = Raster::new(30, 20);

        renderer.render(&first, &mut raster).unwrap();
        renderer.render(&second, &mut raster).unwrap();

        assert_eq!(renderer.workers(), 2);
        assert_eq!(raster, render_serial(&second));
    }

    #[test]
    fn test_rejects_mismatched_raster() {
        let renderer = RayonPoolRenderer::with_workers(workers(2)).unwrap();
        let request = request(10, 10, 1);
        let mut raster = Raster::new(11, 10);

        assert!(matches!(
            renderer.render(&request, &mut raster),
            Err(RenderError::DimensionMismatch { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "iteration cap must be at least 1")]
    fn test_worker_panic_resumes_on_caller() {
        let mut request = request(16, 8, 1);
        request.iteration_cap = 0;
        let mut raster = Raster::new(16, 8);
        let renderer = RayonPoolRenderer::with_workers(workers(2)).unwrap();

        let _ = renderer.render(&request, &mut raster);
    }
}
