use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::frame_renderer::FrameRenderer;
use crate::core::data::raster::Raster;
use crate::core::data::render_request::RenderRequest;

/// Renders a single frame and hands it to a file presenter.
pub struct RenderOnceController<R: FrameRenderer, P: FilePresenterPort> {
    renderer: R,
    presenter: P,
    raster: Option<Raster>,
}

impl<R: FrameRenderer, P: FilePresenterPort> RenderOnceController<R, P> {
    pub fn new(renderer: R, presenter: P) -> Self {
        Self {
            renderer,
            presenter,
            raster: None,
        }
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<(), RenderError> {
        log::info!(
            "rendering {}x{} (iterations: {}, quality: {}, palette: {}, engine: {})",
            request.width,
            request.height,
            request.iteration_cap,
            request.quality,
            request.palette,
            self.renderer.name()
        );

        let mut raster = Raster::new(request.width, request.height);
        let start = Instant::now();
        self.renderer.render(request, &mut raster)?;

        log::info!("render took {:.2?}", start.elapsed());

        self.raster = Some(raster);

        Ok(())
    }

    #[must_use]
    pub fn raster(&self) -> Option<&Raster> {
        self.raster.as_ref()
    }

    /// Writes the last generated frame. Does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(raster) = &self.raster {
            self.presenter.present(raster, filepath)?;
        }

        Ok(())
    }
}
