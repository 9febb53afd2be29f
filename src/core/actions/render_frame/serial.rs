use crate::core::actions::render_band::render_band;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::frame_renderer::{FrameRenderer, check_dimensions};
use crate::core::data::band::Band;
use crate::core::data::raster::Raster;
use crate::core::data::render_request::RenderRequest;

/// Renders the whole raster as a single band on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialRenderer;

impl FrameRenderer for SerialRenderer {
    fn render(&self, request: &RenderRequest, raster: &mut Raster) -> Result<(), RenderError> {
        check_dimensions(request, raster)?;

        if request.height == 0 {
            return Ok(());
        }

        for mut view in raster.band_views_mut(&[Band::new(0, request.height)])? {
            render_band(&mut view, request);
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "serial"
    }
}
