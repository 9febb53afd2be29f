use crate::core::actions::render_frame::errors::RenderError;
use crate::core::data::raster::Raster;
use crate::core::data::render_request::RenderRequest;

/// Turns a render request into a finished raster.
///
/// Implementations must either write every pixel of `raster` or return an
/// error; a partially written raster is never reported as a success.
pub trait FrameRenderer: Send + Sync {
    fn render(&self, request: &RenderRequest, raster: &mut Raster) -> Result<(), RenderError>;

    fn name(&self) -> &str;
}

impl FrameRenderer for Box<dyn FrameRenderer> {
    fn render(&self, request: &RenderRequest, raster: &mut Raster) -> Result<(), RenderError> {
        (**self).render(request, raster)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub(crate) fn check_dimensions(request: &RenderRequest, raster: &Raster) -> Result<(), RenderError> {
    if request.width != raster.width() || request.height != raster.height() {
        return Err(RenderError::DimensionMismatch {
            request: (request.width, request.height),
            raster: (raster.width(), raster.height()),
        });
    }

    Ok(())
}
