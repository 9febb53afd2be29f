use std::time::Duration;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::view_state::ViewState;

#[derive(Debug)]
pub struct FrameData<'a> {
    pub generation: u64,
    pub raster: &'a Raster,
    pub view: ViewState,
    pub render_duration: Duration,
}
