use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::presenters::pixels::pixel_format::copy_raster_into_rgba;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Shows completed frames in a window through a `pixels` surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    window: &'static Window,
    last_presented_generation: u64,
}

impl InteractiveControllerPresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameData<'_>) {
        copy_raster_into_rgba(frame.raster, self.pixels.frame_mut());
        self.last_presented_generation = frame.generation;
        self.window.request_redraw();
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            window,
            last_presented_generation: 0,
        })
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        log::trace!("drawing frame {}", self.last_presented_generation);
        self.pixels.render()
    }

    /// Maps a physical window position to raster coordinates, or `None`
    /// when it falls outside the frame.
    #[must_use]
    pub fn window_to_raster(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()
            .map(|(px, py)| (px as f64, py as f64))
    }
}
