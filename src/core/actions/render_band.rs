use crate::core::data::raster::BandView;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::fractals::mandelbrot::palettes::mapper::PaletteMapper;

/// Renders the rows of one band.
///
/// One point is evaluated for every `quality x quality` block, starting at the
/// first row of the band, and its colour fills the whole block.
pub fn render_band(view: &mut BandView<'_>, request: &RenderRequest) {
    let band = view.band();
    let quality = request.quality.max(1);
    let mapper = PaletteMapper::new(request.palette, request.iteration_cap);

    log::trace!(
        "rendering band [{}, {}) at quality {}",
        band.start_y,
        band.end_y,
        quality
    );

    for y in (band.start_y..band.end_y).step_by(quality as usize) {
        for x in (0..view.width()).step_by(quality as usize) {
            let iterations = escape_time(request.plane_point(x, y), request.iteration_cap);
            view.fill_block(x, y, quality, mapper.map(iterations));
        }
    }
}
