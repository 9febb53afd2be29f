pub mod band;
pub mod colour;
pub mod complex;
pub mod raster;
pub mod render_request;
