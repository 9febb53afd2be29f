pub mod render_band;
pub mod render_frame;
