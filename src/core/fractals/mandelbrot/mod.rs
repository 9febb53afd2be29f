pub mod escape_time;
pub mod palettes;
pub mod text_render;
pub mod view_state;
