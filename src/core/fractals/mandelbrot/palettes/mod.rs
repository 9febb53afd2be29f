pub mod kinds;
pub mod linear;
pub mod mapper;
pub mod presets;
pub mod spectrum;
