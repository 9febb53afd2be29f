pub mod partition_bands;
pub mod screen_to_plane;
