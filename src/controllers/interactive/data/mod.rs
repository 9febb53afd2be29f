pub mod frame_data;
pub mod input_event;
