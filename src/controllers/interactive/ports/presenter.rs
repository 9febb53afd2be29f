use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every completed frame, once per successful render.
pub trait InteractiveControllerPresenterPort {
    fn present(&mut self, frame: &FrameData<'_>);
}
