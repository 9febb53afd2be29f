use crate::controllers::interactive::data::input_event::{InputEvent, KeyCode, MouseButton};
use crate::core::fractals::mandelbrot::view_state::{Step, ViewState, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// A change to the view requested by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    AnchoredZoom { x: f64, y: f64, factor: f64 },
    SetIterationCap(Step),
    SetQuality(Step),
    CyclePalette,
    Reset,
}

impl ViewAction {
    #[must_use]
    pub fn apply(self, view: ViewState, width: u32, height: u32) -> ViewState {
        match self {
            Self::AnchoredZoom { x, y, factor } => view.anchored_zoom(x, y, width, height, factor),
            Self::SetIterationCap(step) => view.with_iteration_step(step),
            Self::SetQuality(step) => view.with_quality_step(step),
            Self::CyclePalette => view.with_next_palette(),
            Self::Reset => view.reset(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Apply(ViewAction),
    Quit,
    Ignore,
}

/// Maps an input event to what the session should do about it.
#[must_use]
pub fn interpret(event: InputEvent) -> Command {
    match event {
        InputEvent::Close => Command::Quit,
        InputEvent::MouseClick { button, x, y } => {
            let factor = match button {
                MouseButton::Left => ZOOM_IN_FACTOR,
                MouseButton::Right => ZOOM_OUT_FACTOR,
            };
            Command::Apply(ViewAction::AnchoredZoom { x, y, factor })
        }
        InputEvent::Key { code, shift } => match code {
            KeyCode::Escape => Command::Quit,
            KeyCode::Space => Command::Apply(ViewAction::CyclePalette),
            KeyCode::Digit(0) => Command::Apply(ViewAction::Reset),
            KeyCode::Digit(digit) => match Step::new(digit) {
                Some(step) if shift => Command::Apply(ViewAction::SetQuality(step)),
                Some(step) => Command::Apply(ViewAction::SetIterationCap(step)),
                None => Command::Ignore,
            },
            KeyCode::Other => Command::Ignore,
        },
    }
}
