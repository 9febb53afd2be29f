use crate::controllers::interactive::data::input_event::{InputEvent, KeyCode, MouseButton};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Folds winit window events into the controller's discrete input events.
///
/// Tracks the cursor and shift state between events, since winit reports
/// them separately from the presses they qualify.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Option<(f64, f64)>,
    shift: bool,
}

impl InputTranslator {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Close),
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x, position.y);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(self.key(code)),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.press(*button),
            _ => None,
        }
    }

    fn key(&self, code: WinitKeyCode) -> InputEvent {
        InputEvent::Key {
            code: key_code(code),
            shift: self.shift,
        }
    }

    fn move_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    fn press(&self, button: winit::event::MouseButton) -> Option<InputEvent> {
        let button = match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            _ => return None,
        };
        let (x, y) = self.cursor?;

        Some(InputEvent::MouseClick { button, x, y })
    }
}

pub fn key_code(code: WinitKeyCode) -> KeyCode {
    match code {
        WinitKeyCode::Digit0 | WinitKeyCode::Numpad0 => KeyCode::Digit(0),
        WinitKeyCode::Digit1 | WinitKeyCode::Numpad1 => KeyCode::Digit(1),
        WinitKeyCode::Digit2 | WinitKeyCode::Numpad2 => KeyCode::Digit(2),
        WinitKeyCode::Digit3 | WinitKeyCode::Numpad3 => KeyCode::Digit(3),
        WinitKeyCode::Digit4 | WinitKeyCode::Numpad4 => KeyCode::Digit(4),
        WinitKeyCode::Digit5 | WinitKeyCode::Numpad5 => KeyCode::Digit(5),
        WinitKeyCode::Digit6 | WinitKeyCode::Numpad6 => KeyCode::Digit(6),
        WinitKeyCode::Digit7 | WinitKeyCode::Numpad7 => KeyCode::Digit(7),
        WinitKeyCode::Digit8 | WinitKeyCode::Numpad8 => KeyCode::Digit(8),
        WinitKeyCode::Digit9 | WinitKeyCode::Numpad9 => KeyCode::Digit(9),
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Other,
    }
}
