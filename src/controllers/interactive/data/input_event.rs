/// Keys the controller understands. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Digit(u8),
    Space,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// Discrete input delivered by the windowing layer, in raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Close,
    Key { code: KeyCode, shift: bool },
    MouseClick { button: MouseButton, x: f64, y: f64 },
}
