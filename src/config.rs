use crate::core::actions::render_frame::engines::EngineKind;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionConfigError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "raster size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for SessionConfigError {}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    width: u32,
    height: u32,
    engine: EngineKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            engine: EngineKind::default(),
        }
    }
}

impl SessionConfig {
    pub fn new(width: u32, height: u32, engine: EngineKind) -> Result<Self, SessionConfigError> {
        if width == 0 || height == 0 {
            return Err(SessionConfigError::ZeroDimension { width, height });
        }

        Ok(Self { width, height, engine })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn engine(&self) -> EngineKind {
        self.engine
    }
}
