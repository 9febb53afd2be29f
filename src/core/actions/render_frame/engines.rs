use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::frame_renderer::FrameRenderer;
use crate::core::actions::render_frame::rayon_pool::RayonPoolRenderer;
use crate::core::actions::render_frame::scoped_threads::ScopedThreadRenderer;
use crate::core::actions::render_frame::serial::SerialRenderer;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineKind {
    #[default]
    ScopedThreads,
    RayonPool,
    Serial,
}

impl EngineKind {
    pub const ALL: &'static [Self] = &[Self::ScopedThreads, Self::RayonPool, Self::Serial];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScopedThreads => "scoped-threads",
            Self::RayonPool => "rayon-pool",
            Self::Serial => "serial",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEngineKindError {
    input: String,
}

impl fmt::Display for ParseEngineKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = EngineKind::ALL.iter().map(|kind| kind.name()).collect();
        write!(f, "unknown engine '{}', expected one of: {}", self.input, names.join(", "))
    }
}

impl Error for ParseEngineKindError {}

impl FromStr for EngineKind {
    type Err = ParseEngineKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEngineKindError { input: s.to_string() })
    }
}

pub fn build_renderer(kind: EngineKind) -> Result<Box<dyn FrameRenderer>, RenderError> {
    let renderer: Box<dyn FrameRenderer> = match kind {
        EngineKind::ScopedThreads => Box::new(ScopedThreadRenderer::new()),
        EngineKind::RayonPool => Box::new(RayonPoolRenderer::new()?),
        EngineKind::Serial => Box::new(SerialRenderer),
    };

    log::debug!("using {} renderer", renderer.name());

    Ok(renderer)
}
