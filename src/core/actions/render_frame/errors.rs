use crate::core::data::raster::RasterError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RenderError {
    /// The request does not match the raster it should be written into.
    DimensionMismatch {
        request: (u32, u32),
        raster: (u32, u32),
    },
    /// The operating system refused to start a band worker.
    WorkerSpawn { band: usize, source: io::Error },
    /// A band worker panicked before finishing its rows.
    WorkerPanicked { band: usize },
    /// The worker pool could not be built.
    PoolBuild(rayon::ThreadPoolBuildError),
    Raster(RasterError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { request, raster } => write!(
                f,
                "render request is {}x{} but raster is {}x{}",
                request.0, request.1, raster.0, raster.1
            ),
            Self::WorkerSpawn { band, source } => {
                write!(f, "failed to spawn worker for band {}: {}", band, source)
            }
            Self::WorkerPanicked { band } => write!(f, "worker for band {} panicked", band),
            Self::PoolBuild(err) => write!(f, "failed to build worker pool: {}", err),
            Self::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WorkerSpawn { source, .. } => Some(source),
            Self::PoolBuild(err) => Some(err),
            Self::Raster(err) => Some(err),
            Self::DimensionMismatch { .. } | Self::WorkerPanicked { .. } => None,
        }
    }
}

impl From<RasterError> for RenderError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}
