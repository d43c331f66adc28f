use crate::core::data::raster::RasterError;
use std::error::Error;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRasterError {
    Raster(RasterError),
    WorkerPanicked { rows: Range<u32> },
}

impl fmt::Display for RenderRasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster(err) => write!(f, "raster error: {}", err),
            Self::WorkerPanicked { rows } => {
                write!(f, "render worker for rows {}..{} panicked", rows.start, rows.end)
            }
        }
    }
}

impl Error for RenderRasterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(err) => Some(err),
            Self::WorkerPanicked { .. } => None,
        }
    }
}

impl From<RasterError> for RenderRasterError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}
