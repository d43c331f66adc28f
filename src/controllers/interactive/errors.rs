use crate::core::actions::render_raster::errors::RenderRasterError;
use crate::core::data::raster::RasterError;
use crate::core::data::viewport::ViewportError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Raster(RasterError),
    Render(RenderRasterError),
    Viewport(ViewportError),
    Pixel(PixelToComplexCoordsError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster(err) => write!(f, "raster error: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Pixel(err) => write!(f, "pixel lookup failed: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Pixel(err) => Some(err),
        }
    }
}

impl From<RasterError> for SessionError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

impl From<RenderRasterError> for SessionError {
    fn from(err: RenderRasterError) -> Self {
        Self::Render(err)
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<PixelToComplexCoordsError> for SessionError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Pixel(err)
    }
}
