use crate::core::actions::render_raster::errors::RenderRasterError;
use crate::core::actions::render_raster::render_raster_rayon::render_raster_rayon;
use crate::core::actions::render_raster::render_raster_scoped_threads::render_raster_scoped_threads;
use crate::core::actions::render_raster::render_raster_serial::render_raster_serial;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;

/// How the strips of a render pass are scheduled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// One short-lived OS thread per strip, joined at the end of the pass.
    #[default]
    ScopedThreads,
    /// One task per strip on the shared rayon pool.
    Rayon,
    /// Strips rendered in order on the calling thread.
    Serial,
}

impl RenderStrategy {
    pub const ALL: &'static [RenderStrategy] = &[Self::ScopedThreads, Self::Rayon, Self::Serial];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ScopedThreads => "Scoped threads",
            Self::Rayon => "Rayon",
            Self::Serial => "Serial",
        }
    }
}

/// Renders the whole raster in `strip_count` strips using `strategy`.
/// Returns only after every strip has been written.
pub fn render_raster(
    strategy: RenderStrategy,
    raster: &mut Raster,
    viewport: Viewport,
    max_iterations: u32,
    strip_count: u32,
) -> Result<(), RenderRasterError> {
    match strategy {
        RenderStrategy::ScopedThreads => {
            render_raster_scoped_threads(raster, viewport, max_iterations, strip_count)
        }
        RenderStrategy::Rayon => render_raster_rayon(raster, viewport, max_iterations, strip_count),
        RenderStrategy::Serial => render_raster_serial(raster, viewport, max_iterations, strip_count),
    }
}
