use std::thread;

use crate::core::actions::render_raster::errors::RenderRasterError;
use crate::core::actions::render_strip::render_strip::render_strip;
use crate::core::data::raster::{Raster, RasterStrip};
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_strip_rows::calculate_strip_rows;

/// Spawns one scoped thread per strip and joins all of them before
/// returning.
pub fn render_raster_scoped_threads(
    raster: &mut Raster,
    viewport: Viewport,
    max_iterations: u32,
    strip_count: u32,
) -> Result<(), RenderRasterError> {
    let row_ranges = calculate_strip_rows(raster.height(), strip_count);
    let strips = raster.split_into_strips(&row_ranges)?;

    run_strips_on_scoped_threads(strips, |strip| render_strip(strip, viewport, max_iterations))
}

/// Runs `work` on every strip, one thread each. Every worker is joined even
/// if an earlier one panicked; the first panic in strip order is reported.
pub(crate) fn run_strips_on_scoped_threads<F>(
    strips: Vec<RasterStrip<'_>>,
    work: F,
) -> Result<(), RenderRasterError>
where
    F: Fn(&mut RasterStrip<'_>) + Sync,
{
    let work = &work;

    thread::scope(|scope| {
        strips
            .into_iter()
            .map(|mut strip| {
                let rows = strip.rows();
                let handle = scope.spawn(move || work(&mut strip));
                (rows, handle)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|(rows, handle)| {
                handle
                    .join()
                    .map_err(|_| RenderRasterError::WorkerPanicked { rows })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<(), RenderRasterError>>()
    })
}
