use std::panic::{self, AssertUnwindSafe};

use crate::core::actions::render_raster::errors::RenderRasterError;
use crate::core::actions::render_strip::render_strip::render_strip;
use crate::core::data::raster::{Raster, RasterStrip};
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_strip_rows::calculate_strip_rows;

/// Spawns one task per strip on rayon's global pool and waits for the whole
/// scope. Reuses pool threads instead of creating a thread per strip.
pub fn render_raster_rayon(
    raster: &mut Raster,
    viewport: Viewport,
    max_iterations: u32,
    strip_count: u32,
) -> Result<(), RenderRasterError> {
    let row_ranges = calculate_strip_rows(raster.height(), strip_count);
    let strips = raster.split_into_strips(&row_ranges)?;

    run_strips_on_rayon(strips, |strip| render_strip(strip, viewport, max_iterations))
}

/// Runs `work` on every strip as a rayon task. Each task catches its own
/// panic so the remaining strips still complete; the first failed strip in
/// strip order is reported.
pub(crate) fn run_strips_on_rayon<F>(
    strips: Vec<RasterStrip<'_>>,
    work: F,
) -> Result<(), RenderRasterError>
where
    F: Fn(&mut RasterStrip<'_>) + Sync,
{
    let work = &work;
    let mut outcomes: Vec<Result<(), RenderRasterError>> = strips.iter().map(|_| Ok(())).collect();

    rayon::scope(|scope| {
        for (mut strip, outcome) in strips.into_iter().zip(outcomes.iter_mut()) {
            scope.spawn(move |_| {
                let rows = strip.rows();

                *outcome = panic::catch_unwind(AssertUnwindSafe(|| work(&mut strip)))
                    .map_err(|_| RenderRasterError::WorkerPanicked { rows });
            });
        }
    });

    outcomes.into_iter().collect()
}
