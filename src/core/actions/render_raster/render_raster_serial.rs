use crate::core::actions::render_raster::errors::RenderRasterError;
use crate::core::actions::render_strip::render_strip::render_strip;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_strip_rows::calculate_strip_rows;

/// Renders the strips one after another on the calling thread.
pub fn render_raster_serial(
    raster: &mut Raster,
    viewport: Viewport,
    max_iterations: u32,
    strip_count: u32,
) -> Result<(), RenderRasterError> {
    let row_ranges = calculate_strip_rows(raster.height(), strip_count);

    for mut strip in raster.split_into_strips(&row_ranges)? {
        render_strip(&mut strip, viewport, max_iterations);
    }

    Ok(())
}
