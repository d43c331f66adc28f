use crate::core::data::raster::RasterStrip;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::colour_for_iterations;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::util::map_value::map_value;

/// Fills every pixel of `strip` with the colour of its escape count.
///
/// Only the strip's own rows are reachable, so any number of strips of the
/// same raster can be rendered concurrently.
pub fn render_strip(strip: &mut RasterStrip<'_>, viewport: Viewport, max_iterations: u32) {
    let width = f64::from(strip.width());
    let height = f64::from(strip.raster_height());

    for (y, row) in strip.rows_mut() {
        let imag = map_value(f64::from(y), 0.0, height, viewport.y_min(), viewport.y_max());

        for (x, pixel) in row.iter_mut().enumerate() {
            let real = map_value(x as f64, 0.0, width, viewport.x_min(), viewport.x_max());
            let iterations = escape_time(real, imag, max_iterations);

            *pixel = colour_for_iterations(iterations, max_iterations);
        }
    }
}
