pub mod errors;
pub mod render_raster;
pub mod render_raster_rayon;
pub mod render_raster_scoped_threads;
pub mod render_raster_serial;
