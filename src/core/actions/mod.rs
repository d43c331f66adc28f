pub mod render_raster;
pub mod render_strip;
