pub mod complex;
pub mod point;
pub mod raster;
pub mod viewport;
pub mod render_quality;
