pub mod actions;
pub mod audio;
pub mod data;
pub mod fractals;
pub mod util;
