//! Format adapters shared by presenters.

pub mod pixel_format;
