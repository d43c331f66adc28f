//! Output adapters: framebuffer presentation and audio playback.

pub mod audio;
pub mod pixels;
