//! Ports between the render session and its outer adapters.

pub mod audio_output;
pub mod frame_presenter;
