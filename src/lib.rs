//! Sonified Mandelbrot explorer.
//!
//! Renders the set over a navigable viewport with a strip-parallel renderer,
//! refines each view with a debounced precise pass, and turns clicked points
//! into short tones.

pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod presenters;

pub use crate::controllers::interactive::{
    AudioOutputPort, ClickReport, FrameInfo, FramePresenterPort, RenderOutcome, RenderPhase,
    RenderSession, SessionConfig, SessionError, ZoomDirection, ZoomFactors,
};
pub use crate::core::actions::render_raster::render_raster::{RenderStrategy, render_raster};
pub use crate::core::audio::audio_buffer::AudioBuffer;
pub use crate::core::audio::synthesis_params::SynthesisParams;
pub use crate::core::audio::synthesizer::Synthesizer;
pub use crate::core::data::raster::Raster;
pub use crate::core::data::render_quality::RenderQuality;
pub use crate::core::data::viewport::Viewport;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use crate::presenters::audio::rodio_output::RodioAudioOutput;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
