use crate::core::actions::render_raster::render_raster::RenderStrategy;
use crate::core::audio::synthesis_params::SynthesisParams;
use std::time::Duration;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// Quiet period after the last view change before the precise pass runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Extent multipliers applied per wheel notch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomFactors {
    pub zoom_in: f64,
    pub zoom_out: f64,
}

impl Default for ZoomFactors {
    fn default() -> Self {
        Self {
            zoom_in: 0.8,
            zoom_out: 1.25,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomFactors {
    #[must_use]
    pub fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in,
            ZoomDirection::Out => self.zoom_out,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub debounce: Duration,
    pub zoom: ZoomFactors,
    pub strategy: RenderStrategy,
    pub synthesis: SynthesisParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            debounce: DEFAULT_DEBOUNCE,
            zoom: ZoomFactors::default(),
            strategy: RenderStrategy::default(),
            synthesis: SynthesisParams::default(),
        }
    }
}
