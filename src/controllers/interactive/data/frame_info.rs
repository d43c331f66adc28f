use crate::core::data::render_quality::RenderQuality;
use crate::core::data::viewport::Viewport;
use std::time::Duration;

/// Describes one completed render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInfo {
    pub generation: u64,
    pub quality: RenderQuality,
    pub max_iterations: u32,
    pub viewport: Viewport,
    pub strips: u32,
    pub render_duration: Duration,
}
