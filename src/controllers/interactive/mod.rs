//! Interactive session for exploring the set and listening to it.
//!
//! # Architecture
//!
//! The session follows the ports & adapters pattern:
//! - **Input**: zoom, pan, click and tick calls from an event loop
//! - **Output**: [`FramePresenterPort`] for rendered frames and
//!   [`AudioOutputPort`] for click tones
//! - **Core**: render and synthesis actions from `core/`

pub mod data;
pub mod errors;
pub mod ports;
pub mod render_phase;
pub mod session;
pub mod session_config;

pub use data::click_report::ClickReport;
pub use data::frame_info::FrameInfo;
pub use errors::SessionError;
pub use ports::audio_output::AudioOutputPort;
pub use ports::frame_presenter::FramePresenterPort;
pub use render_phase::RenderPhase;
pub use session::{RenderOutcome, RenderSession};
pub use session_config::{SessionConfig, ZoomDirection, ZoomFactors};
