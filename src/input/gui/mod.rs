//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the status overlay.

mod app;
pub mod commands;
pub mod errors;

pub use app::ports::presenter::GuiPresenterPort;
pub use commands::ports::presenter_factory::GuiPresenterFactoryPort;
pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
