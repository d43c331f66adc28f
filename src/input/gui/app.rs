//! Window event loop driving a render session.

pub mod gui_app;
pub mod pointer_input;
pub mod ports;
