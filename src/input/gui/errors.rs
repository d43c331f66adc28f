use crate::controllers::interactive::errors::SessionError;
use std::error::Error;
use std::fmt;

/// Failures while bringing up or running the explorer window.
#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Audio(rodio::StreamError),
    Session(SessionError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Audio(err) => write!(f, "failed to open audio output: {}", err),
            Self::Session(err) => write!(f, "render session error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Audio(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<rodio::StreamError> for GuiError {
    fn from(err: rodio::StreamError) -> Self {
        Self::Audio(err)
    }
}

impl From<SessionError> for GuiError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}
