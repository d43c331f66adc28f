use crate::input::gui::{GuiError, GuiPresenterFactoryPort};
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::window::Window;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, width: u32, height: u32) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, width, height)
    }
}
