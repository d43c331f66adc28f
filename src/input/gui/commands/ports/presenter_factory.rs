use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    /// Builds a presenter drawing a `width`x`height` raster into `window`.
    fn build(&self, window: &'static Window, width: u32, height: u32) -> Result<T, GuiError>;
}
