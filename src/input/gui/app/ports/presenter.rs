use crate::controllers::interactive::ports::frame_presenter::FramePresenterPort;
use egui::Context as EguiContext;

/// A frame presenter that can also draw itself with an egui overlay.
pub trait GuiPresenterPort: FramePresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;

    /// Matches the window surface to a new physical size. The framebuffer
    /// keeps the raster size and is scaled onto the surface.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
