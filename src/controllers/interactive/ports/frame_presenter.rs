use crate::controllers::interactive::data::frame_info::FrameInfo;
use crate::core::data::raster::Raster;

pub trait FramePresenterPort {
    /// Receives every completed render pass. The raster is only borrowed for
    /// the call; implementations copy out whatever they need to keep.
    fn present(&mut self, raster: &Raster, frame: &FrameInfo);
}
