/// A pixel position on the raster. Signed so cursor positions reported
/// outside the window can be represented before they are rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
