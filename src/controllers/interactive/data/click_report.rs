use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// What a click evaluated and sonified.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickReport {
    pub pixel: Point,
    pub point: Complex,
    pub iterations: u32,
    pub max_iterations: u32,
    pub frequency: f64,
}

impl ClickReport {
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.iterations >= self.max_iterations
    }
}
