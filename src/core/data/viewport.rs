use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Smallest extent either axis may be zoomed down to near the origin.
pub const MIN_EXTENT: f64 = 1e-13;
/// Pixel columns an extent at the zoom limit must still resolve into
/// distinct plane coordinates.
pub const RESOLVED_PIXELS: f64 = 4096.0;
/// Largest extent either axis may be zoomed out to.
pub const MAX_EXTENT: f64 = 100.0;

/// Smallest extent allowed around `center`.
///
/// The f64 spacing near a coordinate grows with its magnitude, so the limit
/// is raised far from the origin until [`RESOLVED_PIXELS`] columns still map
/// to distinct values.
#[must_use]
pub fn min_extent_at(center: Complex) -> f64 {
    let magnitude = center.real.abs().max(center.imag.abs());

    MIN_EXTENT.max(magnitude * f64::EPSILON * RESOLVED_PIXELS)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite with min < max: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane mapped onto the raster.
///
/// `x` is the real axis and `y` the imaginary axis. Row 0 of the raster maps
/// to `y_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -2.5,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
        }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.x_min + self.width() / 2.0,
            imag: self.y_min + self.height() / 2.0,
        }
    }

    /// Scales both extents by `factor` and recentres the region on `center`.
    ///
    /// The factor is limited so neither extent leaves
    /// [`min_extent_at`]`(center)..=`[`MAX_EXTENT`]. Fails only when the
    /// clamped region still cannot be represented.
    pub fn zoomed_about(&self, center: Complex, factor: f64) -> Result<Self, ViewportError> {
        let min_scale = min_extent_at(center) / self.width().min(self.height());
        let max_scale = MAX_EXTENT / self.width().max(self.height());
        let scale = factor.max(min_scale).min(max_scale);

        let half_width = self.width() * scale / 2.0;
        let half_height = self.height() * scale / 2.0;

        Self::new(
            center.real - half_width,
            center.real + half_width,
            center.imag - half_height,
            center.imag + half_height,
        )
    }

    /// Shifts the region by a delta in plane units, keeping its extents.
    pub fn panned_by(&self, delta_real: f64, delta_imag: f64) -> Result<Self, ViewportError> {
        Self::new(
            self.x_min + delta_real,
            self.x_max + delta_real,
            self.y_min + delta_imag,
            self.y_max + delta_imag,
        )
    }
}
