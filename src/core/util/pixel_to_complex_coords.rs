use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::map_value::map_value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRaster { point: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRaster {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} raster",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a raster pixel to its coordinate in `viewport`.
///
/// Column `0` maps to `x_min` and column `width` (one past the last pixel)
/// would map to `x_max`; rows map onto `y_min..y_max` the same way.
pub fn pixel_to_complex_coords(
    pixel: Point,
    width: u32,
    height: u32,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let inside = pixel.x >= 0 && pixel.y >= 0 && (pixel.x as u32) < width && (pixel.y as u32) < height;

    if !inside {
        return Err(PixelToComplexCoordsError::PointOutsideRaster {
            point: pixel,
            width,
            height,
        });
    }

    Ok(Complex {
        real: map_value(
            f64::from(pixel.x),
            0.0,
            f64::from(width),
            viewport.x_min(),
            viewport.x_max(),
        ),
        imag: map_value(
            f64::from(pixel.y),
            0.0,
            f64::from(height),
            viewport.y_min(),
            viewport.y_max(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_maps_to_minimum_bounds() {
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, 800, 600, Viewport::default());

        assert_eq!(
            result,
            Ok(Complex {
                real: -2.5,
                imag: -1.5
            })
        );
    }

    #[test]
    fn test_center_pixel_maps_to_plane_center() {
        let result =
            pixel_to_complex_coords(Point { x: 400, y: 300 }, 800, 600, Viewport::default());

        assert_eq!(
            result,
            Ok(Complex {
                real: -0.75,
                imag: 0.0
            })
        );
    }

    #[test]
    fn test_points_outside_raster_fail() {
        let outside = [
            Point { x: -1, y: 0 },
            Point { x: 0, y: -1 },
            Point { x: 800, y: 0 },
            Point { x: 0, y: 600 },
        ];

        for point in outside {
            assert_eq!(
                pixel_to_complex_coords(point, 800, 600, Viewport::default()),
                Err(PixelToComplexCoordsError::PointOutsideRaster {
                    point,
                    width: 800,
                    height: 600
                })
            );
        }
    }
}
