use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Fully opaque black, the colour of points inside the set.
pub const OPAQUE_BLACK: u32 = 0xFF00_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    InvalidSize { width: u32, height: u32 },
    RowsOutOfBounds { rows: Range<u32>, height: u32 },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "raster size must be positive: {}x{}", width, height)
            }
            Self::RowsOutOfBounds { rows, height } => {
                write!(
                    f,
                    "strip rows {}..{} are not ordered within raster height {}",
                    rows.start, rows.end, height
                )
            }
        }
    }
}

impl Error for RasterError {}

/// Packs 8-bit channels into a `u32` laid out as `R | G<<8 | B<<16 | A<<24`,
/// i.e. RGBA byte order in little-endian memory.
#[inline]
#[must_use]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from(r) | (u32::from(g) << 8) | (u32::from(b) << 16) | (u32::from(a) << 24)
}

/// A fixed-size grid of packed RGBA pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

/// A contiguous run of rows borrowed mutably out of a [`Raster`].
///
/// Strips produced by [`Raster::split_into_strips`] never overlap, so each
/// can be handed to a different worker.
#[derive(Debug)]
pub struct RasterStrip<'a> {
    rows: Range<u32>,
    width: u32,
    raster_height: u32,
    pixels: &'a mut [u32],
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![OPAQUE_BLACK; (width as usize) * (height as usize)],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    /// Borrows the whole raster as a single strip.
    pub fn as_strip(&mut self) -> RasterStrip<'_> {
        RasterStrip {
            rows: 0..self.height,
            width: self.width,
            raster_height: self.height,
            pixels: &mut self.pixels,
        }
    }

    /// Splits the raster into disjoint strips, one per row range.
    ///
    /// The ranges must be ascending, non-overlapping and inside the raster;
    /// gaps between them are allowed and simply left untouched.
    pub fn split_into_strips(
        &mut self,
        row_ranges: &[Range<u32>],
    ) -> Result<Vec<RasterStrip<'_>>, RasterError> {
        let width = self.width;
        let height = self.height;
        let row_len = width as usize;

        let mut strips = Vec::with_capacity(row_ranges.len());
        let mut remaining: &mut [u32] = &mut self.pixels;
        let mut consumed_rows = 0u32;

        for rows in row_ranges {
            if rows.start < consumed_rows || rows.start > rows.end || rows.end > height {
                return Err(RasterError::RowsOutOfBounds {
                    rows: rows.clone(),
                    height,
                });
            }

            let skip = ((rows.start - consumed_rows) as usize) * row_len;
            let take = ((rows.end - rows.start) as usize) * row_len;

            let (_, rest) = std::mem::take(&mut remaining).split_at_mut(skip);
            let (strip_pixels, rest) = rest.split_at_mut(take);
            remaining = rest;
            consumed_rows = rows.end;

            strips.push(RasterStrip {
                rows: rows.clone(),
                width,
                raster_height: height,
                pixels: strip_pixels,
            });
        }

        Ok(strips)
    }
}

impl RasterStrip<'_> {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.rows.clone()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the raster this strip was cut from, needed to map rows
    /// onto the plane.
    #[must_use]
    pub fn raster_height(&self) -> u32 {
        self.raster_height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the strip row by row as `(absolute_row, pixels)`.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [u32])> + '_ {
        let start = self.rows.start;

        self.pixels
            .chunks_exact_mut(self.width as usize)
            .enumerate()
            .map(move |(offset, row)| (start + offset as u32, row))
    }
}
