use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

fn resolution_to_row_size(resolution: Resolution) -> usize {
    resolution.width() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        resolution: Resolution,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    RowCountMismatch {
        expected_rows: usize,
        rows: usize,
    },
    RowLengthMismatch {
        row: usize,
        expected_size: usize,
        row_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { x, y, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of frame {}x{}",
                    x,
                    y,
                    resolution.width(),
                    resolution.height()
                )
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
            Self::RowCountMismatch {
                expected_rows,
                rows,
            } => {
                write!(f, "expected {} rows, got {}", expected_rows, rows)
            }
            Self::RowLengthMismatch {
                row,
                expected_size,
                row_size,
            } => {
                write!(
                    f,
                    "row {} has {} bytes, expected {}",
                    row, row_size, expected_size
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

pub type FrameBufferData = Vec<u8>;

/// Bytes produced by a single row task, `width * 3` long.
pub type RowResult = Vec<u8>;

/// Row-major RGB frame, three bytes per pixel in R, G, B order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    resolution: Resolution,
    buffer: FrameBufferData,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: FrameBufferData,
    ) -> Result<Self, FrameBufferError> {
        let expected_size = resolution_to_buffer_size(resolution);

        if expected_size != buffer.len() {
            return Err(FrameBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    /// Copies finished rows into a fresh frame, row `i` landing at offset `i * width * 3`.
    pub fn from_rows(
        resolution: Resolution,
        rows: Vec<RowResult>,
    ) -> Result<Self, FrameBufferError> {
        let expected_rows = resolution.height() as usize;
        if rows.len() != expected_rows {
            return Err(FrameBufferError::RowCountMismatch {
                expected_rows,
                rows: rows.len(),
            });
        }

        let row_size = resolution_to_row_size(resolution);
        let mut buffer = Vec::with_capacity(resolution_to_buffer_size(resolution));

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != row_size {
                return Err(FrameBufferError::RowLengthMismatch {
                    row: index,
                    expected_size: row_size,
                    row_size: row.len(),
                });
            }
            buffer.extend_from_slice(&row);
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &FrameBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> FrameBufferData {
        self.buffer
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, FrameBufferError> {
        if !self.resolution.contains(x as i64, y as i64) {
            return Err(FrameBufferError::PixelOutsideBounds {
                x,
                y,
                resolution: self.resolution,
            });
        }

        Ok((y as usize * self.resolution.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, FrameBufferError> {
        let index = self.offset(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), FrameBufferError> {
        let index = self.offset(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
