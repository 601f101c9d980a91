use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelBufferError {
    DegenerateSize { width: u32, height: u32 },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSize { width, height } => {
                write!(
                    f,
                    "pixel buffer dimensions {width}x{height} must both be non-zero"
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Owned framebuffer of `width * height` packed `[B, G, R, pad]` pixels.
///
/// The byte region is zero-initialised on allocation and exclusively owned:
/// the render path writes it, presentation reads it, nothing aliases it.
/// Allocation failure aborts the process via the global allocator; there is
/// no recoverable path without a framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::DegenerateSize { width, height });
        }

        let total_bytes = width as usize * height as usize * BYTES_PER_PIXEL;

        Ok(Self {
            width,
            height,
            data: vec![0; total_bytes],
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
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Writes one packed colour into every pixel slot.
    pub fn fill(&mut self, colour: u32) {
        for pixel in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&colour.to_le_bytes());
        }
    }

    /// Writes one pixel. `col` and `row` must be inside the buffer.
    pub fn put_pixel(&mut self, col: u32, row: u32, colour: u32) {
        debug_assert!(col < self.width && row < self.height);

        let index = (row as usize * self.width as usize + col as usize) * BYTES_PER_PIXEL;
        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_le_bytes());
    }

    /// Reads one pixel back as a packed colour.
    #[must_use]
    pub fn pixel_at(&self, col: u32, row: u32) -> u32 {
        debug_assert!(col < self.width && row < self.height);

        let index = (row as usize * self.width as usize + col as usize) * BYTES_PER_PIXEL;
        let mut bytes = [0; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.data[index..index + BYTES_PER_PIXEL]);
        u32::from_le_bytes(bytes)
    }

    /// Swaps in a freshly allocated buffer for the new dimensions.
    ///
    /// The replacement is fully constructed before the old region is dropped,
    /// so a resize never leaves the render path without a valid buffer. On
    /// error the existing buffer is untouched.
    pub fn replace(&mut self, width: u32, height: u32) -> Result<(), PixelBufferError> {
        let next = Self::new(width, height)?;
        log::debug!(
            "framebuffer resized {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        *self = next;
        Ok(())
    }
}
