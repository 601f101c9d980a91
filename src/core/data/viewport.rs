use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    DegenerateExtent { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateExtent { width, height } => {
                write!(
                    f,
                    "viewport extent {width}x{height} must be non-zero in both axes"
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangular window into the complex plane.
///
/// `(x0, y0)` is the plane point under the top-left pixel and `(x1, y1)` the
/// one just past the bottom-right. Screen rows descend the imaginary axis,
/// so `y0 > y1` for an upright view. Derived fresh from the navigation state
/// each frame, never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Viewport {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, ViewportError> {
        let width = x1 - x0;
        let height = y1 - y0;

        if width == 0.0 || height == 0.0 {
            return Err(ViewportError::DegenerateExtent { width, height });
        }

        Ok(Self { x0, y0, x1, y1 })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Maps a pixel coordinate to its complex-plane point.
    ///
    /// `c = x0 + col/buf_width * (x1 - x0), y0 + row/buf_height * (y1 - y0)`.
    /// Both kernel paths call this with identical arguments so their per-pixel
    /// inputs are bit-identical.
    #[must_use]
    pub fn point_at(&self, col: u32, row: u32, buf_width: u32, buf_height: u32) -> (f64, f64) {
        let x = self.x0 + col as f64 / buf_width as f64 * self.width();
        let y = self.y0 + row as f64 / buf_height as f64 * self.height();
        (x, y)
    }
}
