use std::fmt;

use crate::paint::Color;

use super::common::to_skia_color;

/// Error raised when a render target cannot be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Width or height is zero (or too large for the rasterizer).
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSize { width, height } => {
                write!(f, "invalid render target size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// CPU pixel buffer the [`Renderer`](super::Renderer) draws into.
///
/// Pixels are stored premultiplied; readers get straight-alpha bytes.
pub struct RenderTarget {
    pub(crate) pixmap: tiny_skia::Pixmap,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the target.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel checks only the flat index, so a column past the
        // right edge would wrap into the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Copies the target out as tightly packed straight-alpha RGBA rows.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}
