//! Grayscale rendering.
//!
//! Symbol `0` is white and symbol `k - 1` is black, with any symbols in
//! between evenly spaced on the ramp. Each cell becomes a `scale` x `scale`
//! block of pixels.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageError, Luma};
use strata_core::{Alphabet, Field, FieldSink, SinkError, Symbol};

/// Default upper bound on rendered pixels (256 Mpx).
pub const DEFAULT_MAX_PIXELS: u64 = 1 << 28;

/// Gray level of `symbol`: 255 for 0, 0 for the alphabet's top symbol.
///
/// ```
/// use strata_core::Alphabet;
/// use strata_render::shade;
///
/// assert_eq!(shade(0, Alphabet::Ternary), 255);
/// assert_eq!(shade(1, Alphabet::Ternary), 128);
/// assert_eq!(shade(2, Alphabet::Ternary), 0);
/// ```
pub fn shade(symbol: Symbol, alphabet: Alphabet) -> u8 {
    let top = u16::from(alphabet.max_symbol());
    let s = u16::from(symbol).min(top);
    (255 - s * 255 / top) as u8
}

/// Draws a field as a grayscale image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrayscaleRenderer {
    scale: u32,
    max_pixels: u64,
}

impl Default for GrayscaleRenderer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GrayscaleRenderer {
    /// Renderer drawing each cell as a `scale` x `scale` block.
    /// A scale of 0 is treated as 1.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }

    /// Replace the pixel budget.
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    /// Pixels per cell edge.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Output dimensions for `field`, or [`SinkError::TooLarge`] if they
    /// overflow `u32` or exceed the pixel budget.
    pub fn dimensions(&self, field: &Field) -> Result<(u32, u32), SinkError> {
        self.check_size(field.width(), field.height())
    }

    /// Output dimensions for a field of `cells` columns and `rows` rows.
    ///
    /// Lets callers reject an oversize image before running the simulation.
    pub fn check_size(&self, cells: usize, rows: usize) -> Result<(u32, u32), SinkError> {
        let scale = u64::from(self.scale);
        let width = (cells as u64).saturating_mul(scale);
        let height = (rows as u64).saturating_mul(scale);
        let too_large = SinkError::TooLarge { width, height };
        let w = u32::try_from(width).map_err(|_| too_large.clone())?;
        let h = u32::try_from(height).map_err(|_| too_large.clone())?;
        if width.saturating_mul(height) > self.max_pixels {
            return Err(too_large);
        }
        Ok((w, h))
    }

    /// Draw `field`. Row `t` of cells occupies pixel rows
    /// `t * scale .. (t + 1) * scale`.
    pub fn render(&self, field: &Field) -> Result<GrayImage, SinkError> {
        let (w, h) = self.dimensions(field)?;
        log::debug!(
            "rendering {}x{} field at scale {} to {w}x{h}",
            field.width(),
            field.height(),
            self.scale
        );
        let alphabet = field.alphabet();
        let scale = self.scale as usize;
        let mut img = GrayImage::new(w, h);
        for (t, row) in field.rows().iter().enumerate() {
            for (i, &symbol) in row.iter().enumerate() {
                let px = Luma([shade(symbol, alphabet)]);
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel((i * scale + dx) as u32, (t * scale + dy) as u32, px);
                    }
                }
            }
        }
        Ok(img)
    }
}

fn sink_error(e: ImageError) -> SinkError {
    match e {
        ImageError::IoError(e) => SinkError::Io {
            reason: e.to_string(),
        },
        other => SinkError::Encode {
            reason: other.to_string(),
        },
    }
}

/// A [`FieldSink`] that renders to a PNG file.
///
/// Each field received overwrites the file.
#[derive(Clone, Debug)]
pub struct PngSink {
    path: PathBuf,
    renderer: GrayscaleRenderer,
}

impl PngSink {
    /// Sink writing to `path` with `renderer`.
    pub fn new(path: impl Into<PathBuf>, renderer: GrayscaleRenderer) -> Self {
        Self {
            path: path.into(),
            renderer,
        }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FieldSink for PngSink {
    fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
        let img = self.renderer.render(field)?;
        img.save_with_format(&self.path, image::ImageFormat::Png)
            .map_err(sink_error)?;
        log::info!(
            "wrote {}x{} image to {}",
            img.width(),
            img.height(),
            self.path.display()
        );
        Ok(())
    }
}
