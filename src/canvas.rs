use image::{Rgba, RgbaImage};

use crate::error::{DuotileError, DuotileResult};

/// Background fill selected by the caller for the output tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Background {
    White,
    Black,
    Transparent,
}

impl Background {
    /// Pixel written into every canvas position at build time.
    ///
    /// Transparent keeps white RGB under zero alpha so anything later
    /// flattened against it blends toward white rather than black.
    pub fn fill(self) -> Rgba<u8> {
        match self {
            Background::White => Rgba([255, 255, 255, 255]),
            Background::Black => Rgba([0, 0, 0, 255]),
            Background::Transparent => Rgba([255, 255, 255, 0]),
        }
    }

    pub fn is_opaque(self) -> bool {
        !matches!(self, Background::Transparent)
    }
}

/// The square output buffer being composed. Always stored as RGBA8; opaque
/// backgrounds keep every pixel at alpha 255 for the whole composition.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
    background: Background,
}

impl Canvas {
    /// Create a uniformly filled `size x size` canvas.
    pub fn build(size: u32, background: Background) -> DuotileResult<Self> {
        if size == 0 {
            return Err(DuotileError::validation("canvas size must be > 0"));
        }
        let image = RgbaImage::from_pixel(size, size, background.fill());
        Ok(Self { image, background })
    }

    /// Edge length in pixels (the canvas is always square).
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}
