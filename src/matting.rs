use image::RgbaImage;

use crate::error::DuotileResult;

/// Background removal as an injected capability.
///
/// The engine treats the matting model as a black-box raster filter: it
/// takes an image and returns a copy with background pixels made
/// transparent. Implementations typically wrap an external model or
/// service; the stock pipeline carries none, and slots that request
/// removal pass through unchanged when no remover is installed.
pub trait BackgroundRemover {
    fn remove(&self, image: &RgbaImage) -> DuotileResult<RgbaImage>;
}
