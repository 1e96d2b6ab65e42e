use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use image::RgbaImage;

use crate::error::{DuotileError, DuotileResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where one input image comes from.
#[derive(Clone, Debug)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Resolve one slot's inputs; a file beats a URL when both are given.
    pub fn from_options(path: Option<PathBuf>, url: Option<String>) -> DuotileResult<Self> {
        match (path, url) {
            (Some(path), _) => Ok(Self::Path(path)),
            (None, Some(url)) => Ok(Self::Url(url)),
            (None, None) => Err(DuotileError::validation(
                "an image slot needs a file or a URL",
            )),
        }
    }
}

/// Load and decode a source into straight-alpha RGBA8.
pub fn load_raster(source: &ImageSource) -> DuotileResult<RgbaImage> {
    let bytes = match source {
        ImageSource::Bytes(bytes) => return decode_raster(bytes),
        ImageSource::Path(path) => std::fs::read(path)
            .with_context(|| format!("read image '{}'", path.display()))
            .map_err(|e| DuotileError::source(format!("{e:#}")))?,
        ImageSource::Url(url) => fetch_url(url)?,
    };
    decode_raster(&bytes)
}

/// Decode encoded image bytes (PNG/JPEG/...) into RGBA8.
pub fn decode_raster(bytes: &[u8]) -> DuotileResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| DuotileError::source(format!("{e:#}")))?;
    Ok(decoded.to_rgba8())
}

fn fetch_url(url: &str) -> DuotileResult<Vec<u8>> {
    let fetch = || -> anyhow::Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("build http client")?;
        let response = client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("fetch image from '{url}'"))?;
        let bytes = response.bytes().context("read response body")?;
        Ok(bytes.to_vec())
    };
    fetch().map_err(|e| DuotileError::source(format!("{e:#}")))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn file_has_priority_over_url() {
        let source = ImageSource::from_options(
            Some(PathBuf::from("a.png")),
            Some("https://example.com/b.png".to_string()),
        )
        .unwrap();
        assert!(matches!(source, ImageSource::Path(_)));
    }

    #[test]
    fn empty_slot_is_a_validation_error() {
        let err = ImageSource::from_options(None, None).unwrap_err();
        assert!(err.to_string().contains("validation error:"));
    }

    #[test]
    fn decode_raster_png_dimensions() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_raster(&buf).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }

    #[test]
    fn decode_raster_rejects_garbage() {
        let err = decode_raster(b"definitely not an image").unwrap_err();
        assert!(err.to_string().contains("source error:"));
    }
}
