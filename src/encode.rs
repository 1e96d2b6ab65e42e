use std::{io::Cursor, path::Path};

use image::ImageFormat;

use crate::{
    canvas::Canvas,
    error::{DuotileError, DuotileResult},
};

/// Serialize a finished canvas to PNG bytes. Always PNG, whatever the
/// background mode, so transparency survives the export.
pub fn png_bytes(canvas: &Canvas) -> DuotileResult<Vec<u8>> {
    let mut buf = Vec::new();
    canvas
        .image()
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| DuotileError::encode(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Encode and write a canvas to disk.
pub fn write_png(canvas: &Canvas, path: &Path) -> DuotileResult<()> {
    let bytes = png_bytes(canvas)?;
    std::fs::write(path, bytes)
        .map_err(|e| DuotileError::encode(format!("write '{}': {e}", path.display())))
}
