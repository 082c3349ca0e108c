//! Raw bytes to `ImageHandle`

use log::debug;

use crate::{Error, ImageHandle, Result};

/// Decode an encoded image (PNG, JPEG, GIF, BMP, WebP).
///
/// The format is sniffed from the content rather than trusted from a file
/// name. Anything that does not decode is reported as `InvalidImageData`.
pub fn decode_image(bytes: &[u8]) -> Result<ImageHandle> {
    if bytes.is_empty() {
        return Err(Error::InvalidImageData("no data".into()));
    }
    let format = image::guess_format(bytes)
        .map_err(|e| Error::InvalidImageData(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| Error::InvalidImageData(e.to_string()))?;
    debug!(
        "decoded {:?} image {}x{}",
        format,
        decoded.width(),
        decoded.height()
    );
    ImageHandle::new(decoded.to_rgba8())
}
