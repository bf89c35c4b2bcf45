// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the overlay (PNG, JPEG, GIF, WebP, etc.).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Memory used by the decoded pixels (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes encoded image bytes into RGBA pixels.
///
/// Decoding up front means a corrupt download is reported as a load failure
/// instead of a blank image.
///
/// # Errors
///
/// Returns [`crate::error::Error::Decode`] if the format is unknown or the
/// data is corrupt.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}
