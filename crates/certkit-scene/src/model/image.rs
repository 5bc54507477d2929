//! Image node payloads.
//!
//! Decoding happens outside this crate: the image-loading collaborator (or
//! the QR encoder) hands over a decoded bitmap plus a resource handle, and
//! the scene only records the handle and the natural pixel size.

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to an externally managed bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Handle minted by the image-loading collaborator.
    pub resource: Uuid,
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

impl ImageSource {
    pub fn new(resource: Uuid, width: u32, height: u32) -> Self {
        Self {
            resource,
            width,
            height,
        }
    }

    /// Records the dimensions of a decoded bitmap under `resource`.
    pub fn from_rgba(resource: Uuid, bitmap: &RgbaImage) -> Self {
        Self::new(resource, bitmap.width(), bitmap.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_records_dimensions() {
        let bitmap = RgbaImage::new(320, 240);
        let source = ImageSource::from_rgba(Uuid::new_v4(), &bitmap);
        assert_eq!(source.width, 320);
        assert_eq!(source.height, 240);
    }
}
