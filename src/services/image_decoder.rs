//! Image normalization for color extraction.
//!
//! Every upload is decoded, squashed to a fixed square and kept twice: as an
//! RGBA pixel buffer for the dominant-color extractor and as a small JPEG
//! data URL the client can show next to its color.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::RgbaImage;
use thiserror::Error;

/// JPEG quality for thumbnails returned to the client
const THUMBNAIL_QUALITY: u8 = 80;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode thumbnail: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Thumbnail size must be at least 1 pixel")]
    ZeroSize,
}

/// A decoded, size-normalized upload.
pub struct DecodedImage {
    /// RGBA pixels, `size x size`
    pub pixels: RgbaImage,
    /// `data:image/jpeg;base64,...` rendering of `pixels`
    pub thumbnail_url: String,
}

/// Decode `bytes` (format guessed from content) and resize to `size x size`.
///
/// The resize ignores aspect ratio, so every image contributes the same
/// number of pixels to the color histogram.
pub fn decode_image(bytes: &[u8], size: u32) -> Result<DecodedImage, DecodeError> {
    if size == 0 {
        return Err(DecodeError::ZeroSize);
    }

    let image = image::load_from_memory(bytes).map_err(DecodeError::Decode)?;
    let resized = image.resize_exact(size, size, FilterType::Triangle);

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, THUMBNAIL_QUALITY)
        .encode_image(&resized.to_rgb8())
        .map_err(DecodeError::Encode)?;

    Ok(DecodedImage {
        pixels: resized.to_rgba8(),
        thumbnail_url: jpeg_data_url(&jpeg),
    })
}

/// Wrap JPEG bytes in a data URL.
pub fn jpeg_data_url(jpeg: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_resizes_to_square() {
        let decoded = decode_image(&png_bytes(40, 10, [10, 200, 30, 255]), 16).unwrap();

        assert_eq!(decoded.pixels.dimensions(), (16, 16));
        for (x, y) in [(0, 0), (15, 15)] {
            let px = decoded.pixels.get_pixel(x, y).0;
            for (got, want) in px.iter().zip([10u8, 200, 30, 255]) {
                assert!(got.abs_diff(want) <= 1, "pixel ({x},{y}) = {px:?}");
            }
        }
    }

    #[test]
    fn test_thumbnail_is_jpeg_data_url() {
        let decoded = decode_image(&png_bytes(8, 8, [255, 255, 255, 255]), 8).unwrap();

        let payload = decoded
            .thumbnail_url
            .strip_prefix("data:image/jpeg;base64,")
            .expect("data URL prefix");
        let jpeg = STANDARD.decode(payload).unwrap();
        // JPEG SOI marker
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = decode_image(b"definitely not an image", 8);
        assert!(matches!(result, Err(DecodeError::Decode(_))));
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = decode_image(&png_bytes(2, 2, [0, 0, 0, 255]), 0);
        assert!(matches!(result, Err(DecodeError::ZeroSize)));
    }

    #[test]
    fn test_data_url_encoding() {
        assert_eq!(jpeg_data_url(b"abc"), "data:image/jpeg;base64,YWJj");
    }
}
