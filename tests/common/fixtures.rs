//! Test fixtures and constants.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Garment colors used across the tests
pub mod colors {
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const CREAM: [u8; 3] = [250, 250, 240];
    pub const RED: [u8; 3] = [220, 20, 20];
    pub const NAVY: [u8; 3] = [20, 30, 110];
    pub const BLACK: [u8; 3] = [5, 5, 5];
    pub const SKY: [u8; 3] = [120, 180, 230];
}

/// Side length of generated test images
pub const IMAGE_SIZE: u32 = 32;

/// Encode an RGBA buffer as PNG
pub fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("Failed to encode PNG");
    out.into_inner()
}

/// A PNG filled with one opaque color
pub fn solid_png(rgb: [u8; 3]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(
        IMAGE_SIZE,
        IMAGE_SIZE,
        Rgba([rgb[0], rgb[1], rgb[2], 255]),
    );
    encode_png(&img)
}

/// A PNG where every pixel is fully transparent
pub fn transparent_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, Rgba([10, 200, 10, 0]));
    encode_png(&img)
}

/// Bytes that claim to be an image but are not
pub fn garbage_bytes() -> Vec<u8> {
    b"this is definitely not a png".to_vec()
}
