//! Test fixtures: small source images encoded as PNG in memory.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Primary colors used across the API tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// Encode an image buffer as PNG bytes
pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    cursor.into_inner()
}

/// A solid-color source image
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    png_bytes(&RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// Left half one color, right half another
pub fn two_tone_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    });
    png_bytes(&img)
}

/// A smooth red-to-blue gradient, useful when the clustering needs real
/// color variety
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let b = (y * 255 / height.max(1)) as u8;
        Rgb([r, 64, b])
    });
    png_bytes(&img)
}
