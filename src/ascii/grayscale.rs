//! RGB to grayscale conversion.

use crate::camera::Frame;

/// Convert an RGB frame to grayscale using the ITU-R BT.601 luminance
/// formula: Y = 0.299*R + 0.587*G + 0.114*B.
///
/// Integer math keeps the hot path free of floating point; the coefficients
/// are scaled by 1000.
pub fn to_grayscale(frame: &Frame) -> Vec<u8> {
    let pixel_count = (frame.width * frame.height) as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    for rgb in frame.data.chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        gray.push(luminance as u8);
    }

    gray
}
