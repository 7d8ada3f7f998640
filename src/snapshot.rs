//! Still-image encoding for captured frames.
//!
//! A capture reads the current preview frame and encodes it as a JPEG. The
//! result is a self-contained payload: the embedder can write the raw bytes
//! to disk or ship the base64 data URL to whatever wants it. The widget
//! keeps no copy after the callback returns.

use std::io::Cursor;

use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use thiserror::Error;

use crate::camera::Frame;

/// Default JPEG quality for captured stills.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors produced while encoding a still image.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Frame buffer does not match its dimensions ({width}x{height}, {len} bytes)")]
    MalformedFrame { width: u32, height: u32, len: usize },
    #[error("JPEG encoding failed: {0}")]
    EncodeFailed(#[from] image::ImageError),
}

/// One encoded still image, produced once per capture action.
///
/// Ownership transfers to the embedder through the capture callback.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl CapturedImage {
    /// Encoded JPEG bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }

    /// Render the image as a `data:image/jpeg;base64,...` URL.
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime_type(), encoded)
    }
}

/// Encode an RGB frame as a JPEG still at the given quality.
pub fn encode_jpeg(frame: &Frame, quality: u8) -> Result<CapturedImage, SnapshotError> {
    let expected = (frame.width as usize) * (frame.height as usize) * frame.bytes_per_pixel();
    if frame.data.len() != expected {
        return Err(SnapshotError::MalformedFrame {
            width: frame.width,
            height: frame.height,
            len: frame.data.len(),
        });
    }

    // The buffer length was just validated, so this cannot fail
    let rgb = RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or(SnapshotError::MalformedFrame {
            width: frame.width,
            height: frame.height,
            len: frame.data.len(),
        })?;

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), quality);
    rgb.write_with_encoder(encoder)?;

    Ok(CapturedImage {
        data: buf,
        width: frame.width,
        height: frame.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FrameFormat;
    use std::time::Instant;

    fn test_frame(width: u32, height: u32) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128]);
            }
        }
        Frame {
            data,
            width,
            height,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        }
    }

    #[test]
    fn test_encode_jpeg_produces_decodable_image() {
        let frame = test_frame(64, 48);
        let image = encode_jpeg(&frame, DEFAULT_JPEG_QUALITY).unwrap();

        assert!(!image.as_bytes().is_empty());
        assert_eq!(image.width(), 64);
        assert_eq!(image.height(), 48);

        let decoded = image::load_from_memory(image.as_bytes()).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 48);
    }

    #[test]
    fn test_encode_jpeg_rejects_malformed_frame() {
        let mut frame = test_frame(64, 48);
        frame.data.truncate(10);

        assert!(matches!(
            encode_jpeg(&frame, DEFAULT_JPEG_QUALITY),
            Err(SnapshotError::MalformedFrame { .. })
        ));
    }

    #[test]
    fn test_data_url_shape() {
        let frame = test_frame(8, 8);
        let image = encode_jpeg(&frame, 80).unwrap();
        let url = image.to_data_url();

        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert!(url.len() > "data:image/jpeg;base64,".len());
    }

    #[test]
    fn test_data_url_round_trips() {
        let frame = test_frame(16, 16);
        let image = encode_jpeg(&frame, 80).unwrap();

        let url = image.to_data_url();
        let b64 = url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        assert_eq!(bytes, image.as_bytes());
    }
}
