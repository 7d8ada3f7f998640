//! ASCII renderer for the live preview.
//!
//! Converts camera frames to character grids for terminal display:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Downsampling** - Reduce resolution to the character grid
//! 3. **Character mapping** - Map brightness to characters
//!
//! Character sets are selectable via [`CharSet`].

mod charset;
mod downsample;
mod grayscale;
mod mapping;

pub use charset::{CharSet, BLOCKS_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use downsample::downsample;
pub use grayscale::to_grayscale;
pub use mapping::map_to_chars;

use crate::camera::Frame;

/// Default terminal character aspect ratio.
/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Calculate character-grid dimensions that preserve the image aspect ratio.
///
/// A naive pixel-to-cell mapping renders vertically stretched because cells
/// are ~2x taller than wide. This fits the image into the given maximums
/// while compensating for the cell aspect.
///
/// # Returns
/// A `(char_width, char_height)` pair; `(0, 0)` for degenerate inputs.
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    max_char_width: u16,
    max_char_height: u16,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || max_char_width == 0 || max_char_height == 0 {
        return (0, 0);
    }

    let img_aspect = img_width as f32 / img_height as f32;

    // A square image needs char_aspect times fewer rows than columns, so the
    // target width:height ratio of the grid is img_aspect * char_aspect.
    let target_char_aspect = img_aspect * DEFAULT_CHAR_ASPECT_RATIO;

    // Fit to max width first, fall back to height-constrained
    let char_width = max_char_width;
    let char_height = (char_width as f32 / target_char_aspect).round() as u16;

    if char_height <= max_char_height && char_height > 0 {
        (char_width, char_height)
    } else {
        let char_height = max_char_height;
        let char_width = ((char_height as f32 * target_char_aspect).round() as u16)
            .clamp(1, max_char_width);
        (char_width, char_height.max(1))
    }
}

/// Render a camera frame to a character grid for the preview panel.
///
/// Composes the grayscale → downsample → map pipeline, fitting the frame
/// into `max_width` x `max_height` cells with aspect correction.
///
/// # Returns
/// The characters in row-major order together with the grid dimensions.
pub fn render_frame(
    frame: &Frame,
    max_width: u16,
    max_height: u16,
    charset: CharSet,
    invert: bool,
) -> (Vec<char>, u16, u16) {
    let (char_width, char_height) =
        calculate_dimensions(frame.width, frame.height, max_width, max_height);
    if char_width == 0 || char_height == 0 {
        return (Vec::new(), 0, 0);
    }

    let gray = to_grayscale(frame);
    let brightness = downsample(&gray, frame.width, frame.height, char_width, char_height);
    let chars = map_to_chars(&brightness, charset.chars(), invert);

    (chars, char_width, char_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FrameFormat;
    use std::time::Instant;

    #[test]
    fn test_calculate_dimensions_wide_image() {
        // 4:3 image in an 80x24 area: width-constrained fit
        let (w, h) = calculate_dimensions(640, 480, 80, 24);
        assert_eq!(w, 80);
        // 80 / (4/3 * 2) = 30 > 24, so height-constrained: 24 * 8/3 = 64
        assert!(h <= 24);
        assert!(w <= 80);
    }

    #[test]
    fn test_calculate_dimensions_degenerate() {
        assert_eq!(calculate_dimensions(0, 480, 80, 24), (0, 0));
        assert_eq!(calculate_dimensions(640, 480, 0, 24), (0, 0));
    }

    #[test]
    fn test_calculate_dimensions_preserves_aspect() {
        // A square image in a generous area should come out ~2:1 w:h
        let (w, h) = calculate_dimensions(400, 400, 100, 100);
        let ratio = w as f32 / h as f32;
        assert!((ratio - 2.0).abs() < 0.2, "ratio was {}", ratio);
    }

    #[test]
    fn test_render_frame_fills_grid() {
        let frame = Frame {
            data: vec![200; 32 * 16 * 3],
            width: 32,
            height: 16,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        };
        let (chars, w, h) = render_frame(&frame, 20, 10, CharSet::Standard, false);
        assert_eq!(chars.len(), (w as usize) * (h as usize));
        assert!(w > 0 && h > 0);
        // Uniform bright input maps to a single non-space character
        assert!(chars.iter().all(|&c| c == chars[0]));
        assert_ne!(chars[0], ' ');
    }
}
