//! Downsampling pixel data to character grids.

/// Downsample a grayscale image to a character grid by averaging the
/// brightness of all pixels within each cell.
///
/// # Arguments
/// * `gray` - Grayscale pixels, row-major
/// * `img_width` / `img_height` - Source dimensions in pixels
/// * `char_width` / `char_height` - Output dimensions in characters
///
/// # Returns
/// One averaged brightness value per cell, row-major,
/// `char_width * char_height` long. Empty for degenerate inputs.
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
) -> Vec<u8> {
    if char_width == 0 || char_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return Vec::new();
    }

    let cell_w = img_width as f32 / char_width as f32;
    let cell_h = img_height as f32 / char_height as f32;

    let mut result = Vec::with_capacity((char_width as usize) * (char_height as usize));

    for cy in 0..char_height {
        for cx in 0..char_width {
            let start_x = (cx as f32 * cell_w) as u32;
            let end_x = ((cx + 1) as f32 * cell_w) as u32;
            let start_y = (cy as f32 * cell_h) as u32;
            let end_y = ((cy + 1) as f32 * cell_h) as u32;

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = (py * img_width + px) as usize;
                    if idx < gray.len() {
                        sum += gray[idx] as u32;
                        count += 1;
                    }
                }
            }

            result.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_output_size() {
        let gray = vec![128u8; 64 * 32];
        let out = downsample(&gray, 64, 32, 16, 8);
        assert_eq!(out.len(), 16 * 8);
    }

    #[test]
    fn test_downsample_uniform_input() {
        let gray = vec![77u8; 40 * 20];
        let out = downsample(&gray, 40, 20, 10, 5);
        assert!(out.iter().all(|&b| b == 77));
    }

    #[test]
    fn test_downsample_averages_cells() {
        // 4x1 image, cells of 2 pixels each: (0+100)/2 and (200+250)/2
        let gray = vec![0, 100, 200, 250];
        let out = downsample(&gray, 4, 1, 2, 1);
        assert_eq!(out, vec![50, 225]);
    }

    #[test]
    fn test_downsample_degenerate_inputs() {
        assert!(downsample(&[], 0, 0, 4, 4).is_empty());
        assert!(downsample(&[1, 2, 3], 3, 1, 0, 1).is_empty());
    }
}
