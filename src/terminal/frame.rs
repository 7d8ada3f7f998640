//! Character-grid frame type for the preview panel.

/// A rendered preview frame: one character per cell, row-major.
#[derive(Debug, Clone)]
pub struct AsciiFrame {
    /// Character data for the frame (row-major order)
    pub chars: Vec<char>,
    /// Width in characters
    pub width: u16,
    /// Height in characters
    pub height: u16,
}

impl Default for AsciiFrame {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl AsciiFrame {
    /// Create a blank frame with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            chars: vec![' '; size],
            width,
            height,
        }
    }

    /// Create a frame from a character vector.
    pub fn from_chars(chars: Vec<char>, width: u16, height: u16) -> Self {
        Self {
            chars,
            width,
            height,
        }
    }

    /// Join the rows with newlines for rendering.
    pub fn to_string_display(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        self.chars
            .chunks(self.width as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_blank() {
        let frame = AsciiFrame::new(20, 10);
        assert_eq!(frame.chars.len(), 200);
        assert!(frame.chars.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_to_string_display_rows() {
        let frame = AsciiFrame::from_chars(vec!['#', '.', ':', '@', '*', '+'], 3, 2);
        assert_eq!(frame.to_string_display(), "#.:\n@*+");
    }

    #[test]
    fn test_to_string_display_empty() {
        assert_eq!(AsciiFrame::default().to_string_display(), "");
    }
}
