//! Brightness to character mapping.

/// Map brightness values to characters from the given charset.
///
/// Lower brightness maps to earlier (darker) characters, higher brightness
/// to later (denser) ones. With `invert` set, brightness is flipped first,
/// which reads better on light terminals.
pub fn map_to_chars(brightness: &[u8], charset: &[char], invert: bool) -> Vec<char> {
    if charset.is_empty() {
        return vec![' '; brightness.len()];
    }

    let levels = charset.len();
    brightness
        .iter()
        .map(|&b| {
            let b = if invert { 255 - b } else { b };
            let idx = (b as usize * (levels - 1)) / 255;
            charset[idx]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::STANDARD_CHARSET;

    #[test]
    fn test_map_extremes() {
        let chars = map_to_chars(&[0, 255], STANDARD_CHARSET, false);
        assert_eq!(chars[0], ' ');
        assert_eq!(chars[1], '@');
    }

    #[test]
    fn test_map_invert_flips() {
        let chars = map_to_chars(&[0, 255], STANDARD_CHARSET, true);
        assert_eq!(chars[0], '@');
        assert_eq!(chars[1], ' ');
    }

    #[test]
    fn test_map_midpoint_is_interior() {
        let chars = map_to_chars(&[127], STANDARD_CHARSET, false);
        assert_ne!(chars[0], ' ');
        assert_ne!(chars[0], '@');
    }

    #[test]
    fn test_map_empty_charset_yields_spaces() {
        let chars = map_to_chars(&[0, 128, 255], &[], false);
        assert_eq!(chars, vec![' ', ' ', ' ']);
    }
}
