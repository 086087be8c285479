//! Byte offset to code point offset conversion
//!
//! The engine reports byte offsets; callers index text by code point.
//! Lookups during a scan are mostly increasing, so the cursor walks from its
//! last position instead of counting from the start every time.

/// Converts byte offsets of one text into code point offsets
#[derive(Debug, Clone)]
pub struct CharCursor<'t> {
    text: &'t str,
    ascii: bool,
    byte: usize,
    chars: usize,
}

impl<'t> CharCursor<'t> {
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            ascii: text.is_ascii(),
            byte: 0,
            chars: 0,
        }
    }

    /// Code point offset of `byte_offset`, which must lie on a char boundary.
    pub fn char_offset(&mut self, byte_offset: usize) -> usize {
        if self.ascii {
            return byte_offset;
        }

        if byte_offset >= self.byte {
            self.chars += self.text[self.byte..byte_offset].chars().count();
        } else {
            self.chars -= self.text[byte_offset..self.byte].chars().count();
        }
        self.byte = byte_offset;
        self.chars
    }
}

/// Byte offset just past the code point starting at `byte_offset`, or
/// `text.len() + 1` when `byte_offset` is the end of the text.
pub(crate) fn next_char_boundary(text: &str, byte_offset: usize) -> usize {
    text[byte_offset..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| byte_offset + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let mut cursor = CharCursor::new("hello");
        assert_eq!(cursor.char_offset(3), 3);
        assert_eq!(cursor.char_offset(1), 1);
    }

    #[test]
    fn test_multibyte_forward_and_back() {
        // 'é' is 2 bytes, '€' is 3 bytes
        let text = "aé€b";
        let mut cursor = CharCursor::new(text);
        assert_eq!(cursor.char_offset(0), 0);
        assert_eq!(cursor.char_offset(1), 1);
        assert_eq!(cursor.char_offset(3), 2);
        assert_eq!(cursor.char_offset(7), 4);
        assert_eq!(cursor.char_offset(6), 3);
        assert_eq!(cursor.char_offset(1), 1);
        assert_eq!(cursor.char_offset(text.len()), 4);
    }

    #[test]
    fn test_next_char_boundary() {
        let text = "a€";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 4);
        assert_eq!(next_char_boundary(text, 4), 5);
    }
}
