//! Column helpers for UTF-8 lines
//!
//! Columns count `char`s while `String` indexes bytes. These helpers do the
//! translation at edit sites so no slice ever lands inside a character.

/// Number of characters in `line`
#[must_use]
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of character `column` in `line`
///
/// `column == char_len(line)` maps to `line.len()`. Returns `None` for
/// columns past the end of the line.
#[must_use]
pub fn byte_offset(line: &str, column: usize) -> Option<usize> {
    line.char_indices()
        .map(|(idx, _)| idx)
        .chain(core::iter::once(line.len()))
        .nth(column)
}

/// Byte offset of `column`, clamped to the end of the line
#[must_use]
pub fn clamped_byte_offset(line: &str, column: usize) -> usize {
    byte_offset(line, column).unwrap_or(line.len())
}

/// Characters of `line` from `start` up to `end`, clamped like a substring
#[must_use]
pub fn char_slice(line: &str, start: usize, end: usize) -> &str {
    let from = clamped_byte_offset(line, start);
    let to = clamped_byte_offset(line, end).max(from);
    &line[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets() {
        assert_eq!(byte_offset("abc", 0), Some(0));
        assert_eq!(byte_offset("abc", 3), Some(3));
        assert_eq!(byte_offset("abc", 4), None);
        assert_eq!(byte_offset("", 0), Some(0));
    }

    #[test]
    fn multibyte_offsets() {
        let line = "héllo";
        assert_eq!(char_len(line), 5);
        assert_eq!(byte_offset(line, 2), Some(3));
        assert_eq!(byte_offset(line, 5), Some(line.len()));
        assert_eq!(char_slice(line, 1, 3), "él");
    }

    #[test]
    fn slices_clamp() {
        assert_eq!(char_slice("abc", 1, 99), "bc");
        assert_eq!(char_slice("abc", 5, 9), "");
        assert_eq!(char_slice("abc", 2, 1), "");
    }
}
