//! ASCII byte classes used by the scanner.
//!
//! Classification is byte-wise; any byte outside these classes is handed to
//! the profile's operator, delimiter and quote sets, and failing those is an
//! invalid token.

/// Checks if a byte may start a word (identifier or keyword).
///
/// # Example
///
/// ```
/// use polylex_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(0xC3));
/// ```
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

/// Checks if a byte may continue a word.
///
/// # Example
///
/// ```
/// use polylex_lex::ascii::is_ident_continue;
///
/// assert!(is_ident_continue(b'9'));
/// assert!(is_ident_continue(b'_'));
/// assert!(!is_ident_continue(b'('));
/// ```
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Checks if a byte is blank: space, tab, carriage return, vertical tab or
/// form feed. Newlines are not blank; they advance the row.
#[inline]
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

/// Checks if a byte continues a number literal.
#[inline]
pub fn is_number_continue(byte: u8, allow_dot: bool) -> bool {
    byte.is_ascii_digit() || (allow_dot && byte == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_bytes() {
        for byte in [b' ', b'\t', b'\r', 0x0b, 0x0c] {
            assert!(is_blank(byte));
        }
        assert!(!is_blank(b'\n'));
        assert!(!is_blank(b'a'));
    }

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start(b'Z'));
        assert!(!is_ident_start(b'$'));
        assert!(is_ident_continue(b'0'));
        assert!(!is_ident_continue(b'-'));
        assert!(!is_ident_continue(0x80));
    }

    #[test]
    fn test_number_continue() {
        assert!(is_number_continue(b'7', false));
        assert!(!is_number_continue(b'.', false));
        assert!(is_number_continue(b'.', true));
        assert!(!is_number_continue(b'e', true));
    }
}
