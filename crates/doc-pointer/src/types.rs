//! Token types for pointer paths.

/// A single raw (unescaped) pointer token.
///
/// Holds either a mapping key, a sequence index in decimal form, or the
/// end-of-sequence sentinel `-`.
pub type Token = String;

/// An ordered token sequence, as produced by [`crate::tokenize`].
pub type Tokens = Vec<Token>;

/// Check if a token is a valid non-negative sequence index.
///
/// Base-10 digits only, with no leading zero other than the literal `"0"`.
///
/// # Example
///
/// ```
/// use doc_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index(""));
/// ```
pub fn is_valid_index(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let bytes = token.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index("abc"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
        assert!(!is_valid_index("-"));
    }
}
