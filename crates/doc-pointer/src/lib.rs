//! JSON Pointer (RFC 6901) resolution over in-memory documents.
//!
//! A pointer is either the empty string (the whole document) or a
//! `/`-delimited path of escaped tokens. [`tokenize`] turns a pointer string
//! into raw tokens, [`resolve`] walks a [`serde_json::Value`] tree with those
//! tokens, and [`get`] / [`get_from_json`] combine the two for callers that
//! hold a document or raw JSON text.
//!
//! # Example
//!
//! ```
//! use doc_pointer::{get, tokenize};
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": [1, 2, 3]}});
//!
//! assert_eq!(get(&doc, "/a/b/1").unwrap(), &json!(2));
//! // "-" addresses the last element of a sequence.
//! assert_eq!(get(&doc, "/a/b/-").unwrap(), &json!(3));
//!
//! // Escaped tokens: ~1 is "/", ~0 is "~".
//! assert_eq!(tokenize("/a~1b~0c").unwrap(), vec!["a/b~c".to_string()]);
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod resolve;
pub mod types;

pub use resolve::{resolve, Resolver};
pub use types::{is_valid_index, Token, Tokens};

/// Decode one escaped pointer segment into its raw token form.
///
/// `~1` stands for a literal `/` inside a token and `~0` for a literal `~`
/// (RFC 6901 §4). Segments without a `~` come back unchanged.
///
/// # Example
///
/// ```
/// use doc_pointer::unescape_token;
///
/// assert_eq!(unescape_token("tilde~0key"), "tilde~key");
/// assert_eq!(unescape_token("path~1segment"), "path/segment");
/// assert_eq!(unescape_token("plain"), "plain");
/// ```
pub fn unescape_token(token: &str) -> String {
    if !token.contains('~') {
        return token.to_string();
    }
    // Order matters: ~1 must be replaced before ~0, otherwise "~01"
    // would decode to "/" instead of "~1".
    token.replace("~1", "/").replace("~0", "~")
}

/// Encode a raw token so it can sit between `/` delimiters in a pointer.
///
/// Inverse of [`unescape_token`]: every `~` in the token becomes `~0` and
/// every `/` becomes `~1`, so the delimiter stays unambiguous.
///
/// # Example
///
/// ```
/// use doc_pointer::escape_token;
///
/// assert_eq!(escape_token("tilde~key"), "tilde~0key");
/// assert_eq!(escape_token("path/segment"), "path~1segment");
/// assert_eq!(escape_token("plain"), "plain");
/// ```
pub fn escape_token(token: &str) -> String {
    if !token.contains('/') && !token.contains('~') {
        return token.to_string();
    }
    // Order matters: ~ must be escaped before /
    token.replace('~', "~0").replace('/', "~1")
}

/// Parse a pointer string into its raw token sequence.
///
/// The empty pointer denotes the whole document and yields zero tokens. Every
/// other pointer must start with `/`; the remainder is split on `/` and each
/// piece is unescaped. No numeric validation happens here - whether a token
/// is a valid sequence index only matters once the resolver knows it is
/// standing on a sequence.
///
/// # Errors
///
/// [`PointerError::InvalidPointer`] if the pointer is non-empty and does not
/// start with `/`.
///
/// # Example
///
/// ```
/// use doc_pointer::tokenize;
///
/// assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
/// assert_eq!(tokenize("/").unwrap(), vec![""]);
/// assert_eq!(tokenize("/foo/bar").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(tokenize("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(tokenize("foo").is_err());
/// ```
pub fn tokenize(pointer: &str) -> Result<Tokens, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::InvalidPointer);
    }
    Ok(pointer[1..].split('/').map(unescape_token).collect())
}

/// Format a token sequence back into a pointer string.
///
/// Inverse of [`tokenize`]: each token is escaped and prefixed with `/`. The
/// empty sequence formats as the empty (root) pointer.
///
/// # Example
///
/// ```
/// use doc_pointer::format_pointer;
///
/// assert_eq!(format_pointer(&[]), "");
/// assert_eq!(format_pointer(&["foo".to_string(), "bar".to_string()]), "/foo/bar");
/// assert_eq!(format_pointer(&["a~b".to_string(), "c/d".to_string()]), "/a~0b/c~1d");
/// ```
pub fn format_pointer(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape_token(token));
    }
    out
}

/// Resolve a pointer against a borrowed document.
///
/// Tokenizes `pointer` and walks `doc` with [`resolve`]. The returned
/// reference borrows from `doc`; nothing is cloned.
///
/// # Errors
///
/// Any [`PointerError`] from tokenization or traversal.
///
/// # Example
///
/// ```
/// use doc_pointer::{get, PointerError};
/// use serde_json::json;
///
/// let doc = json!({"a": null});
///
/// // A key that exists with a null value resolves to null ...
/// assert_eq!(get(&doc, "/a").unwrap(), &json!(null));
/// // ... which is distinct from a key that is absent.
/// assert!(matches!(get(&doc, "/b"), Err(PointerError::NonexistentProperty { .. })));
/// ```
pub fn get<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    let tokens = tokenize(pointer)?;
    resolve::resolve_at(doc, &tokens, pointer)
}

/// Resolve a pointer against raw JSON text.
///
/// Decodes `text` with serde_json, then resolves `pointer` against the
/// decoded document. The resolved sub-value is cloned out because the decoded
/// document only lives for the duration of this call.
///
/// # Errors
///
/// - [`PointerError::InvalidJson`] if `text` is not valid JSON.
/// - Any [`PointerError`] from tokenization or traversal.
///
/// # Example
///
/// ```
/// use doc_pointer::{get_from_json, PointerError};
/// use serde_json::json;
///
/// assert_eq!(get_from_json(r#"{"a": [10, 20]}"#, "/a/0").unwrap(), json!(10));
/// assert!(matches!(get_from_json("{not json", "/a"), Err(PointerError::InvalidJson(_))));
/// ```
pub fn get_from_json(text: &str, pointer: &str) -> Result<Value, PointerError> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| PointerError::InvalidJson(e.to_string()))?;
    get(&doc, pointer).cloned()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    /// The document root is a non-navigable scalar but the pointer asks for
    /// traversal.
    #[error("INVALID_DATA")]
    InvalidData,
    /// Raw text input could not be decoded into a document.
    #[error("INVALID_JSON: {0}")]
    InvalidJson(String),
    /// A non-empty pointer that does not start with `/`.
    #[error("INVALID_POINTER")]
    InvalidPointer,
    /// Traversal reached a token with no matching mapping key, sequence
    /// index, or `-`-resolvable element.
    #[error("NONEXISTENT_PROPERTY: pointer {pointer:?}, token {token:?}")]
    NonexistentProperty { pointer: String, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unescape_token() {
        assert_eq!(unescape_token("foo"), "foo");
        assert_eq!(unescape_token("a~0b"), "a~b");
        assert_eq!(unescape_token("c~1d"), "c/d");
        assert_eq!(unescape_token("a~0b~1c"), "a~b/c");
        assert_eq!(unescape_token("~0~0"), "~~");
        assert_eq!(unescape_token("~1~1"), "//");

        // The order ~1 then ~0 keeps "~01" from collapsing into "/".
        assert_eq!(unescape_token("~01"), "~1");
    }

    #[test]
    fn test_escape_token() {
        assert_eq!(escape_token("foo"), "foo");
        assert_eq!(escape_token("a~b"), "a~0b");
        assert_eq!(escape_token("c/d"), "c~1d");
        assert_eq!(escape_token("a~b/c"), "a~0b~1c");
        assert_eq!(escape_token("~~"), "~0~0");
        assert_eq!(escape_token("//"), "~1~1");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
        assert_eq!(tokenize("/").unwrap(), vec![""]);
        assert_eq!(tokenize("/foo/bar").unwrap(), vec!["foo", "bar"]);
        assert_eq!(tokenize("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
        assert_eq!(tokenize("/foo///").unwrap(), vec!["foo", "", "", ""]);
        assert_eq!(tokenize("/a~1b~0c").unwrap(), vec!["a/b~c"]);
    }

    #[test]
    fn test_tokenize_rejects_relative_pointer() {
        assert_eq!(tokenize("foo"), Err(PointerError::InvalidPointer));
        assert_eq!(tokenize("foo/bar"), Err(PointerError::InvalidPointer));
        assert_eq!(tokenize("~0"), Err(PointerError::InvalidPointer));
    }

    #[test]
    fn test_format_pointer() {
        assert_eq!(format_pointer(&[]), "");
        assert_eq!(format_pointer(&["foo".to_string()]), "/foo");
        assert_eq!(
            format_pointer(&["foo".to_string(), "bar".to_string()]),
            "/foo/bar"
        );
        assert_eq!(
            format_pointer(&["a~b".to_string(), "c/d".to_string()]),
            "/a~0b/c~1d"
        );
        assert_eq!(format_pointer(&["".to_string()]), "/");
    }

    #[test]
    fn test_tokenize_format_roundtrip() {
        let pointers = vec![
            "",
            "/",
            "/foo",
            "/foo/bar",
            "/a~0b",
            "/c~1d",
            "/a~0b/c~1d/1",
            "/foo///",
        ];
        for pointer in pointers {
            let tokens = tokenize(pointer).unwrap();
            assert_eq!(
                format_pointer(&tokens),
                pointer,
                "Failed roundtrip for: {:?}",
                pointer
            );
        }
    }

    #[test]
    fn test_get_empty_pointer_is_identity() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(get(&doc, "").unwrap(), &doc);

        // A scalar root is fine as long as nothing is traversed.
        assert_eq!(get(&json!(42), "").unwrap(), &json!(42));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(get(&doc, "/a/b/1").unwrap(), &json!(2));
        assert_eq!(get(&doc, "/a/b/-").unwrap(), &json!(3));
    }

    #[test]
    fn test_get_out_of_range_names_token() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(
            get(&doc, "/a/b/5"),
            Err(PointerError::NonexistentProperty {
                pointer: "/a/b/5".to_string(),
                token: "5".to_string(),
            })
        );
    }

    #[test]
    fn test_get_null_value_vs_missing_key() {
        let doc = json!({"a": null});
        assert_eq!(get(&doc, "/a").unwrap(), &Value::Null);
        assert_eq!(
            get(&doc, "/b"),
            Err(PointerError::NonexistentProperty {
                pointer: "/b".to_string(),
                token: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_get_from_json() {
        let text = r#"{"a": {"b": [1, 2, 3]}}"#;
        assert_eq!(get_from_json(text, "/a/b/2").unwrap(), json!(3));
        assert_eq!(get_from_json(text, "").unwrap(), json!({"a": {"b": [1, 2, 3]}}));
    }

    #[test]
    fn test_get_from_json_invalid_text() {
        let result = get_from_json("{\"a\": ", "/a");
        assert!(matches!(result, Err(PointerError::InvalidJson(_))));
    }

    #[test]
    fn test_get_is_idempotent() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        for _ in 0..3 {
            assert_eq!(get(&doc, "/a/b/0").unwrap(), &json!(1));
            assert_eq!(
                get(&doc, "/a/x"),
                Err(PointerError::NonexistentProperty {
                    pointer: "/a/x".to_string(),
                    token: "x".to_string(),
                })
            );
        }
    }
}
