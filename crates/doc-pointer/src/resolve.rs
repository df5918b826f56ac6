//! Tree traversal: walk a document with a token sequence.

use serde_json::Value;

use crate::types::{is_valid_index, Token};
use crate::{format_pointer, PointerError};

/// Walk `doc` one token at a time and return the addressed sub-value.
///
/// An empty token sequence returns the document itself. A non-empty sequence
/// against a scalar root fails with [`PointerError::InvalidData`] before any
/// traversal. Each step narrows the cursor by the current token:
///
/// 1. a mapping descends into the token's key when present (a key holding
///    null counts as present);
/// 2. a sequence descends by `-` to its last existing element, or by a
///    strict decimal index when in range;
/// 3. anything else fails with [`PointerError::NonexistentProperty`],
///    carrying the full pointer and the offending token.
///
/// Cost is O(tokens), each step a hash lookup or index access.
///
/// # Example
///
/// ```
/// use doc_pointer::{resolve, tokenize};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [1, 2, 3]}});
/// let tokens = tokenize("/a/b/-").unwrap();
/// assert_eq!(resolve(&doc, &tokens).unwrap(), &json!(3));
/// ```
pub fn resolve<'a>(doc: &'a Value, tokens: &[Token]) -> Result<&'a Value, PointerError> {
    // Token-only callers get the canonical rendering of their tokens; the
    // string entry points substitute the caller's own pointer instead.
    walk(doc, tokens, || format_pointer(tokens))
}

/// Like [`resolve`], but errors carry `pointer` verbatim.
///
/// Tokens with invalid escape sequences survive `tokenize` unvalidated, so
/// re-escaping them does not round-trip; any entry point that still holds
/// the source string must report that string, not a reconstruction.
pub(crate) fn resolve_at<'a>(
    doc: &'a Value,
    tokens: &[Token],
    pointer: &str,
) -> Result<&'a Value, PointerError> {
    walk(doc, tokens, || pointer.to_string())
}

fn walk<'a>(
    doc: &'a Value,
    tokens: &[Token],
    pointer: impl Fn() -> String,
) -> Result<&'a Value, PointerError> {
    if tokens.is_empty() {
        return Ok(doc);
    }
    if !matches!(doc, Value::Object(_) | Value::Array(_)) {
        return Err(PointerError::InvalidData);
    }

    let mut current = doc;
    for token in tokens {
        current = step(current, token).ok_or_else(|| PointerError::NonexistentProperty {
            pointer: pointer(),
            token: token.clone(),
        })?;
    }
    Ok(current)
}

/// Narrow one level. `None` means the token has no target here.
fn step<'a>(doc: &'a Value, token: &str) -> Option<&'a Value> {
    match doc {
        // Key presence decides, not the value: {"a": null} has "a".
        Value::Object(map) => map.get(token),
        Value::Array(arr) => {
            if token == "-" {
                // Read-oriented "-": the last existing element.
                arr.last()
            } else if is_valid_index(token) {
                token.parse::<usize>().ok().and_then(|idx| arr.get(idx))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// A borrowing handle for resolving many pointers against one document.
///
/// The handle never mutates the document and cannot outlive it. It is `Copy`,
/// so concurrent reads against a shared document are free to clone it.
///
/// # Example
///
/// ```
/// use doc_pointer::Resolver;
/// use serde_json::json;
///
/// let doc = json!({"users": [{"name": "ada"}, {"name": "lin"}]});
/// let resolver = Resolver::new(&doc);
///
/// assert_eq!(resolver.resolve("/users/0/name").unwrap(), &json!("ada"));
/// assert_eq!(resolver.resolve("/users/-/name").unwrap(), &json!("lin"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    root: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Resolver { root }
    }

    /// The document this resolver was constructed over.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    /// Tokenize `pointer` and resolve it against the root.
    pub fn resolve(&self, pointer: &str) -> Result<&'a Value, PointerError> {
        let tokens = crate::tokenize(pointer)?;
        resolve_at(self.root, &tokens, pointer)
    }
}
