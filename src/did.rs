//! Identifier relations
//!
//! The document identifier's own grammar is owned by the caller; this
//! module only answers whether one identifier names a fragment of another.

/// Returns true iff `candidate` is `document_id` followed by `#` and a
/// non-empty fragment.
pub fn is_fragment_of(candidate: &str, document_id: &str) -> bool {
    candidate
        .strip_prefix(document_id)
        .and_then(|rest| rest.strip_prefix('#'))
        .is_some_and(|fragment| !fragment.is_empty())
}
