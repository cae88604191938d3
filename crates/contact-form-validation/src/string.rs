//! String validation functions

/// A field counts as filled when it contains any character at all.
///
/// Whitespace is deliberately not trimmed; the form reports exactly what the
/// user typed.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Validate minimum length, counted in characters rather than bytes
pub fn has_min_length(s: &str, min: usize) -> bool {
    s.chars().count() >= min
}
