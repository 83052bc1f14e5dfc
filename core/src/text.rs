//! Literal text normalization.
//!
//! Trims leading and trailing ASCII space characters from literal text
//! values, one character at a time to fixpoint. Only `' '` (U+0020) is
//! recognized as trimmable: tabs, newlines, and other whitespace code
//! points are never stripped. This narrow definition is deliberate and
//! matches the peeling rule exactly; it is not `str::trim`.
//!
//! # Examples
//!
//! ```
//! use type_schema_core::{trim, trim_left, trim_right};
//!
//! assert_eq!(trim_left("  a"), "a");
//! assert_eq!(trim_right("a  "), "a");
//! assert_eq!(trim("  a b  "), "a b");
//! assert_eq!(trim("\ta"), "\ta"); // tab is untouched
//! ```

use crate::{Descriptor, DeriveError, Result};

/// Removes leading ASCII spaces.
///
/// Peels exactly one leading `' '` per step until the text no longer
/// starts with a space; the empty text terminates immediately.
pub fn trim_left(input: &str) -> &str {
    let mut rest = input;
    while let Some(stripped) = rest.strip_prefix(' ') {
        rest = stripped;
    }
    rest
}

/// Removes trailing ASCII spaces.
///
/// Symmetric to [`trim_left`]: peels one trailing `' '` per step from the
/// end.
pub fn trim_right(input: &str) -> &str {
    let mut rest = input;
    while let Some(stripped) = rest.strip_suffix(' ') {
        rest = stripped;
    }
    rest
}

/// Removes leading and trailing ASCII spaces.
///
/// Applies the [`trim_left`] rule to fixpoint, then [`trim_right`] on the
/// result. Interior spaces are preserved. Idempotent: `trim(trim(x)) ==
/// trim(x)` for every input.
pub fn trim(input: &str) -> &str {
    trim_right(trim_left(input))
}

/// Normalizes a literal text descriptor.
///
/// Returns a new [`Descriptor::TextLiteral`] with the value trimmed. Any
/// other descriptor is rejected with [`DeriveError::NotALiteral`]: only a
/// value known exactly at analysis time can be normalized.
///
/// # Examples
///
/// ```
/// use type_schema_core::*;
///
/// let literal = Descriptor::literal("  hello  ");
/// assert_eq!(trim_literal(&literal), Ok(Descriptor::literal("hello")));
///
/// assert_eq!(trim_literal(&Descriptor::Text), Err(DeriveError::NotALiteral));
/// ```
pub fn trim_literal(descriptor: &Descriptor) -> Result<Descriptor> {
    match descriptor {
        Descriptor::TextLiteral(value) => Ok(Descriptor::TextLiteral(trim(value).to_string())),
        _ => Err(DeriveError::NotALiteral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_left_examples() {
        assert_eq!(trim_left(""), "");
        assert_eq!(trim_left("  a"), "a");
        assert_eq!(trim_left("a  "), "a  ");
        assert_eq!(trim_left("   "), "");
    }

    #[test]
    fn test_trim_right_examples() {
        assert_eq!(trim_right(""), "");
        assert_eq!(trim_right("a  "), "a");
        assert_eq!(trim_right("  a"), "  a");
        assert_eq!(trim_right("   "), "");
    }

    #[test]
    fn test_trim_preserves_interior_spaces() {
        assert_eq!(trim("  a b  "), "a b");
    }

    #[test]
    fn test_trim_is_idempotent() {
        for input in ["", "  a b  ", "a", "   ", " \t ", "a b"] {
            assert_eq!(trim(trim(input)), trim(input));
        }
    }

    #[test]
    fn test_only_ascii_space_is_trimmed() {
        assert_eq!(trim("\ta"), "\ta");
        assert_eq!(trim("a\n"), "a\n");
        assert_eq!(trim(" \ta "), "\ta");
        // Non-breaking space is not trimmable either.
        assert_eq!(trim("\u{a0}a\u{a0}"), "\u{a0}a\u{a0}");
    }

    #[test]
    fn test_trim_literal_rejects_non_literals() {
        assert_eq!(trim_literal(&Descriptor::Text), Err(DeriveError::NotALiteral));
        assert_eq!(trim_literal(&Descriptor::Number), Err(DeriveError::NotALiteral));
    }

    #[test]
    fn test_trim_literal_trims_value() {
        let literal = Descriptor::literal("  spaced out  ");
        assert_eq!(
            trim_literal(&literal),
            Ok(Descriptor::literal("spaced out"))
        );
    }
}
