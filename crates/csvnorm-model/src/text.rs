//! Field validation.
//!
//! Input fields arrive as raw bytes. Every field must be valid UTF-8 before it
//! can live in a [`Record`](crate::Record); invalid sequences are replaced
//! with [`REPLACEMENT_MARKER`] rather than rejected, so validation never fails.

use std::borrow::Cow;

/// Marker substituted for each invalid byte sequence (U+FFFD).
pub const REPLACEMENT_MARKER: char = char::REPLACEMENT_CHARACTER;

/// Returns true if the field is valid UTF-8 as-is.
pub fn is_valid_field(field: &[u8]) -> bool {
    std::str::from_utf8(field).is_ok()
}

/// Validate a single field.
///
/// Valid input is borrowed unchanged. Otherwise each maximal invalid
/// sequence is replaced with one [`REPLACEMENT_MARKER`] and an owned string
/// is returned, so callers can tell a repaired field by `Cow::Owned`.
pub fn validate_field(field: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(field)
}

/// Validate a row of fields, preserving length and order.
pub fn validate_fields<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    fields
        .into_iter()
        .map(|field| validate_field(field).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_field_is_borrowed() {
        let field = "Résumé 😀".as_bytes();
        assert!(is_valid_field(field));
        assert!(matches!(validate_field(field), Cow::Borrowed("Résumé 😀")));
    }

    #[test]
    fn test_invalid_sequence_is_replaced() {
        let field = b"Mr. \xff\xfeFoo";
        assert!(!is_valid_field(field));
        let validated = validate_field(field);
        assert!(matches!(validated, Cow::Owned(_)));
        assert_eq!(validated, "Mr. \u{fffd}\u{fffd}Foo");
    }

    #[test]
    fn test_truncated_multibyte_is_single_marker() {
        // First two bytes of a three-byte sequence.
        let field = b"ab\xe2\x82cd";
        assert_eq!(validate_field(field), "ab\u{fffd}cd");
    }

    #[test]
    fn test_validate_fields_preserves_length() {
        let row: [&[u8]; 3] = [b"ok", b"\xc3", b""];
        let validated = validate_fields(row);
        assert_eq!(validated, vec!["ok", "\u{fffd}", ""]);
    }

    proptest! {
        #[test]
        fn validated_fields_are_always_text(row in prop::collection::vec(
            prop::collection::vec(any::<u8>(), 0..32),
            0..10,
        )) {
            let validated = validate_fields(row.iter().map(Vec::as_slice));
            prop_assert_eq!(validated.len(), row.len());
            for (raw, text) in row.iter().zip(&validated) {
                if let Ok(original) = std::str::from_utf8(raw) {
                    prop_assert_eq!(original, text.as_str());
                }
            }
        }
    }
}
