//! Record model for the csvnorm record normalizer.
//!
//! This crate provides the fixed eight-column [`Record`] that every data row
//! is marshalled into, plus the field validator that guarantees each field is
//! valid UTF-8 before a record is built.
//!
//! # Module Organization
//!
//! - [`record`]: The [`Record`] type and its [`Column`] layout
//! - [`text`]: Field validation with replacement-character substitution
//!
//! # Example
//!
//! ```
//! use csvnorm_model::{Column, Record, validate_fields};
//!
//! let raw: [&[u8]; 8] = [
//!     b"4/1/11 11:00:00 AM",
//!     b"123 4th St, Anywhere, AA",
//!     b"94121",
//!     b"Monkey Alberto",
//!     b"1:23:32.123",
//!     b"1:32:33.123",
//!     b"zzsasdfa",
//!     b"I am the very model",
//! ];
//! let fields: [String; 8] = validate_fields(raw).try_into().unwrap();
//! let record = Record::from_fields(fields);
//! assert_eq!(record.get(Column::Zip), "94121");
//! ```

pub mod record;
pub mod text;

// === Record Model ===
pub use record::{Column, FIELD_COUNT, Record};

// === Field Validation ===
pub use text::{REPLACEMENT_MARKER, is_valid_field, validate_field, validate_fields};
