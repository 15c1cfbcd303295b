//! Record normalization for csvnorm.
//!
//! Applies the fixed rule sequence to a [`Record`](csvnorm_model::Record):
//!
//! 1. Timestamp: `M/D/YY h:mm:ss AM|PM` in the source zone, re-rendered as
//!    RFC 3339 in the target zone
//! 2. FooDuration and BarDuration: `H:M:S.ms` re-rendered as decimal seconds
//! 3. TotalDuration: recomputed as Foo + Bar
//! 4. Zip: left-padded with zeros to five characters
//! 5. FullName: uppercased
//!
//! # Example
//!
//! ```ignore
//! use csvnorm_transform::{Normalizer, ZoneConfig};
//!
//! let normalizer = Normalizer::new(ZoneConfig::load_default()?);
//! normalizer.normalize(&mut record)?;
//! ```
//!
//! # Design Principles
//!
//! - **Explicit zones**: time zones are loaded once into a [`ZoneConfig`] and
//!   handed to the [`Normalizer`]; nothing is global
//! - **Fail fast**: the first rule that cannot apply stops normalization
//! - **In-place**: fields are rewritten as each rule succeeds, so a failed
//!   record is partially normalized and must be discarded

mod error;
mod normalizer;
mod zones;

pub mod normalization;

// Error types
pub use error::{NormalizeError, ZoneError};

// Normalizer
pub use normalizer::Normalizer;

// Zone configuration
pub use zones::{SOURCE_ZONE, TARGET_ZONE, ZoneConfig};
