//! Field-level normalization rules.
//!
//! - **timestamp**: wall-clock parsing and zone conversion
//! - **duration**: `H:M:S.ms` scanning and decimal-seconds rendering
//! - **text**: zip padding and name casing

pub mod duration;
pub mod text;
pub mod timestamp;

// Re-export commonly used items
pub use duration::{DurationError, format_seconds, parse_duration};
pub use text::{ZIP_WIDTH, normalize_name, pad_zip};
pub use timestamp::{TimestampError, convert_timestamp, parse_wall_clock};
