//! Error types for record normalization.

use csvnorm_model::Column;
use thiserror::Error;

use crate::normalization::{DurationError, TimestampError};

/// First rule that failed while normalizing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Timestamp does not match `M/D/YY h:mm:ss AM|PM`.
    #[error("cannot parse Timestamp {value:?}: {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: TimestampError,
    },

    /// A duration column does not match `H:M:S.ms`, or the sum overflowed.
    #[error("bad format for {column} {value:?}: {source}")]
    DurationParse {
        column: Column,
        value: String,
        #[source]
        source: DurationError,
    },
}

impl NormalizeError {
    /// Stable label for the error category, used as the diagnostic prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TimestampParse { .. } => "TimestampParseError",
            Self::DurationParse { .. } => "DurationParseError",
        }
    }

    /// Column whose rule failed.
    pub fn column(&self) -> Column {
        match self {
            Self::TimestampParse { .. } => Column::Timestamp,
            Self::DurationParse { column, .. } => *column,
        }
    }
}

/// Time zone data could not be loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The zone name is not in the time zone database.
    #[error("unknown time zone '{name}': {message}")]
    UnknownZone { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::DurationParse {
            column: Column::BarDuration,
            value: "nope".to_string(),
            source: DurationError::Components { found: 0 },
        };
        assert_eq!(
            err.to_string(),
            "bad format for BarDuration \"nope\": expected H:M:S.ms, found 0 of 4 components"
        );
        assert_eq!(err.kind(), "DurationParseError");
        assert_eq!(err.column(), Column::BarDuration);
    }

    #[test]
    fn test_timestamp_error_kind() {
        let err = NormalizeError::TimestampParse {
            value: "yesterday".to_string(),
            source: TimestampError::Layout,
        };
        assert_eq!(err.kind(), "TimestampParseError");
        assert_eq!(err.column(), Column::Timestamp);
        assert!(err.to_string().starts_with("cannot parse Timestamp \"yesterday\""));
    }
}
