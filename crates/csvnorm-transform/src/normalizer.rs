//! The record normalizer.

use csvnorm_model::{Column, Record};
use tracing::trace;

use crate::error::NormalizeError;
use crate::normalization::{
    DurationError, convert_timestamp, format_seconds, normalize_name, pad_zip, parse_duration,
};
use crate::zones::ZoneConfig;

/// Applies the normalization rules to records, in place.
#[derive(Debug, Clone)]
pub struct Normalizer {
    zones: ZoneConfig,
}

impl Normalizer {
    pub fn new(zones: ZoneConfig) -> Self {
        Self { zones }
    }

    /// Normalize `record` in place.
    ///
    /// Rules run in a fixed order: Timestamp, FooDuration,
    /// BarDuration, TotalDuration, Zip, FullName. Each field is rewritten as
    /// soon as its rule succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first rule that failed. The record then holds every field
    /// rewritten before that rule and must be discarded, not emitted.
    pub fn normalize(&self, record: &mut Record) -> Result<(), NormalizeError> {
        record.timestamp = convert_timestamp(&record.timestamp, &self.zones).map_err(|source| {
            NormalizeError::TimestampParse {
                value: record.timestamp.clone(),
                source,
            }
        })?;

        let foo = parse_duration(&record.foo_duration).map_err(|source| {
            NormalizeError::DurationParse {
                column: Column::FooDuration,
                value: record.foo_duration.clone(),
                source,
            }
        })?;
        record.foo_duration = format_seconds(foo);

        let bar = parse_duration(&record.bar_duration).map_err(|source| {
            NormalizeError::DurationParse {
                column: Column::BarDuration,
                value: record.bar_duration.clone(),
                source,
            }
        })?;
        record.bar_duration = format_seconds(bar);

        let total = foo
            .checked_add(&bar)
            .ok_or_else(|| NormalizeError::DurationParse {
                column: Column::TotalDuration,
                value: format!("{} + {}", record.foo_duration, record.bar_duration),
                source: DurationError::OutOfRange,
            })?;
        record.total_duration = format_seconds(total);

        record.zip = pad_zip(&record.zip);
        record.full_name = normalize_name(&record.full_name);

        trace!(
            timestamp = %record.timestamp,
            total_duration = %record.total_duration,
            "normalized record"
        );
        Ok(())
    }
}
