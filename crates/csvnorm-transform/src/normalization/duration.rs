//! Duration scanning and decimal-seconds formatting.
//!
//! Input format: `H:M:S.ms`, where every component is a plain (optionally
//! signed) integer. Components are not range-checked, so `1:90:00.000` is one
//! hour plus ninety minutes, and `0:00:01.5` is one second plus five
//! milliseconds. Anything after the fourth component is ignored.
//!
//! Output format: seconds with six fractional digits, e.g. `3723.500000`.

use chrono::TimeDelta;
use thiserror::Error;

/// Number of integer components in a duration.
const COMPONENTS: usize = 4;

/// Reason a duration could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Fewer than four integer components could be scanned.
    #[error("expected H:M:S.ms, found {found} of 4 components")]
    Components { found: usize },

    /// The components do not fit in a duration.
    #[error("duration out of range")]
    OutOfRange,
}

/// Parse `H:M:S.ms` into an exact duration.
pub fn parse_duration(value: &str) -> Result<TimeDelta, DurationError> {
    let [hours, minutes, seconds, millis] = scan_components(value)?;

    TimeDelta::try_hours(hours)
        .zip(TimeDelta::try_minutes(minutes))
        .zip(TimeDelta::try_seconds(seconds))
        .zip(TimeDelta::try_milliseconds(millis))
        .and_then(|(((h, m), s), ms)| h.checked_add(&m)?.checked_add(&s)?.checked_add(&ms))
        .ok_or(DurationError::OutOfRange)
}

/// Render a duration as decimal seconds with six fractional digits.
pub fn format_seconds(duration: TimeDelta) -> String {
    // subsec_nanos carries the same sign as num_seconds.
    let seconds = duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9;
    format!("{seconds:.6}")
}

/// Scan `int:int:int.int`, stopping at the first mismatch.
fn scan_components(value: &str) -> Result<[i64; COMPONENTS], DurationError> {
    const SEPARATORS: [char; COMPONENTS - 1] = [':', ':', '.'];

    let mut rest = value;
    let mut components = [0i64; COMPONENTS];
    for (index, slot) in components.iter_mut().enumerate() {
        if index > 0 {
            match rest.strip_prefix(SEPARATORS[index - 1]) {
                Some(tail) => rest = tail,
                None => return Err(DurationError::Components { found: index }),
            }
        }
        let Some((number, tail)) = scan_integer(rest) else {
            return Err(DurationError::Components { found: index });
        };
        *slot = number;
        rest = tail;
    }
    Ok(components)
}

/// Scan one signed decimal integer, skipping leading blanks.
fn scan_integer(input: &str) -> Option<(i64, &str)> {
    let input = input.trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let end = input.len() - unsigned.len() + digits;
    let number = input[..end].parse().ok()?;
    Some((number, &input[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(value: &str) -> String {
        format_seconds(parse_duration(value).unwrap())
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(seconds("01:02:03.500"), "3723.500000");
        assert_eq!(seconds("1:23:32.123"), "5012.123000");
        assert_eq!(seconds("0:00:00.000"), "0.000000");
    }

    #[test]
    fn test_components_are_not_range_checked() {
        assert_eq!(seconds("1:90:00.000"), "9000.000000");
        assert_eq!(seconds("0:00:75.1500"), "76.500000");
    }

    #[test]
    fn test_milliseconds_are_literal() {
        assert_eq!(seconds("0:00:01.5"), "1.005000");
    }

    #[test]
    fn test_signed_and_padded_components() {
        assert_eq!(seconds("-1:00:00.000"), "-3600.000000");
        assert_eq!(seconds(" 1: 2: 3. 4"), "3723.004000");
        assert_eq!(seconds("+0:00:01.000"), "1.000000");
    }

    #[test]
    fn test_negative_fraction_keeps_sign() {
        assert_eq!(seconds("0:00:00.-250"), "-0.250000");
    }

    #[test]
    fn test_trailing_input_is_ignored() {
        assert_eq!(seconds("0:01:00.000 extra"), "60.000000");
    }

    #[test]
    fn test_missing_components() {
        assert_eq!(
            parse_duration(""),
            Err(DurationError::Components { found: 0 })
        );
        assert_eq!(
            parse_duration("1:23:32"),
            Err(DurationError::Components { found: 3 })
        );
        assert_eq!(
            parse_duration("1:23"),
            Err(DurationError::Components { found: 2 })
        );
        assert_eq!(
            parse_duration("zzsasdfa"),
            Err(DurationError::Components { found: 0 })
        );
        assert_eq!(
            parse_duration("1:2:3,4"),
            Err(DurationError::Components { found: 3 })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_duration("9223372036854775807:00:00.000"),
            Err(DurationError::OutOfRange)
        );
    }

    #[test]
    fn test_integer_overflow_counts_as_missing_component() {
        assert_eq!(
            parse_duration("99999999999999999999:00:00.000"),
            Err(DurationError::Components { found: 0 })
        );
    }
}
