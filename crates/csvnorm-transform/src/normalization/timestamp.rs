//! Wall-clock timestamp parsing and time zone conversion.
//!
//! Accepted layout is exactly `M/D/YY h:mm:ss AM|PM`:
//!
//! - month and day: one or two digits
//! - year: two digits (`69`..`99` are 19xx, `00`..`68` are 20xx)
//! - hour: one or two digits, `0`..`12`
//! - minute and second: two digits
//! - a single space, then an uppercase `AM` or `PM`
//!
//! No offset or trailing text is allowed. The wall time is read in the
//! source zone and rendered as RFC 3339 in the target zone.

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, TimeZone,
};
use chrono_tz::Tz;
use thiserror::Error;

use crate::zones::ZoneConfig;

/// Reason a timestamp could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The value does not have the `M/D/YY h:mm:ss AM|PM` shape.
    #[error("expected M/D/YY h:mm:ss AM|PM")]
    Layout,

    /// The marker after the time is not `AM` or `PM`.
    #[error("expected AM or PM marker")]
    Meridiem,

    /// Month, day and year do not form a calendar date.
    #[error("date out of range")]
    Date,

    /// Hour, minute or second is out of range.
    #[error("time out of range")]
    Time,

    /// The instant cannot be represented in the source zone.
    #[error("time cannot be placed in the source zone")]
    Zone,
}

/// Parse `M/D/YY h:mm:ss AM|PM` into a naive wall-clock time.
pub fn parse_wall_clock(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let mut parts = value.split(' ');
    let (Some(date), Some(time), Some(meridiem), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TimestampError::Layout);
    };

    let pm = match meridiem {
        "AM" => false,
        "PM" => true,
        _ => return Err(TimestampError::Meridiem),
    };

    let [month, day, year] = split_numbers(date, '/', [(1, 2), (1, 2), (2, 2)])?;
    let [hour, minute, second] = split_numbers(time, ':', [(1, 2), (2, 2), (2, 2)])?;

    let year = if year >= 69 { 1900 + year } else { 2000 + year };
    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(TimestampError::Date)?;

    if hour > 12 {
        return Err(TimestampError::Time);
    }
    let hour = match (hour, pm) {
        (12, false) => 0,
        (hour, true) if hour < 12 => hour + 12,
        (hour, _) => hour,
    };
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimestampError::Time)?;

    Ok(date.and_time(time))
}

/// Read `value` as wall-clock time in the source zone and render it as
/// RFC 3339 in the target zone, with seconds precision.
pub fn convert_timestamp(value: &str, zones: &ZoneConfig) -> Result<String, TimestampError> {
    let naive = parse_wall_clock(value)?;
    let instant = localize(zones.source, naive).ok_or(TimestampError::Zone)?;
    Ok(instant
        .with_timezone(&zones.target)
        .to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// Attach a zone to a wall-clock time.
///
/// Ambiguous times (clocks falling back) take the earlier instant. Times
/// skipped by clocks springing forward are read with the offset in effect
/// after the jump, so `2:30` on a spring-forward night is the same instant
/// as `1:30` standard time.
fn localize(zone: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    zone.from_local_datetime(&naive).earliest().or_else(|| {
        let before = naive.checked_sub_signed(TimeDelta::hours(1))?;
        zone.from_local_datetime(&before).earliest()
    })
}

/// Split `input` on `separator` into exactly `N` decimal numbers, each with a
/// digit count inside the given bounds.
fn split_numbers<const N: usize>(
    input: &str,
    separator: char,
    widths: [(usize, usize); N],
) -> Result<[u32; N], TimestampError> {
    let mut parts = input.split(separator);
    let mut numbers = [0u32; N];
    for (slot, (min, max)) in numbers.iter_mut().zip(widths) {
        let part = parts.next().ok_or(TimestampError::Layout)?;
        if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimestampError::Layout);
        }
        *slot = part.parse().map_err(|_| TimestampError::Layout)?;
    }
    if parts.next().is_some() {
        return Err(TimestampError::Layout);
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> ZoneConfig {
        ZoneConfig::new(chrono_tz::US::Pacific, chrono_tz::US::Eastern)
    }

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_wall_clock() {
        assert_eq!(
            parse_wall_clock("3/14/23 2:30:00 PM"),
            Ok(wall(2023, 3, 14, 14, 30, 0))
        );
        assert_eq!(
            parse_wall_clock("12/31/16 11:59:59 PM"),
            Ok(wall(2016, 12, 31, 23, 59, 59))
        );
        assert_eq!(
            parse_wall_clock("04/01/11 09:05:07 AM"),
            Ok(wall(2011, 4, 1, 9, 5, 7))
        );
    }

    #[test]
    fn test_twelve_hour_clock_edges() {
        assert_eq!(
            parse_wall_clock("3/12/14 12:00:00 AM"),
            Ok(wall(2014, 3, 12, 0, 0, 0))
        );
        assert_eq!(
            parse_wall_clock("3/12/14 12:00:00 PM"),
            Ok(wall(2014, 3, 12, 12, 0, 0))
        );
        assert_eq!(
            parse_wall_clock("3/12/14 0:15:00 AM"),
            Ok(wall(2014, 3, 12, 0, 15, 0))
        );
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(
            parse_wall_clock("1/1/69 1:00:00 AM"),
            Ok(wall(1969, 1, 1, 1, 0, 0))
        );
        assert_eq!(
            parse_wall_clock("1/1/68 1:00:00 AM"),
            Ok(wall(2068, 1, 1, 1, 0, 0))
        );
    }

    #[test]
    fn test_layout_errors() {
        for value in [
            "",
            "3/14/23",
            "3/14/23 2:30:00",
            "3/14/23 2:30 PM",
            "3/14/2023 2:30:00 PM",
            "3/14/23 2:3:00 PM",
            "3/14/23  2:30:00 PM",
            "3/14/23 2:30:00 PM -0700",
            "2023-03-14T14:30:00Z",
            "3/14/23 123:30:00 PM",
            "a/14/23 2:30:00 PM",
        ] {
            assert_eq!(
                parse_wall_clock(value),
                Err(TimestampError::Layout),
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_meridiem_errors() {
        assert_eq!(
            parse_wall_clock("3/14/23 2:30:00 pm"),
            Err(TimestampError::Meridiem)
        );
        assert_eq!(
            parse_wall_clock("3/14/23 2:30:00 XM"),
            Err(TimestampError::Meridiem)
        );
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            parse_wall_clock("13/1/23 1:00:00 AM"),
            Err(TimestampError::Date)
        );
        assert_eq!(
            parse_wall_clock("2/30/23 1:00:00 AM"),
            Err(TimestampError::Date)
        );
        assert_eq!(
            parse_wall_clock("2/3/23 13:00:00 PM"),
            Err(TimestampError::Time)
        );
        assert_eq!(
            parse_wall_clock("2/3/23 1:60:00 PM"),
            Err(TimestampError::Time)
        );
    }

    #[test]
    fn test_convert_daylight_time() {
        assert_eq!(
            convert_timestamp("3/14/23 2:30:00 PM", &zones()).unwrap(),
            "2023-03-14T17:30:00-04:00"
        );
    }

    #[test]
    fn test_convert_shifts_date_and_offset() {
        assert_eq!(
            convert_timestamp("4/1/11 11:00:00 AM", &zones()).unwrap(),
            "2011-04-01T14:00:00-04:00"
        );
        assert_eq!(
            convert_timestamp("1/1/17 10:00:00 PM", &zones()).unwrap(),
            "2017-01-02T01:00:00-05:00"
        );
    }

    #[test]
    fn test_convert_ambiguous_takes_earlier_instant() {
        // 1:30 AM happens twice on 2023-11-05 in the Pacific zone.
        assert_eq!(
            convert_timestamp("11/5/23 1:30:00 AM", &zones()).unwrap(),
            "2023-11-05T03:30:00-05:00"
        );
    }

    #[test]
    fn test_convert_spring_forward_gap() {
        // 2:30 AM does not exist on 2023-03-12 in the Pacific zone.
        assert_eq!(
            convert_timestamp("3/12/23 2:30:00 AM", &zones()).unwrap(),
            "2023-03-12T05:30:00-04:00"
        );
        assert_eq!(
            convert_timestamp("3/12/23 2:00:00 AM", &zones()).unwrap(),
            "2023-03-12T05:00:00-04:00"
        );
        assert_eq!(
            convert_timestamp("3/12/23 3:00:00 AM", &zones()).unwrap(),
            "2023-03-12T06:00:00-04:00"
        );
    }
}
