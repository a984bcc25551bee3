//! Packed decimal date and time fields.
//!
//! Dates are stored as decimal digits `YYYMMDD` where the year counts from
//! 1900 (float-encoded fields) or as a plain `YYYYMMDD` integer
//! (cross-reference catalog). Times are stored as `HHMMSS` with seconds
//! ignored.

use chrono::{NaiveDate, NaiveTime};
use metastock_types::DecodeError;

/// Smallest packed date accepted; anything below is clamped to 1900-01-01.
const MIN_PACKED_DATE: i64 = 101;

/// Decodes a float-encoded `YYYMMDD` date with a 1900 year offset.
///
/// The value is truncated toward zero. Values below `101` (empty or
/// uninitialised records) are clamped to `101`, i.e. 1900-01-01.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidDate`] if the digits do not form a valid
/// calendar date.
pub fn float_to_date(value: f32) -> Result<NaiveDate, DecodeError> {
    let packed = (value as i64).max(MIN_PACKED_DATE);
    split_date(packed, 1900)
}

/// Decodes an integer-encoded `YYYYMMDD` date with no year offset or clamping.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidDate`] if the digits do not form a valid
/// calendar date.
pub fn int_to_date(value: u32) -> Result<NaiveDate, DecodeError> {
    split_date(i64::from(value), 0)
}

/// Decodes a float-encoded `HHMMSS` time. Seconds are discarded.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidTime`] if hour or minute are out of range.
pub fn float_to_time(value: f32) -> Result<NaiveTime, DecodeError> {
    let packed = value as i64;
    let hour = packed / 10_000;
    let minute = (packed % 10_000) / 100;
    u32::try_from(hour)
        .ok()
        .zip(u32::try_from(minute).ok())
        .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
        .ok_or(DecodeError::InvalidTime(packed))
}

fn split_date(packed: i64, year_offset: i64) -> Result<NaiveDate, DecodeError> {
    let year = year_offset + packed / 10_000;
    let month = (packed % 10_000) / 100;
    let day = packed % 100;
    i32::try_from(year)
        .ok()
        .zip(u32::try_from(month).ok())
        .zip(u32::try_from(day).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or(DecodeError::InvalidDate(packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_float_to_date() {
        assert_eq!(float_to_date(991_231.0).unwrap(), ymd(1999, 12, 31));
        assert_eq!(float_to_date(900_622.0).unwrap(), ymd(1990, 6, 22));
    }

    #[test]
    fn test_float_to_date_after_2000() {
        // Year digits continue past 99: 1240105 is 2024-01-05.
        assert_eq!(float_to_date(1_240_105.0).unwrap(), ymd(2024, 1, 5));
    }

    #[test]
    fn test_float_to_date_truncates() {
        assert_eq!(float_to_date(991_231.9).unwrap(), ymd(1999, 12, 31));
    }

    #[test]
    fn test_float_to_date_clamps_small_values() {
        let clamped = float_to_date(101.0).unwrap();
        assert_eq!(clamped, ymd(1900, 1, 1));
        for value in [0.0, 1.0, 100.0, 100.99, -5.0, f32::NAN] {
            assert_eq!(float_to_date(value).unwrap(), clamped);
        }
    }

    #[test]
    fn test_float_to_date_invalid() {
        assert_eq!(
            float_to_date(991_301.0),
            Err(DecodeError::InvalidDate(991_301))
        );
    }

    #[test]
    fn test_int_to_date() {
        assert_eq!(int_to_date(20_240_105).unwrap(), ymd(2024, 1, 5));
        assert_eq!(int_to_date(19_991_231).unwrap(), ymd(1999, 12, 31));
    }

    #[test]
    fn test_int_to_date_no_clamp() {
        assert_eq!(int_to_date(0), Err(DecodeError::InvalidDate(0)));
    }

    #[test]
    fn test_float_to_time() {
        assert_eq!(
            float_to_time(143_000.0).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            float_to_time(93_059.0).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_float_to_time_small_value() {
        // 1430 splits to hour 0, minute 14.
        assert_eq!(
            float_to_time(1430.0).unwrap(),
            NaiveTime::from_hms_opt(0, 14, 0).unwrap()
        );
    }

    #[test]
    fn test_float_to_time_invalid() {
        assert_eq!(
            float_to_time(250_000.0),
            Err(DecodeError::InvalidTime(250_000))
        );
    }
}
