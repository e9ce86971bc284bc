use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::ReturnsError;

/**
Convert a NaiveDate (YYYY-MM-DD) to a NaiveDateTime at the beginning of that day (00:00:00).

## Arguments
* `date` - The NaiveDate to convert.

## Returns
The corresponding NaiveDateTime or a ReturnsError if the date is invalid.
 */
pub fn date_to_datetime(date: &NaiveDate) -> Result<NaiveDateTime, ReturnsError> {
    date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        ReturnsError::ConfigError(format!(
            "Failed to create naive datetime from date: {}",
            date
        ))
    })
}

/**
Parse a date or datetime string into a NaiveDateTime.

RFC 3339 strings (with a `T` or a space separator) are always accepted and keep their
wall-clock time; the offset is dropped, never applied. Otherwise each format is tried in
order, first as a full datetime and then as a plain date at midnight.

## Arguments
* `value` - The string to parse. Surrounding whitespace is ignored.
* `formats` - chrono format strings to try after RFC 3339.

## Returns
The parsed NaiveDateTime, or `None` if no format matches.
 */
pub fn parse_datetime<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for format in formats {
        let format = format.as_ref();
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            if let Ok(dt) = date_to_datetime(&date) {
                return Some(dt);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    const FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d", "%m/%d/%Y"];

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_date_to_datetime_valid() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 26).unwrap();
        let dt = date_to_datetime(&date).unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2023-10-26 00:00:00"
        );
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_datetime("2021-01-02", &FORMATS),
            Some(midnight(2021, 1, 2))
        );
    }

    #[test]
    fn test_parse_datetime_with_time() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 2)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        assert_eq!(
            parse_datetime("2021-01-02 15:30:00", &FORMATS),
            Some(expected)
        );
    }

    #[test]
    fn test_parse_offset_keeps_wall_clock() {
        assert_eq!(
            parse_datetime("2021-01-02T00:00:00+02:00", &FORMATS),
            Some(midnight(2021, 1, 2))
        );
        assert_eq!(
            parse_datetime("2021-01-02 00:00:00+09:00", &FORMATS),
            Some(midnight(2021, 1, 2))
        );
        assert_eq!(
            parse_datetime("2021-01-01T23:30:00-05:00", &FORMATS),
            NaiveDate::from_ymd_opt(2021, 1, 1)
                .unwrap()
                .and_hms_opt(23, 30, 0)
        );
    }

    #[test]
    fn test_parse_default_formats_accept_csv_timestamps() {
        let formats = CalculatorConfig::default().date_formats;
        let nine_thirty = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2021-01-01 09:30", &formats), Some(nine_thirty));
        assert_eq!(parse_datetime("2021-01-01T09:30", &formats), Some(nine_thirty));
        assert_eq!(
            parse_datetime("2021-01-01 00:00:00.000", &formats),
            Some(midnight(2021, 1, 1))
        );
        let with_millis = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_milli_opt(9, 30, 15, 250)
            .unwrap();
        assert_eq!(
            parse_datetime("2021-01-01T09:30:15.250", &formats),
            Some(with_millis)
        );
        assert_eq!(
            parse_datetime("2021-01-01 09:30:15", &formats),
            NaiveDate::from_ymd_opt(2021, 1, 1)
                .unwrap()
                .and_hms_opt(9, 30, 15)
        );
    }

    #[test]
    fn test_parse_us_format() {
        assert_eq!(
            parse_datetime(" 03/15/2020 ", &FORMATS),
            Some(midnight(2020, 3, 15))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_datetime("not-a-date", &FORMATS), None);
        assert_eq!(parse_datetime("", &FORMATS), None);
        assert_eq!(parse_datetime("2021-13-40", &FORMATS), None);
    }

    #[test]
    fn test_parse_with_no_formats_still_accepts_rfc3339() {
        let no_formats: [&str; 0] = [];
        assert!(parse_datetime("2021-01-01T00:00:00Z", &no_formats).is_some());
        assert_eq!(parse_datetime("2021-01-01", &no_formats), None);
    }
}
