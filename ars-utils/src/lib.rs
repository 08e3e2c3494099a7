//! Shared utility functions for ARS crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Formats accepted for sample dates stored as text.
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a sample date written as text.
    ///
    /// Accepts plain dates ("2015-03-09", "09/03/2015", "2015/03/09") and
    /// timestamps ("2015-03-09 10:30:00", "2015-03-09T10:30:00"), in which case
    /// the time of day is dropped. Surrounding whitespace is ignored.
    pub fn parse_sample_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                return Ok(d);
            }
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt.date());
            }
        }
        anyhow::bail!("unrecognised date: '{}'", s)
    }

    /// Convert a count of days since 1970-01-01 into a date.
    ///
    /// Returns `None` when the day count falls outside chrono's range.
    pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(1970, 1, 1)?
            .checked_add_signed(chrono::Duration::days(days as i64))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            assert_eq!(parse_sample_date(&formatted).unwrap(), date);
        }

        #[test]
        fn test_parse_sample_date_formats() {
            let expected = NaiveDate::from_ymd_opt(2015, 3, 9).unwrap();
            assert_eq!(parse_sample_date("2015-03-09").unwrap(), expected);
            assert_eq!(parse_sample_date(" 09/03/2015 ").unwrap(), expected);
            assert_eq!(parse_sample_date("2015/03/09").unwrap(), expected);
            assert_eq!(parse_sample_date("2015-03-09 10:30:00").unwrap(), expected);
            assert_eq!(parse_sample_date("2015-03-09T10:30:00").unwrap(), expected);
        }

        #[test]
        fn test_parse_sample_date_rejects_garbage() {
            assert!(parse_sample_date("").is_err());
            assert!(parse_sample_date("sin fecha").is_err());
            assert!(parse_sample_date("2015-13-40").is_err());
        }

        #[test]
        fn test_date_from_epoch_days() {
            assert_eq!(
                date_from_epoch_days(0),
                NaiveDate::from_ymd_opt(1970, 1, 1)
            );
            // 2015-03-09 is 16503 days after the epoch
            assert_eq!(
                date_from_epoch_days(16503),
                NaiveDate::from_ymd_opt(2015, 3, 9)
            );
            assert_eq!(
                date_from_epoch_days(-1),
                NaiveDate::from_ymd_opt(1969, 12, 31)
            );
        }
    }
}

/// Number formatting helpers
pub mod numbers {
    /// Convert a ratio in `[0, 1]` to a percentage.
    pub fn to_percent(ratio: f64) -> f64 {
        ratio * 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_to_percent() {
            assert_eq!(to_percent(0.5), 50.0);
            assert_eq!(to_percent(0.0), 0.0);
            assert_eq!(to_percent(1.0), 100.0);
        }
    }
}
