// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date/time helpers for property values such as `DTSTART` or `DTSTAMP`.

use jiff::Zoned;
use jiff::civil::DateTime;

/// Format a civil date-time as `YYYYMMDDTHHMMSS`.
///
/// There is no timezone marker; sub-second precision is dropped. The output
/// is only well formed for years 0 through 9999: a negative year is written
/// with a leading `-`, which breaks the fixed `YYYYMMDD` layout.
///
/// ```
/// use jiff::civil::date;
/// use vcal_object::format_date;
///
/// let dt = date(2024, 1, 1).at(9, 5, 3, 0);
/// assert_eq!(format_date(&dt), "20240101T090503");
/// ```
#[must_use]
pub fn format_date(dt: &DateTime) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

/// The current local time, formatted by [`format_date`].
pub(crate) fn now_stamp() -> String {
    format_date(&Zoned::now().datetime())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn format_date_zero_pads() {
        let dt = date(987, 2, 3).at(4, 5, 6, 999_000_000);
        assert_eq!(format_date(&dt), "09870203T040506");
    }

    #[test]
    fn format_date_supported_year_bounds() {
        assert_eq!(format_date(&date(0, 1, 1).at(0, 0, 0, 0)), "00000101T000000");
        assert_eq!(
            format_date(&date(9999, 12, 31).at(23, 59, 59, 0)),
            "99991231T235959"
        );
    }

    #[test]
    fn format_date_end_of_year() {
        let dt = date(2025, 12, 31).at(23, 59, 59, 0);
        assert_eq!(format_date(&dt), "20251231T235959");
    }

    #[test]
    fn now_stamp_shape() {
        let stamp = now_stamp();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes().get(8), Some(&b'T'));
        assert!(
            stamp
                .chars()
                .enumerate()
                .all(|(i, c)| i == 8 || c.is_ascii_digit())
        );
    }
}
