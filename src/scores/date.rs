//! Calendar dates for score records

use std::time::{SystemTime, UNIX_EPOCH};

/// Convert days since 1970-01-01 to a civil `(year, month, day)`
///
/// Proleptic Gregorian calendar, valid for any day count.
#[must_use]
pub const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Format a date as `YYYY-MM-DD`
#[must_use]
pub fn format_date((year, month, day): (i64, u32, u32)) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Today's date (UTC) as `YYYY-MM-DD`
#[must_use]
pub fn today() -> String {
    format_date(civil_from_days((now_secs() / 86_400) as i64))
}

/// Format seconds since the epoch as `YYYY-MM-DD HH:MM:SS`
#[must_use]
pub fn format_timestamp(secs: u64) -> String {
    let time = secs % 86_400;
    format!(
        "{} {:02}:{:02}:{:02}",
        format_date(civil_from_days((secs / 86_400) as i64)),
        time / 3600,
        time % 3600 / 60,
        time % 60
    )
}

/// Current time (UTC) as `YYYY-MM-DD HH:MM:SS`
#[must_use]
pub fn timestamp() -> String {
    format_timestamp(now_secs())
}
