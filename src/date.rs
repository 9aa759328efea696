use chrono::NaiveDate;

use crate::error::Error;

const INVALID_DATE: &str = "Invalid date format. Use YYYYMMDD.";

/// Turns an 8-digit `YYYYMMDD` earth date into the `YYYY-MM-DD` form the API expects.
pub fn normalize_earth_date(raw: &str) -> Result<String, Error> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDate(INVALID_DATE.to_string()));
    }

    let year = raw[0..4].parse::<i32>().ok();
    let month = raw[4..6].parse::<u32>().ok();
    let day = raw[6..8].parse::<u32>().ok();

    match (year, month, day) {
        (Some(year), Some(month), Some(day)) if year > 0 => NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .ok_or_else(|| Error::InvalidDate(INVALID_DATE.to_string())),
        _ => Err(Error::InvalidDate(INVALID_DATE.to_string())),
    }
}
