//! Calendar-date helpers. Every date in the model travels as an ISO string;
//! these functions are the only place that string is interpreted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{CrmError, CrmResult};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse an ISO date, dropping any time component.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps.
pub fn parse_calendar_date(value: &str) -> CrmResult<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, ISO_DATE) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(CrmError::InvalidDate(value.to_string()))
}

/// Lenient variant used by sorting and filtering: unparseable dates are
/// treated as missing.
pub fn calendar_date(value: &str) -> Option<NaiveDate> {
    match parse_calendar_date(value) {
        Ok(date) => Some(date),
        Err(err) => {
            log::debug!("{}", err);
            None
        }
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}
