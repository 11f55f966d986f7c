use chrono::NaiveDate;

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or(NaiveDate::MIN)
}

/// A counter shown verbatim; absent values render as a dash.
pub fn format_count(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Inline style for a tinted badge in the given hex colour.
pub fn badge_style(color: &str) -> String {
    format!("background-color: {}20; color: {}", color, color)
}
