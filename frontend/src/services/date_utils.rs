use chrono::{DateTime, NaiveDate, Utc};
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_else(|| now_utc().date_naive())
}

pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_millis() as i64).unwrap_or_default()
}

/// Milliseconds since the epoch; used as the base for generated ids
pub fn now_millis() -> u64 {
    Date::now().max(0.0) as u64
}

/// Current viewport width in CSS pixels, 0 when unknown
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}
