//! Date helpers for order forms and tables.

use chrono::NaiveDate;

/// Table format of a date, e.g. "Jan 6, 2003"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Same as [`format_date`], "N/A" when absent
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "N/A".to_string())
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    date_from_clock(now.get_full_year() as i32, now.get_month(), now.get_date())
}

/// Builds a date from JS clock parts (`month` is zero-based)
fn date_from_clock(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, day).unwrap_or_else(|| {
        let fallback = NaiveDate::default();
        log::warn!(
            "browser clock gave invalid date {}-{}-{}, using {}",
            year,
            month + 1,
            day,
            fallback
        );
        fallback
    })
}
