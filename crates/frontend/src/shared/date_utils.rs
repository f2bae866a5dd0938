/// Utilities for date formatting
///
/// Dates are stored as ISO `YYYY-MM-DD`. Pages show them in the viewer's
/// locale; tables and logs use the plain ISO text.
use chrono::{Datelike, NaiveDate};

/// Locale used when the browser does not report one
const FALLBACK_LOCALE: &str = "en-US";

fn locale_or_fallback(language: Option<String>) -> String {
    language
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Browser locale, e.g. "de-DE"
pub fn viewer_locale() -> String {
    locale_or_fallback(web_sys::window().and_then(|w| w.navigator().language()))
}

/// Format a date in the viewer's locale, e.g. "3/15/2024" or "15.3.2024"
pub fn format_date_locale(date: NaiveDate) -> String {
    // Local midnight, so the calendar day does not shift with the timezone
    let js_date = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js_date
        .to_locale_date_string(&viewer_locale(), &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_fallback() {
        assert_eq!(locale_or_fallback(Some("de-DE".to_string())), "de-DE");
        assert_eq!(locale_or_fallback(Some("  ".to_string())), "en-US");
        assert_eq!(locale_or_fallback(None), "en-US");
    }
}
