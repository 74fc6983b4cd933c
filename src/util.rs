// Display helpers shared by the components and the JS exports

use crate::model::DateLike;
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// What `Date.prototype.toLocaleString` renders for an unparseable date.
pub const INVALID_DATE: &str = "Invalid Date";

// es-ES with day/month 2-digit, numeric year, 24h hour:minute
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M";

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(target: "prediction_page", "{msg}");
}

/// Formats a date-like value for display in the local time zone.
pub fn format_date(input: &DateLike) -> String {
    format_date_in(input, &Local)
}

pub fn format_date_in<Tz: TimeZone>(input: &DateLike, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match input.resolve(tz) {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Renders a fraction as a percentage with one decimal, `0.1234` -> `12.3%`.
pub fn format_percent(fraction: f64) -> String {
    let value = fraction * 100.0;
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity%");
    }
    // -0.0 is not negative here, same as toFixed
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}%", to_fixed_1(value.abs()))
}

// toFixed(1) on a finite, non-negative value. Exact ties (x.25, x.75) round up
// where the std formatter would round to even.
fn to_fixed_1(value: f64) -> String {
    let quarters = value * 4.0;
    if value < 1e14 && quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (value * 10.0 + 0.5).floor() as u64;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{value:.1}")
}
