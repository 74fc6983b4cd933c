//! Data models for the prediction page.
//! Page data keys follow the JSON the backend embeds in the page, so the
//! Spanish names only appear in the serde attributes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Anything the page hands us as a date: ISO text, epoch millis or a parsed instant.
#[derive(Clone, Debug, PartialEq)]
pub enum DateLike {
    Text(String),
    Millis(f64),
    Instant(DateTime<Utc>),
}

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// Minute-precision forms rfc3339 does not accept; a trailing Z is rewritten
// to +00:00 before these are tried.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

impl DateLike {
    /// Resolves the input to an instant. Text without an offset is read as wall
    /// clock time in `tz`; date-only text (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) is
    /// midnight UTC. Timestamps past chrono's year 262143 do not resolve.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        match self {
            DateLike::Text(raw) => parse_text(raw.trim(), tz),
            DateLike::Millis(ms) => {
                if !ms.is_finite() {
                    return None;
                }
                DateTime::from_timestamp_millis(ms.trunc() as i64)
            }
            DateLike::Instant(instant) => Some(*instant),
        }
    }
}

fn parse_text<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    let zulu = match raw.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => raw.to_string(),
    };
    for fmt in OFFSET_DATE_TIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(&zulu, fmt) {
            return Some(instant.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return local_to_utc(tz, &naive);
        }
    }
    parse_date_only(raw).map(|midnight| midnight.and_utc())
}

// A wall-clock time inside a DST gap is moved forward by an hour, the way
// browsers do.
fn local_to_utc<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(naive)
        .earliest()
        .or_else(|| {
            let later = naive.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&later).earliest()
        })
        .map(|local| local.with_timezone(&Utc))
}

// YYYY, YYYY-MM or YYYY-MM-DD; missing parts default to the first.
fn parse_date_only(raw: &str) -> Option<NaiveDateTime> {
    let mut parts = raw.split('-');
    let year = parts.next().filter(|p| is_digits(p, 4))?.parse().ok()?;
    let month = match parts.next() {
        Some(p) if is_digits(p, 2) => p.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    let day = match parts.next() {
        Some(p) if is_digits(p, 2) => p.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}

impl From<&str> for DateLike {
    fn from(raw: &str) -> Self {
        DateLike::Text(raw.to_string())
    }
}

impl From<String> for DateLike {
    fn from(raw: String) -> Self {
        DateLike::Text(raw)
    }
}

impl From<f64> for DateLike {
    fn from(ms: f64) -> Self {
        DateLike::Millis(ms)
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(instant: DateTime<Utc>) -> Self {
        DateLike::Instant(instant)
    }
}

/// User-tunable page behaviour, persisted in localStorage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Selector for the elements the entry animation reveals.
    pub card_selector: String,
    /// Delay between consecutive card reveals.
    pub stagger_ms: i32,
    pub auto_refresh: bool,
    pub refresh_interval_secs: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            card_selector: ".card".to_string(),
            stagger_ms: 100,
            auto_refresh: false,
            refresh_interval_secs: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentNumber {
    pub id: u64,
    #[serde(rename = "numero")]
    pub number: i64,
    /// ISO timestamp of the extraction.
    #[serde(rename = "fecha")]
    pub extracted_at: String,
    #[serde(rename = "fuente", default)]
    pub source: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "numero")]
    pub number: i64,
    /// Fraction in [0, 1].
    #[serde(rename = "confianza")]
    pub confidence: f64,
    #[serde(rename = "metodo", default)]
    pub method: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(rename = "total_predicciones")]
    pub total: u32,
    #[serde(rename = "acertadas")]
    pub hits: u32,
    /// hits / total as a fraction.
    pub precision: f64,
    #[serde(rename = "periodo_dias")]
    pub period_days: u32,
}

/// Everything the server embeds for the client to render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    #[serde(rename = "numeros")]
    pub recent: Vec<RecentNumber>,
    #[serde(rename = "predicciones")]
    pub predictions: Vec<Prediction>,
    #[serde(rename = "evaluacion")]
    pub evaluation: Option<Evaluation>,
}

impl PageData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}
