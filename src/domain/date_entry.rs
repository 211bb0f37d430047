use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Weekday names, indexed by days since Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a stored calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp. Timestamps
/// are read on the local calendar, since that is the calendar the date was
/// taken from when it was written.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Local).date_naive())
}

/// One labelled day of a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    #[serde(rename = "dia")]
    offset: i32,
    #[serde(rename = "fecha", deserialize_with = "deserialize_calendar_date")]
    date: NaiveDate,
    #[serde(rename = "fechaFormateada")]
    formatted_date: String,
    #[serde(rename = "diaSemana")]
    weekday_name: String,
}

impl DateEntry {
    pub fn new(offset: i32, date: NaiveDate) -> Self {
        Self {
            offset,
            date,
            formatted_date: format_date(date),
            weekday_name: weekday_name(date).to_string(),
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn weekday_name(&self) -> &str {
        &self.weekday_name
    }

    /// Label shown in the first column, e.g. `Day -3`.
    pub fn day_label(&self) -> String {
        format!("Day {}", self.offset)
    }

    pub fn is_day_one(&self) -> bool {
        self.offset == 1
    }

    pub fn is_before_start(&self) -> bool {
        self.offset < 0
    }
}

impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day_label(),
            self.formatted_date,
            self.weekday_name
        )
    }
}

fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date `{raw}`")))
}
