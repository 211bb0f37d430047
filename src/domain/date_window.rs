use crate::domain::{DateEntry, DateSetError};
use chrono::{Duration, NaiveDate};

/// First day number of the window.
pub const FIRST_OFFSET: i32 = -10;
/// Last day number of the window.
pub const LAST_OFFSET: i32 = 32;
/// Number of entries in every window.
pub const WINDOW_LEN: usize = (LAST_OFFSET - FIRST_OFFSET + 1) as usize;

/// Days between the anchor and the entry tagged `offset`.
///
/// Day 1 is the anchor itself, so entry `offset` lands `offset - 1` days away.
fn days_from_anchor(offset: i32) -> Duration {
    Duration::days(i64::from(offset - 1))
}

/// Computes the day -10 to day 32 window around `anchor`.
///
/// Returns `None` if the window leaves the representable calendar range.
/// Anchors obtained from [`parse_anchor`] never do.
pub fn compute_window(anchor: NaiveDate) -> Option<Vec<DateEntry>> {
    (FIRST_OFFSET..=LAST_OFFSET)
        .map(|offset| {
            anchor
                .checked_add_signed(days_from_anchor(offset))
                .map(|date| DateEntry::new(offset, date))
        })
        .collect()
}

/// Reads a day 1 date in `YYYY-MM-DD` form.
pub fn parse_anchor(raw: &str) -> Result<NaiveDate, DateSetError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DateSetError::MissingAnchor);
    }

    let invalid = || DateSetError::InvalidAnchor {
        raw: raw.to_string(),
    };
    let anchor = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;

    let fits = anchor
        .checked_add_signed(days_from_anchor(FIRST_OFFSET))
        .and(anchor.checked_add_signed(days_from_anchor(LAST_OFFSET)))
        .is_some();
    if !fits {
        return Err(invalid());
    }

    Ok(anchor)
}

/// A calculated (or reloaded) window together with the day 1 input it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    anchor_raw: String,
    entries: Vec<DateEntry>,
}

impl DateWindow {
    pub fn calculate(raw: &str) -> Result<Self, DateSetError> {
        let anchor = parse_anchor(raw)?;
        let anchor_raw = raw.trim().to_string();
        let entries = compute_window(anchor).ok_or_else(|| DateSetError::InvalidAnchor {
            raw: anchor_raw.clone(),
        })?;

        Ok(Self { anchor_raw, entries })
    }

    pub fn from_parts(anchor_raw: impl Into<String>, entries: Vec<DateEntry>) -> Self {
        Self {
            anchor_raw: anchor_raw.into(),
            entries,
        }
    }

    pub fn anchor_raw(&self) -> &str {
        &self.anchor_raw
    }

    pub fn entries(&self) -> &[DateEntry] {
        &self.entries
    }

    pub fn day_one(&self) -> Option<&DateEntry> {
        self.entries.iter().find(|entry| entry.is_day_one())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
