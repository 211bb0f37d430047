use crate::domain::{DateEntry, DateSetError, DateWindow, format_date, parse_calendar_date};
use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Storage key holding the whole collection of saved date sets.
pub const STORAGE_KEY: &str = "fechasEdiciones";

/// ISO-8601 with milliseconds and a `Z` suffix, the shape every stored timestamp uses.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A saved snapshot of a calculated window.
///
/// `anchor_raw` and `entries` are optional because stored records written by
/// older versions may lack them. Such records can still be listed and deleted,
/// but not loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDateSet {
    pub id: String,
    #[serde(rename = "dia1", default, skip_serializing_if = "Option::is_none")]
    pub anchor_raw: Option<String>,
    #[serde(rename = "fechaGuardado")]
    pub saved_at: String,
    #[serde(rename = "fechas", default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<StoredDates>,
}

/// The `fechas` of a stored record.
///
/// Dates this version cannot read are kept verbatim, so rewriting the
/// collection never loses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredDates {
    Dates(Vec<DateEntry>),
    Unreadable(serde_json::Value),
}

impl SavedDateSet {
    /// Snapshots `window`; the id is the day 1 input, so saving the same day 1
    /// again replaces the earlier snapshot.
    pub fn snapshot(window: &DateWindow, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: window.anchor_raw().to_string(),
            anchor_raw: Some(window.anchor_raw().to_string()),
            saved_at: timestamp(saved_at),
            entries: Some(StoredDates::Dates(window.entries().to_vec())),
        }
    }

    pub fn saved_at_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.saved_at).ok()
    }

    /// The stored dates, if present and readable.
    pub fn dates(&self) -> Option<&[DateEntry]> {
        match &self.entries {
            Some(StoredDates::Dates(entries)) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// Restores the stored window exactly as it was saved.
    pub fn to_window(&self) -> Result<DateWindow, DateSetError> {
        match (self.anchor_raw.as_deref(), self.dates()) {
            (Some(anchor_raw), Some(entries)) if !anchor_raw.is_empty() => {
                Ok(DateWindow::from_parts(anchor_raw, entries.to_vec()))
            }
            _ => Err(DateSetError::IncompleteRecord {
                id: self.id.clone(),
            }),
        }
    }

    /// Picker label, e.g. `Day 1: 15/03/2024 (saved: 16/03/2024 09:30)`.
    pub fn display_label(&self) -> String {
        let day_one = match self.anchor_raw.as_deref() {
            Some(raw) => parse_calendar_date(raw)
                .map(format_date)
                .unwrap_or_else(|| raw.to_string()),
            None => "?".to_string(),
        };

        let saved = self
            .saved_at_time()
            .map(|ts| ts.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        format!("Day 1: {day_one} (saved: {saved})")
    }
}

/// A record as found in storage, before normalisation.
///
/// Text fields of any other JSON type read as absent.
#[derive(Debug, Deserialize)]
pub struct StoredRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    dia1: Option<String>,
    #[serde(rename = "fechaGuardado", default, deserialize_with = "lenient_text")]
    saved_at: Option<String>,
    /// Timestamp field of the single-record format.
    #[serde(rename = "fechaCalculada", default, deserialize_with = "lenient_text")]
    calculated_at: Option<String>,
    #[serde(default)]
    fechas: Option<StoredDates>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl StoredRecord {
    fn into_current(self) -> Option<SavedDateSet> {
        let Some(id) = non_empty(self.id).or_else(|| non_empty(self.dia1.clone())) else {
            log::warn!("Dropping stored date set with neither an id nor a day 1 date");
            return None;
        };

        if matches!(self.fechas, Some(StoredDates::Unreadable(_))) {
            log::warn!("Saved date set {id} has dates that cannot be read");
        }

        Some(SavedDateSet {
            id,
            anchor_raw: self.dia1,
            saved_at: non_empty(self.saved_at).unwrap_or_default(),
            entries: self.fechas,
        })
    }

    fn into_legacy(self, now: DateTime<Utc>) -> Option<SavedDateSet> {
        let anchor_raw = non_empty(self.dia1)?;

        Some(SavedDateSet {
            id: non_empty(self.id).unwrap_or_else(|| anchor_raw.clone()),
            saved_at: non_empty(self.saved_at)
                .or_else(|| non_empty(self.calculated_at))
                .unwrap_or_else(|| timestamp(now)),
            anchor_raw: Some(anchor_raw),
            entries: self.fechas,
        })
    }
}

/// The shapes the stored collection can take.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredBlob {
    /// An array of records, read one element at a time.
    Current(Vec<serde_json::Value>),
    /// A single record, written before several sets could be saved.
    Legacy(StoredRecord),
    /// Any other JSON value; holds no usable records.
    Other(serde_json::Value),
}

impl StoredBlob {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Normalises to current records. A legacy record without a timestamp is
    /// stamped with `now`.
    pub fn into_sets(self, now: DateTime<Utc>) -> Vec<SavedDateSet> {
        match self {
            StoredBlob::Current(records) => records
                .into_iter()
                .filter_map(|value| match serde_json::from_value::<StoredRecord>(value) {
                    Ok(record) => record.into_current(),
                    Err(e) => {
                        log::warn!("Dropping stored date set that is not a record: {e}");
                        None
                    }
                })
                .collect(),
            StoredBlob::Legacy(record) => {
                let sets: Vec<SavedDateSet> = record.into_legacy(now).into_iter().collect();
                if !sets.is_empty() {
                    log::info!("Upgraded single-record storage format in memory");
                }
                sets
            }
            StoredBlob::Other(value) => {
                log::warn!("Ignoring stored value that holds no date sets: {value}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
    }

    fn parse(raw: &str) -> Vec<SavedDateSet> {
        StoredBlob::parse(raw).unwrap().into_sets(now())
    }

    #[test]
    fn test_snapshot_uses_day_one_input_as_id() {
        let window = DateWindow::calculate("2024-03-15").unwrap();
        let set = SavedDateSet::snapshot(&window, now());

        assert_eq!(set.id, "2024-03-15");
        assert_eq!(set.anchor_raw.as_deref(), Some("2024-03-15"));
        assert_eq!(set.saved_at, "2024-05-01T08:30:00.000Z");
        assert_eq!(set.dates().map(|dates| dates.len()), Some(43));
        assert_eq!(set.to_window().unwrap(), window);
    }

    #[test]
    fn test_serializes_with_stored_field_names() {
        let window = DateWindow::calculate("2024-03-15").unwrap();
        let value = serde_json::to_value(SavedDateSet::snapshot(&window, now())).unwrap();

        assert_eq!(value["id"], "2024-03-15");
        assert_eq!(value["dia1"], "2024-03-15");
        assert_eq!(value["fechaGuardado"], "2024-05-01T08:30:00.000Z");
        assert_eq!(value["fechas"].as_array().unwrap().len(), 43);
        assert_eq!(value["fechas"][11]["diaSemana"], "Friday");
    }

    #[test]
    fn test_current_array_is_read_as_is() {
        let sets = parse(
            r#"[{"id":"2024-03-15","dia1":"2024-03-15","fechaGuardado":"2024-04-01T10:00:00.000Z","fechas":[]}]"#,
        );

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, "2024-03-15");
        assert_eq!(sets[0].entries, Some(StoredDates::Dates(Vec::new())));
    }

    #[test]
    fn test_array_record_without_id_falls_back_to_day_one() {
        let sets = parse(r#"[{"dia1":"2024-03-15","fechaGuardado":"2024-04-01T10:00:00.000Z"}]"#);
        assert_eq!(sets[0].id, "2024-03-15");

        let sets = parse(r#"[{"fechaGuardado":"2024-04-01T10:00:00.000Z"}]"#);
        assert!(sets.is_empty());
    }

    #[test]
    fn test_unreadable_dates_keep_the_record() {
        let sets = parse(
            r#"[{"id":"2024-03-15","dia1":"2024-03-15","fechaGuardado":"2024-04-01T10:00:00.000Z",
                 "fechas":[{"dia":1,"fecha":null,"fechaFormateada":"","diaSemana":""}]},
                {"id":"2024-03-22","dia1":"2024-03-22","fechaGuardado":"2024-04-02T10:00:00.000Z","fechas":[]}]"#,
        );

        assert_eq!(sets.len(), 2);
        assert!(matches!(sets[0].entries, Some(StoredDates::Unreadable(_))));
        assert_eq!(sets[0].dates(), None);
        assert_eq!(
            sets[0].to_window(),
            Err(DateSetError::IncompleteRecord {
                id: "2024-03-15".to_string()
            })
        );
        assert!(sets[1].to_window().is_ok());
    }

    #[test]
    fn test_unreadable_dates_are_rewritten_verbatim() {
        let stored = serde_json::json!([{
            "id": "x",
            "fechaGuardado": "2024-04-01T10:00:00.000Z",
            "fechas": [{"dia": "one", "fecha": "someday"}]
        }]);
        let sets = parse(&stored.to_string());

        assert_eq!(serde_json::to_value(&sets).unwrap(), stored);
    }

    #[test]
    fn test_elements_that_are_not_records_are_dropped_alone() {
        let sets = parse(
            r#"[42, "junk", {"id":7,"dia1":"2024-03-15","fechaGuardado":null}, {"id":"b","dia1":"2024-03-22"}]"#,
        );

        let ids: Vec<&str> = sets.iter().map(|set| set.id.as_str()).collect();
        assert_eq!(ids, vec!["2024-03-15", "b"]);
        assert_eq!(sets[0].saved_at, "");
    }

    #[test]
    fn test_legacy_object_becomes_one_record() {
        let sets = parse(r#"{"dia1":"2024-03-15","fechaCalculada":"2024-03-20T12:00:00.000Z","fechas":[]}"#);

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, "2024-03-15");
        assert_eq!(sets[0].saved_at, "2024-03-20T12:00:00.000Z");
        assert!(sets[0].to_window().is_ok());
    }

    #[test]
    fn test_legacy_object_keeps_explicit_fields() {
        let sets = parse(
            r#"{"id":"first","dia1":"2024-03-15","fechaGuardado":"2024-03-21T12:00:00.000Z","fechaCalculada":"2024-03-20T12:00:00.000Z"}"#,
        );

        assert_eq!(sets[0].id, "first");
        assert_eq!(sets[0].saved_at, "2024-03-21T12:00:00.000Z");
        assert!(sets[0].to_window().is_err());
    }

    #[test]
    fn test_legacy_object_without_timestamp_is_stamped_now() {
        let sets = parse(r#"{"dia1":"2024-03-15"}"#);
        assert_eq!(sets[0].saved_at, timestamp(now()));
    }

    #[test]
    fn test_values_without_records_are_empty() {
        assert!(parse(r#"{"fechas":[]}"#).is_empty());
        assert!(parse("null").is_empty());
        assert!(parse("42").is_empty());
        assert!(parse(r#""2024-03-15""#).is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(StoredBlob::parse("{not json").is_err());
    }

    #[test]
    fn test_absent_fields_stay_absent_when_rewritten() {
        let sets = parse(r#"[{"id":"x","fechaGuardado":"2024-04-01T10:00:00.000Z"}]"#);
        let json = serde_json::to_string(&sets).unwrap();

        assert_eq!(json, r#"[{"id":"x","fechaGuardado":"2024-04-01T10:00:00.000Z"}]"#);
    }

    #[test]
    fn test_incomplete_record_cannot_be_loaded() {
        let sets = parse(r#"[{"id":"x","dia1":"2024-03-15","fechaGuardado":"2024-04-01T10:00:00.000Z"}]"#);
        assert_eq!(
            sets[0].to_window(),
            Err(DateSetError::IncompleteRecord { id: "x".to_string() })
        );
    }

    #[test]
    fn test_display_label() {
        let window = DateWindow::calculate("2024-03-15").unwrap();
        let set = SavedDateSet::snapshot(&window, now());
        assert!(set.display_label().starts_with("Day 1: 15/03/2024 (saved: "));

        let unknown = SavedDateSet {
            saved_at: "soon".to_string(),
            ..set
        };
        assert_eq!(unknown.display_label(), "Day 1: 15/03/2024 (saved: unknown)");
    }
}
