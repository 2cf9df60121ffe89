#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Search hit types shared across the city safety explorer.
//!
//! The upstream search service returns raw Elasticsearch `_source`
//! documents whose schema is not fully consistent: the arrest flag appears
//! under two spellings (`Arrest` and `arrest`) with boolean or string
//! values, the district is sometimes a number and sometimes a string, and
//! the location may live in `location_description` or `block`. These types
//! deserialize all of those variants without normalizing the wire shape
//! away; normalization happens in the presentation accessors only.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// A single search hit: document id plus the raw source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeHit {
    /// Document id assigned by the search index.
    pub id: String,
    /// The source document, absent when the index returns a bare id.
    #[serde(default)]
    pub source: Option<CrimeSource>,
}

/// Raw crime document as stored in the search index.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrimeSource {
    /// Primary crime type, e.g. `"THEFT"`.
    pub primary_type: Option<String>,
    /// Free-text description of the incident.
    pub description: Option<String>,
    /// Incident timestamp as an ISO-8601 string.
    pub date: Option<String>,
    /// Human-readable location, preferred over `block` when present.
    pub location_description: Option<String>,
    /// Block-level address, fallback for `location_description`.
    pub block: Option<String>,
    /// Police district; number or string depending on the source row.
    pub district: Option<DistrictValue>,
    /// Dominant victim type selected during indexing.
    pub victim_type_selected: Option<String>,
    /// Arrest flag. Accepts both the `Arrest` and `arrest` spellings and
    /// boolean or `"true"`/`"false"` string values.
    #[serde(alias = "Arrest")]
    pub arrest: Option<ArrestFlag>,
    /// Severity value (1-5) when the indexer computed one.
    pub severity: Option<i64>,
    /// Severity label precomputed by the search service.
    pub severity_label: Option<String>,
}

impl CrimeSource {
    /// Card title: the primary type, `"Unknown"` when missing or empty.
    #[must_use]
    pub fn title(&self) -> &str {
        match self.primary_type.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "Unknown",
        }
    }

    /// Incident description with a placeholder for missing or empty text.
    #[must_use]
    pub fn description_text(&self) -> &str {
        match self.description.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "No description",
        }
    }

    /// Location with the `location_description` -> `block` -> `"N/A"`
    /// fallback chain. Only absence falls through; an empty string is a
    /// present value and renders as-is.
    #[must_use]
    pub fn location_text(&self) -> &str {
        self.location_description
            .as_deref()
            .or(self.block.as_deref())
            .unwrap_or("N/A")
    }

    /// District rendered for display, `"N/A"` when absent.
    #[must_use]
    pub fn district_text(&self) -> String {
        self.district
            .as_ref()
            .map_or_else(|| "N/A".to_string(), ToString::to_string)
    }

    /// Victim type, `"N/A"` when missing or empty.
    #[must_use]
    pub fn victim_text(&self) -> &str {
        match self.victim_type_selected.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "N/A",
        }
    }

    /// Normalized arrest status for display.
    #[must_use]
    pub fn arrest_status(&self) -> ArrestStatus {
        match &self.arrest {
            Some(ArrestFlag::Flag(true)) => ArrestStatus::Made,
            Some(ArrestFlag::Flag(false)) => ArrestStatus::NotMade,
            Some(ArrestFlag::Text(t)) if t == "true" => ArrestStatus::Made,
            Some(ArrestFlag::Text(t)) if t == "false" => ArrestStatus::NotMade,
            _ => ArrestStatus::Unknown,
        }
    }

    /// Incident date formatted for display.
    ///
    /// Returns `"No date"` when the field is absent and the raw string when
    /// it cannot be parsed.
    #[must_use]
    pub fn date_text(&self) -> String {
        let Some(raw) = self.date.as_deref() else {
            return "No date".to_string();
        };
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            })
            .unwrap_or_else(|_| raw.to_string())
    }

    /// Severity label, preferring the service-computed one.
    #[must_use]
    pub fn severity_text(&self) -> Option<String> {
        self.severity_label
            .clone()
            .or_else(|| self.severity.map(severity_label))
    }
}

/// Arrest flag exactly as found on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrestFlag {
    /// A JSON boolean.
    Flag(bool),
    /// A string, usually `"true"` or `"false"`.
    Text(String),
    /// Anything else the source row carries; renders as unknown.
    Other(serde_json::Value),
}

/// Normalized arrest status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum ArrestStatus {
    /// An arrest was made.
    Made,
    /// No arrest was made.
    NotMade,
    /// The source document does not say.
    Unknown,
}

impl ArrestStatus {
    /// Display label used on crime cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Made => "Yes",
            Self::NotMade => "No",
            Self::Unknown => "N/A",
        }
    }
}

/// District value as found on the wire: number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictValue {
    /// Numeric district id.
    Number(i64),
    /// String district id.
    Text(String),
    /// Anything else; rendered as raw JSON.
    Other(serde_json::Value),
}

impl fmt::Display for DistrictValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Badge style for a crime type.
///
/// Chosen by case-insensitive substring match against an ordered keyword
/// list; the first matching rule wins regardless of where the keyword
/// appears in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeColor {
    /// Theft-family crimes.
    Amber,
    /// Violent crimes.
    Red,
    /// Burglary.
    Blue,
    /// Vandalism and property damage.
    Purple,
    /// Everything else.
    Slate,
}

impl BadgeColor {
    /// Picks the badge for a crime type string.
    #[must_use]
    pub fn for_type(crime_type: &str) -> Self {
        const RULES: [(&[&str], BadgeColor); 4] = [
            (&["theft", "motor", "robbery"], BadgeColor::Amber),
            (&["assault", "battery", "violent"], BadgeColor::Red),
            (&["burglary"], BadgeColor::Blue),
            (&["vandalism", "damage"], BadgeColor::Purple),
        ];

        let t = crime_type.to_lowercase();
        for (keywords, color) in RULES {
            if keywords.iter().any(|k| t.contains(k)) {
                return color;
            }
        }
        Self::Slate
    }

    /// Badge background color.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Amber => "#F5C156",
            Self::Red => "#D9534F",
            Self::Blue => "#3B82F6",
            Self::Purple => "#7C4DFF",
            Self::Slate => "#333",
        }
    }

    /// Badge text color.
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Amber => "#3a2f00",
            _ => "#fff",
        }
    }
}

/// Maps a numeric severity value to its display label.
///
/// Out-of-range values echo the raw number.
#[must_use]
pub fn severity_label(value: i64) -> String {
    match value {
        5 => "Very High".to_string(),
        4 => "High".to_string(),
        3 => "Medium".to_string(),
        2 => "Low".to_string(),
        1 => "Very Low".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_from(value: serde_json::Value) -> CrimeSource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn arrest_accepts_both_spellings_and_value_kinds() {
        let capitalized = source_from(serde_json::json!({ "Arrest": "true" }));
        assert_eq!(capitalized.arrest_status(), ArrestStatus::Made);
        assert_eq!(capitalized.arrest_status().label(), "Yes");

        let lowercase = source_from(serde_json::json!({ "arrest": false }));
        assert_eq!(lowercase.arrest_status(), ArrestStatus::NotMade);
        assert_eq!(lowercase.arrest_status().label(), "No");

        let missing = source_from(serde_json::json!({}));
        assert_eq!(missing.arrest_status(), ArrestStatus::Unknown);
        assert_eq!(missing.arrest_status().label(), "N/A");
    }

    #[test]
    fn arrest_rejects_unrecognized_values() {
        let odd = source_from(serde_json::json!({ "arrest": "yes" }));
        assert_eq!(odd.arrest_status(), ArrestStatus::Unknown);

        let numeric = source_from(serde_json::json!({ "Arrest": 1 }));
        assert_eq!(numeric.arrest_status(), ArrestStatus::Unknown);
    }

    #[test]
    fn badge_first_match_order() {
        assert_eq!(BadgeColor::for_type("THEFT"), BadgeColor::Amber);
        assert_eq!(BadgeColor::for_type("MOTOR VEHICLE THEFT"), BadgeColor::Amber);
        assert_eq!(BadgeColor::for_type("AGGRAVATED ASSAULT"), BadgeColor::Red);
        assert_eq!(BadgeColor::for_type("Burglary"), BadgeColor::Blue);
        assert_eq!(BadgeColor::for_type("CRIMINAL DAMAGE"), BadgeColor::Purple);
        assert_eq!(BadgeColor::for_type("NARCOTICS"), BadgeColor::Slate);
    }

    #[test]
    fn badge_order_beats_string_position() {
        // "damage" appears first in the string but burglary is evaluated
        // before the vandalism/damage rule.
        assert_eq!(
            BadgeColor::for_type("DAMAGE DURING BURGLARY"),
            BadgeColor::Blue
        );
        // A theft keyword anywhere still wins over later rules.
        assert_eq!(
            BadgeColor::for_type("BURGLARY AND THEFT"),
            BadgeColor::Amber
        );
    }

    #[test]
    fn location_falls_back_to_block_then_na() {
        let described = source_from(serde_json::json!({
            "location_description": "STREET",
            "block": "064XX S DR MARTIN LUTHER KING JR DR"
        }));
        assert_eq!(described.location_text(), "STREET");

        let block_only = source_from(serde_json::json!({
            "block": "064XX S DR MARTIN LUTHER KING JR DR"
        }));
        assert_eq!(
            block_only.location_text(),
            "064XX S DR MARTIN LUTHER KING JR DR"
        );

        let neither = source_from(serde_json::json!({}));
        assert_eq!(neither.location_text(), "N/A");

        // An empty string is a present value, not a missing one.
        let empty = source_from(serde_json::json!({
            "location_description": "",
            "block": "064XX"
        }));
        assert_eq!(empty.location_text(), "");
    }

    #[test]
    fn district_renders_numbers_and_strings() {
        let numeric = source_from(serde_json::json!({ "district": 11 }));
        assert_eq!(numeric.district_text(), "11");

        let text = source_from(serde_json::json!({ "district": "011" }));
        assert_eq!(text.district_text(), "011");

        let missing = source_from(serde_json::json!({}));
        assert_eq!(missing.district_text(), "N/A");
    }

    #[test]
    fn title_and_description_placeholders() {
        let empty = source_from(serde_json::json!({ "primary_type": "" }));
        assert_eq!(empty.title(), "Unknown");
        assert_eq!(empty.description_text(), "No description");
        assert_eq!(empty.victim_text(), "N/A");
    }

    #[test]
    fn date_formats_and_degrades() {
        let utc = source_from(serde_json::json!({ "date": "2023-06-01T14:30:00Z" }));
        assert_eq!(utc.date_text(), "2023-06-01 14:30");

        let naive = source_from(serde_json::json!({ "date": "2023-06-01T14:30:00" }));
        assert_eq!(naive.date_text(), "2023-06-01 14:30");

        let missing = source_from(serde_json::json!({}));
        assert_eq!(missing.date_text(), "No date");

        let junk = source_from(serde_json::json!({ "date": "yesterday" }));
        assert_eq!(junk.date_text(), "yesterday");
    }

    #[test]
    fn severity_labels() {
        assert_eq!(severity_label(5), "Very High");
        assert_eq!(severity_label(1), "Very Low");
        assert_eq!(severity_label(9), "9");

        let precomputed = source_from(serde_json::json!({
            "severity": 3,
            "severity_label": "Medium"
        }));
        assert_eq!(precomputed.severity_text().as_deref(), Some("Medium"));

        let computed = source_from(serde_json::json!({ "severity": 4 }));
        assert_eq!(computed.severity_text().as_deref(), Some("High"));
    }

    #[test]
    fn hit_deserializes_without_source() {
        let hit: CrimeHit = serde_json::from_value(serde_json::json!({ "id": "abc123" })).unwrap();
        assert!(hit.source.is_none());
    }
}
