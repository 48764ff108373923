//! Edition and top-level radar data representation

use crate::blip::Blip;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time-stamped published version of the full radar
///
/// Editions are immutable once loaded; changing radar content means
/// publishing a new edition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    /// Stable identifier
    pub id: String,

    /// Human-readable version label (e.g. "2025.1")
    pub version: String,

    /// Release timestamp
    pub release_date: DateTime<Utc>,

    /// Free-text description of the edition
    pub description: String,

    /// Blips in publication order
    pub blips: Vec<Blip>,
}

impl Edition {
    /// Look up a blip by id within this edition
    pub fn blip_by_id(&self, blip_id: &str) -> Option<&Blip> {
        self.blips.iter().find(|b| b.id == blip_id)
    }
}

/// Root of the radar data file: all published editions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarData {
    pub editions: Vec<Edition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blip::{Quadrant, Ring};

    fn sample_edition() -> Edition {
        Edition {
            id: "2025-1".to_string(),
            version: "2025.1".to_string(),
            release_date: "2025-03-01T00:00:00Z".parse().unwrap(),
            description: "Spring edition".to_string(),
            blips: vec![Blip::new("rust", "Rust", Quadrant::LanguagesAndFrameworks, Ring::Adopt)],
        }
    }

    #[test]
    fn test_edition_blip_lookup() {
        let edition = sample_edition();
        assert!(edition.blip_by_id("rust").is_some());
        assert!(edition.blip_by_id("cobol").is_none());
    }

    #[test]
    fn test_edition_release_date_wire_format() {
        let edition = sample_edition();
        let json = serde_json::to_string(&edition).unwrap();
        assert!(json.contains("\"releaseDate\""));

        let back: Edition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edition);
    }

    #[test]
    fn test_radar_data_rejects_bad_timestamp() {
        let json = r#"{
            "editions": [{
                "id": "e1",
                "version": "1.0",
                "releaseDate": "not-a-date",
                "description": "",
                "blips": []
            }]
        }"#;

        assert!(serde_json::from_str::<RadarData>(json).is_err());
    }
}
