//! Blip history reconstruction across editions
//!
//! A blip id that appears in several editions denotes the same evolving
//! entry; its history is the chronological sequence of ring/movement
//! observations across those editions.

use crate::blip::{Movement, Ring};
use crate::edition::Edition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a blip in one edition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub edition_id: String,
    pub version: String,
    pub release_date: DateTime<Utc>,
    pub ring: Ring,
    pub movement: Movement,
}

/// The trajectory of one blip across all editions that contain it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlipHistory {
    pub blip_id: String,

    /// Blip name, taken from any matching occurrence (names are assumed
    /// consistent across editions)
    pub name: String,

    /// Observations ordered by release date ascending
    pub entries: Vec<HistoryEntry>,
}

/// Reconstruct the history of a blip id across a set of editions
///
/// Returns `None` when no edition contains the id. An absent history is a
/// valid terminal state (e.g. a newly introduced blip), not an error.
pub fn blip_history(editions: &[Edition], blip_id: &str) -> Option<BlipHistory> {
    let mut name = String::new();
    let mut entries = Vec::new();

    for edition in editions {
        if let Some(blip) = edition.blip_by_id(blip_id) {
            name = blip.name.clone();
            entries.push(HistoryEntry {
                edition_id: edition.id.clone(),
                version: edition.version.clone(),
                release_date: edition.release_date,
                ring: blip.ring,
                movement: blip.movement,
            });
        }
    }

    if entries.is_empty() {
        return None;
    }

    entries.sort_by_key(|entry| entry.release_date);

    Some(BlipHistory {
        blip_id: blip_id.to_string(),
        name,
        entries,
    })
}
