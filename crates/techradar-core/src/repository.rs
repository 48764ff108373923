//! Read-only access to loaded radar data
//!
//! The repository is constructed once from validated data and injected into
//! consumers by reference. It has no interior mutability and no lazy
//! global: "load once" semantics without hidden state.

use crate::filter::{filter_blips, FilterCriteria};
use techradar_domain::{
    blip_history, validate_radar_data, Blip, BlipHistory, DomainError, Edition, RadarData,
};

/// Read-only repository over a validated radar data set
#[derive(Clone, Debug)]
pub struct RadarRepository {
    data: RadarData,

    /// Index of the newest edition by release date (first-listed wins ties)
    latest: Option<usize>,
}

impl RadarRepository {
    /// Build a repository, validating the data set's invariants
    ///
    /// Validation failure is fatal: a radar must not serve partially valid
    /// data.
    pub fn new(data: RadarData) -> Result<Self, DomainError> {
        validate_radar_data(&data)?;

        let mut latest: Option<usize> = None;
        for (index, edition) in data.editions.iter().enumerate() {
            let newer = match latest {
                Some(best) => edition.release_date > data.editions[best].release_date,
                None => true,
            };
            if newer {
                latest = Some(index);
            }
        }

        Ok(Self { data, latest })
    }

    /// All editions in file order
    pub fn editions(&self) -> &[Edition] {
        &self.data.editions
    }

    /// The newest edition by release date, if any
    pub fn latest_edition(&self) -> Option<&Edition> {
        self.latest.map(|index| &self.data.editions[index])
    }

    /// Look up an edition by id; unknown ids yield `None`
    pub fn edition_by_id(&self, edition_id: &str) -> Option<&Edition> {
        self.data.editions.iter().find(|e| e.id == edition_id)
    }

    /// Blips of the latest edition, or empty when there are no editions
    pub fn all_blips(&self) -> &[Blip] {
        match self.latest_edition() {
            Some(edition) => &edition.blips,
            None => &[],
        }
    }

    /// Look up a blip by id in the latest edition
    pub fn blip_by_id(&self, blip_id: &str) -> Option<&Blip> {
        self.latest_edition().and_then(|e| e.blip_by_id(blip_id))
    }

    /// Reconstruct a blip's trajectory across all editions
    pub fn blip_history(&self, blip_id: &str) -> Option<BlipHistory> {
        blip_history(&self.data.editions, blip_id)
    }

    /// Free-text search within one edition (latest when `None`)
    ///
    /// Unknown edition ids yield an empty result, not an error.
    pub fn search_blips(&self, query: &str, edition_id: Option<&str>) -> Vec<Blip> {
        let criteria = FilterCriteria::new().with_search(query);
        self.filter_edition_blips(&criteria, edition_id)
    }

    /// Filter within one edition (latest when `None`)
    pub fn filter_edition_blips(
        &self,
        criteria: &FilterCriteria,
        edition_id: Option<&str>,
    ) -> Vec<Blip> {
        let edition = match edition_id {
            Some(id) => self.edition_by_id(id),
            None => self.latest_edition(),
        };

        match edition {
            Some(edition) => filter_blips(&edition.blips, criteria),
            None => Vec::new(),
        }
    }
}
