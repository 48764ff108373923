//! Blip filtering and free-text search
//!
//! Filtering is a pure boolean predicate: a blip passes when it satisfies
//! every active criterion. Empty criteria match everything and the result
//! always preserves input order. No fuzzy matching, no ranking.

use serde::{Deserialize, Serialize};
use techradar_domain::{Blip, Quadrant, Ring};

/// Active filter criteria for a radar view
///
/// An empty collection (or empty search string) means "no constraint".
/// Criteria are ephemeral UI session state and are never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected rings; empty selects all
    pub rings: Vec<Ring>,

    /// Selected quadrants; empty selects all
    pub quadrants: Vec<Quadrant>,

    /// Selected tags (exact membership, any-of); empty selects all
    pub tags: Vec<String>,

    /// Case-insensitive substring search over name, description, and tags
    pub search: String,
}

impl FilterCriteria {
    /// Criteria matching every blip
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a ring
    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.rings.push(ring);
        self
    }

    /// Restrict to a quadrant
    pub fn with_quadrant(mut self, quadrant: Quadrant) -> Self {
        self.quadrants.push(quadrant);
        self
    }

    /// Restrict to a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the search string
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Check whether any criterion is active
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
            && self.quadrants.is_empty()
            && self.tags.is_empty()
            && self.search.is_empty()
    }

    /// Add or remove a ring from the selection
    pub fn toggle_ring(&mut self, ring: Ring) {
        match self.rings.iter().position(|r| *r == ring) {
            Some(pos) => {
                self.rings.remove(pos);
            }
            None => self.rings.push(ring),
        }
    }

    /// Add or remove a quadrant from the selection
    pub fn toggle_quadrant(&mut self, quadrant: Quadrant) {
        match self.quadrants.iter().position(|q| *q == quadrant) {
            Some(pos) => {
                self.quadrants.remove(pos);
            }
            None => self.quadrants.push(quadrant),
        }
    }

    /// Add or remove a tag from the selection
    pub fn toggle_tag(&mut self, tag: &str) {
        match self.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    /// Check whether a blip satisfies every active criterion
    pub fn matches(&self, blip: &Blip) -> bool {
        if !self.rings.is_empty() && !self.rings.contains(&blip.ring) {
            return false;
        }

        if !self.quadrants.is_empty() && !self.quadrants.contains(&blip.quadrant) {
            return false;
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|t| blip.tags.contains(t)) {
            return false;
        }

        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let in_name = blip.name.to_lowercase().contains(&query);
            let in_description = blip.description.to_lowercase().contains(&query);
            let in_tags = blip.tags.iter().any(|t| t.to_lowercase().contains(&query));

            if !in_name && !in_description && !in_tags {
                return false;
            }
        }

        true
    }
}

/// Filter blips by the given criteria, preserving input order
pub fn filter_blips(blips: &[Blip], criteria: &FilterCriteria) -> Vec<Blip> {
    blips
        .iter()
        .filter(|blip| criteria.matches(blip))
        .cloned()
        .collect()
}
