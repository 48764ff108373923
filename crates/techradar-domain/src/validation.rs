//! Load-time invariant checks over a full radar data set
//!
//! The serde layer already rejects structural problems (unknown enum
//! strings, malformed timestamps, missing fields). This module enforces the
//! cross-field invariants serde cannot express. A violation is fatal at
//! load time: the radar must not render a partially valid data set.
//!
//! `previousRing` is optional even for moved blips; the presentation layer
//! simply omits the "from" annotation when it is absent. Only the reverse
//! is an invariant: an unmoved blip must not claim a previous ring.

use crate::blip::{Blip, Movement};
use crate::edition::RadarData;
use thiserror::Error;
use url::Url;

/// Invariant violations in an otherwise well-formed radar data set
#[derive(Debug, Error)]
pub enum DomainError {
    /// An unmoved blip must not carry a previous ring
    #[error("blip '{blip_id}' in edition '{edition_id}' has previousRing without movement")]
    UnexpectedPreviousRing { edition_id: String, blip_id: String },

    /// Blip links must be valid URLs
    #[error("blip '{blip_id}' in edition '{edition_id}' has invalid link '{link}': {message}")]
    InvalidLink {
        edition_id: String,
        blip_id: String,
        link: String,
        message: String,
    },
}

/// Validate every edition of a radar data set, returning the first violation
pub fn validate_radar_data(data: &RadarData) -> Result<(), DomainError> {
    for edition in &data.editions {
        for blip in &edition.blips {
            validate_blip(&edition.id, blip)?;
        }
    }
    Ok(())
}

fn validate_blip(edition_id: &str, blip: &Blip) -> Result<(), DomainError> {
    if blip.movement == Movement::NoChange && blip.previous_ring.is_some() {
        return Err(DomainError::UnexpectedPreviousRing {
            edition_id: edition_id.to_string(),
            blip_id: blip.id.clone(),
        });
    }

    for link in &blip.links {
        if let Err(err) = Url::parse(link) {
            return Err(DomainError::InvalidLink {
                edition_id: edition_id.to_string(),
                blip_id: blip.id.clone(),
                link: link.clone(),
                message: err.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blip::{Quadrant, Ring};
    use crate::edition::Edition;

    fn data_with(blips: Vec<Blip>) -> RadarData {
        RadarData {
            editions: vec![Edition {
                id: "e1".to_string(),
                version: "1.0".to_string(),
                release_date: "2025-01-01T00:00:00Z".parse().unwrap(),
                description: String::new(),
                blips,
            }],
        }
    }

    #[test]
    fn test_valid_data_passes() {
        let data = data_with(vec![
            Blip::new("rust", "Rust", Quadrant::LanguagesAndFrameworks, Ring::Adopt)
                .with_links(vec!["https://www.rust-lang.org".to_string()]),
            Blip::new("kafka", "Apache Kafka", Quadrant::Platforms, Ring::Trial)
                .with_movement(Movement::MovedIn, Ring::Assess),
        ]);
        assert!(validate_radar_data(&data).is_ok());
    }

    #[test]
    fn test_movement_without_previous_ring_accepted() {
        // previousRing is optional even for moved blips
        let mut blip = Blip::new("a", "A", Quadrant::Tools, Ring::Trial);
        blip.movement = Movement::MovedIn;

        assert!(validate_radar_data(&data_with(vec![blip])).is_ok());
    }

    #[test]
    fn test_previous_ring_without_movement_fails() {
        let mut blip = Blip::new("a", "A", Quadrant::Tools, Ring::Trial);
        blip.previous_ring = Some(Ring::Assess);

        let err = validate_radar_data(&data_with(vec![blip])).unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedPreviousRing { .. }));
    }

    #[test]
    fn test_invalid_link_fails() {
        let blip = Blip::new("a", "A", Quadrant::Tools, Ring::Trial)
            .with_links(vec!["not a url".to_string()]);

        let err = validate_radar_data(&data_with(vec![blip])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLink { .. }));
    }

    #[test]
    fn test_duplicate_blip_ids_accepted() {
        // Ids repeated within an edition load fine; lookups take the first
        let data = data_with(vec![
            Blip::new("a", "A", Quadrant::Tools, Ring::Trial),
            Blip::new("a", "A again", Quadrant::Platforms, Ring::Hold),
        ]);

        assert!(validate_radar_data(&data).is_ok());
        assert_eq!(data.editions[0].blip_by_id("a").unwrap().name, "A");
    }
}
