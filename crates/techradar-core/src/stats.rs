//! Summary counts over a blip set
//!
//! Computed from whatever blip slice the caller is currently showing
//! (typically the filtered set), so the numbers always match the view.

use serde::{Deserialize, Serialize};
use techradar_domain::{Blip, Quadrant, Ring};

/// Summary counts for a set of blips
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionStats {
    /// Total number of blips
    pub total: usize,

    /// Blips marked new in their edition
    pub new_count: usize,

    /// Counts per ring, indexed in `Ring::ALL` order
    pub per_ring: [usize; 4],

    /// Counts per quadrant, indexed in `Quadrant::ALL` order
    pub per_quadrant: [usize; 4],
}

impl EditionStats {
    /// Compute summary counts from a blip set
    pub fn compute(blips: &[Blip]) -> Self {
        let mut stats = Self {
            total: blips.len(),
            ..Self::default()
        };

        for blip in blips {
            if blip.is_new {
                stats.new_count += 1;
            }
            stats.per_ring[blip.ring as usize] += 1;
            stats.per_quadrant[blip.quadrant.index()] += 1;
        }

        stats
    }

    /// Count of blips in a ring
    pub fn ring_count(&self, ring: Ring) -> usize {
        self.per_ring[ring as usize]
    }

    /// Count of blips in a quadrant
    pub fn quadrant_count(&self, quadrant: Quadrant) -> usize {
        self.per_quadrant[quadrant.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counts() {
        let blips = vec![
            Blip::new("a", "A", Quadrant::Tools, Ring::Adopt).with_new(),
            Blip::new("b", "B", Quadrant::Tools, Ring::Trial),
            Blip::new("c", "C", Quadrant::Platforms, Ring::Adopt),
        ];

        let stats = EditionStats::compute(&blips);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.new_count, 1);
        assert_eq!(stats.ring_count(Ring::Adopt), 2);
        assert_eq!(stats.ring_count(Ring::Hold), 0);
        assert_eq!(stats.quadrant_count(Quadrant::Tools), 2);
        assert_eq!(stats.quadrant_count(Quadrant::Techniques), 0);
    }

    #[test]
    fn test_stats_empty() {
        let stats = EditionStats::compute(&[]);
        assert_eq!(stats, EditionStats::default());
    }
}
