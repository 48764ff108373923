//! Deterministic radar plot geometry
//!
//! Maps blips to 2D points on the unit disc. Each quadrant owns a fixed
//! 90-degree angular sector, each ring a fixed radial band, and blips are
//! spread within their sector by input order with a small deterministic
//! jitter so overlapping points separate without true randomness.
//!
//! For identical input (blips and their order) the output is bit-identical
//! across calls: re-renders and tests stay reproducible.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use techradar_domain::{Blip, Quadrant};

/// Seed for angular jitter
const ANGLE_JITTER_SEED: usize = 17;

/// Seed for radial jitter; must differ from the angular seed so the two
/// jitter dimensions are decorrelated
const RADIUS_JITTER_SEED: usize = 23;

const JITTER_MODULO_BASE: usize = 100;

/// Fraction of the sector width across which blips are interpolated
const ANGULAR_SPREAD_FRACTION: f64 = 0.7;

/// Fixed angular margin from the sector's start edge
const SECTOR_MARGIN_FRACTION: f64 = 0.15;

/// Angular jitter amplitude as a fraction of the sector width
const ANGULAR_JITTER_FRACTION: f64 = 0.2;

/// Fixed inward offset from the ring's radius ceiling
const RING_INSET: f64 = 0.12;

/// Radial jitter amplitude in normalized radius units
const RADIAL_JITTER_RANGE: f64 = 0.15;

/// A blip positioned on the plot
///
/// Coordinates lie on the unit disc within the full plot bounds
/// `[-1.1, 1.1] x [-1.1, 1.1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub blip: Blip,
}

/// Deterministic pseudo-random value in `[-0.5, 0.5)` from an index and a
/// seed
///
/// Pure and total: defined for every index, no randomness source involved.
pub fn pseudo_random(index: usize, seed: usize) -> f64 {
    ((index * seed) % JITTER_MODULO_BASE) as f64 / JITTER_MODULO_BASE as f64 - 0.5
}

/// Compute a plot point for every blip
///
/// Blips are partitioned into the four quadrant sectors in fixed rotational
/// order; within a sector they keep their relative input order. The result
/// lists sector 0 points first, then sectors 1 through 3.
pub fn layout(blips: &[Blip]) -> Vec<PlotPoint> {
    let mut points = Vec::with_capacity(blips.len());

    for quadrant in Quadrant::ALL {
        let bucket: Vec<&Blip> = blips.iter().filter(|b| b.quadrant == quadrant).collect();

        for (index, blip) in bucket.iter().enumerate() {
            points.push(place_blip(blip, quadrant, index, bucket.len()));
        }
    }

    points
}

/// Position one blip at bucket index `index` of `count` within its quadrant
fn place_blip(blip: &Blip, quadrant: Quadrant, index: usize, count: usize) -> PlotPoint {
    let start_angle = quadrant.index() as f64 * PI / 2.0;
    let spread = PI / 2.0;

    // Interpolate across 70% of the sector; a lone blip sits at the middle
    // of that band, which is the sector midpoint once the margin is added.
    let base_offset = if count > 1 {
        index as f64 / (count - 1) as f64 * spread * ANGULAR_SPREAD_FRACTION
    } else {
        spread * ANGULAR_SPREAD_FRACTION / 2.0
    };
    let angle_jitter = pseudo_random(index, ANGLE_JITTER_SEED) * spread * ANGULAR_JITTER_FRACTION;
    let angle = start_angle + base_offset + spread * SECTOR_MARGIN_FRACTION + angle_jitter;

    let radius_jitter = pseudo_random(index, RADIUS_JITTER_SEED) * RADIAL_JITTER_RANGE;
    let radius = blip.ring.radius() - RING_INSET + radius_jitter;

    PlotPoint {
        x: angle.cos() * radius,
        y: angle.sin() * radius,
        blip: blip.clone(),
    }
}
