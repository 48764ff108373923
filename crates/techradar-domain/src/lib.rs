//! Radar domain types shared across the techradar crates
//!
//! This crate provides the canonical domain models for a technology radar:
//! - Blip: a single tracked technology, tool, platform, or technique
//! - Ring: adoption stage (Adopt, Trial, Assess, Hold), mapped to radial distance
//! - Quadrant: topical category, mapped to a 90-degree angular sector
//! - Edition: one time-stamped published version of the full radar
//! - BlipHistory: the ring/movement trajectory of a blip across editions
//! - Validation: load-time invariant checks over a full radar data set

pub mod blip;
pub mod edition;
pub mod history;
pub mod validation;

pub use blip::*;
pub use edition::*;
pub use history::*;
pub use validation::*;
