//! techradar-io - Radar data loading
//!
//! Loads the static radar data file (all editions and their blips) and
//! validates it before anything downstream sees it. A data set that fails
//! validation is rejected outright: the radar cannot render partially
//! valid data, so load errors are fatal to the caller.

pub mod loader;

pub use loader::*;
