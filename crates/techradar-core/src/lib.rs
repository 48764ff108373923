//! techradar-core - Radar layout and filtering engine
//!
//! This crate turns a validated set of radar editions into everything the
//! presentation layer needs to draw and interact with a technology radar:
//!
//! - **Geometry**: deterministic mapping of blips to 2D plot points inside
//!   their quadrant sector and ring band
//! - **Filter**: pure predicate filtering by ring, quadrant, tag, and
//!   free-text search
//! - **Viewport**: plot bounds for the full radar or a zoomed quadrant,
//!   plus the pixel-aligned overlay view box
//! - **ViewState**: explicit UI state with a pure event reducer
//! - **RadarRepository**: read-only, dependency-injected access to loaded
//!   editions, blips, and blip histories
//! - **EditionStats**: summary counts over a (filtered) blip set
//!
//! All functions are pure and synchronous; recomputing from identical
//! inputs always yields identical outputs.

pub mod filter;
pub mod geometry;
pub mod repository;
pub mod stats;
pub mod view;
pub mod viewport;

pub use filter::*;
pub use geometry::*;
pub use repository::*;
pub use stats::*;
pub use view::*;
pub use viewport::*;
