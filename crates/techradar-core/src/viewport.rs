//! Plot viewport and overlay coordinate mapping
//!
//! The plot uses data coordinates on `[-1.1, 1.1]` in both axes. Zooming
//! into a quadrant narrows the bounds to that quarter while keeping a 0.2
//! overlap past the origin so the inner rings stay visible. The static
//! overlay (ring circles, quadrant labels) draws in a separate coordinate
//! system derived from the same bounds by a fixed scale with vertical
//! inversion, so overlay and plot stay pixel-aligned at any zoom level.

use serde::{Deserialize, Serialize};
use techradar_domain::Quadrant;

/// Half-extent of the full plot in data coordinates
const PLOT_EXTENT: f64 = 1.1;

/// How far a zoomed quadrant's bounds reach past the origin
const ZOOM_ORIGIN_OVERLAP: f64 = 0.2;

/// Scale from plot data coordinates to overlay coordinates
const OVERLAY_SCALE: f64 = 100.0;

/// Axis-aligned plot bounds in data coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Bounds of the full, unzoomed plot
    pub fn full() -> Self {
        Self {
            x_min: -PLOT_EXTENT,
            x_max: PLOT_EXTENT,
            y_min: -PLOT_EXTENT,
            y_max: PLOT_EXTENT,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check whether a point lies within the bounds
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Derive the overlay view box for these bounds
    ///
    /// The overlay's vertical axis grows downward, so the top edge of the
    /// plot (`y_max`) maps to the view box origin.
    pub fn overlay_view_box(&self) -> ViewBox {
        ViewBox {
            x: self.x_min * OVERLAY_SCALE,
            y: -self.y_max * OVERLAY_SCALE,
            width: self.width() * OVERLAY_SCALE,
            height: self.height() * OVERLAY_SCALE,
        }
    }
}

/// Overlay coordinate window aligned with the plot bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Render as a `viewBox` attribute value ("x y width height")
    pub fn attribute(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Compute the plot bounds for an optional focused quadrant
///
/// `None` yields the full symmetric bounds. Each quadrant maps to its
/// quarter of the plane, extended past the origin by 0.2 on both axes.
pub fn viewport(focus: Option<Quadrant>) -> Bounds {
    let Some(quadrant) = focus else {
        return Bounds::full();
    };

    match quadrant {
        // Top-right: positive x, positive y
        Quadrant::LanguagesAndFrameworks => Bounds {
            x_min: -ZOOM_ORIGIN_OVERLAP,
            x_max: PLOT_EXTENT,
            y_min: -ZOOM_ORIGIN_OVERLAP,
            y_max: PLOT_EXTENT,
        },
        // Top-left: negative x, positive y
        Quadrant::Tools => Bounds {
            x_min: -PLOT_EXTENT,
            x_max: ZOOM_ORIGIN_OVERLAP,
            y_min: -ZOOM_ORIGIN_OVERLAP,
            y_max: PLOT_EXTENT,
        },
        // Bottom-left: negative x, negative y
        Quadrant::Platforms => Bounds {
            x_min: -PLOT_EXTENT,
            x_max: ZOOM_ORIGIN_OVERLAP,
            y_min: -PLOT_EXTENT,
            y_max: ZOOM_ORIGIN_OVERLAP,
        },
        // Bottom-right: positive x, negative y
        Quadrant::Techniques => Bounds {
            x_min: -ZOOM_ORIGIN_OVERLAP,
            x_max: PLOT_EXTENT,
            y_min: -PLOT_EXTENT,
            y_max: ZOOM_ORIGIN_OVERLAP,
        },
    }
}
