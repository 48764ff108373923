//! UI view state and its event reducer
//!
//! State is an explicit value, mutated only by applying events through a
//! pure reducer: `state.apply(event)` returns the next state and leaves the
//! input untouched. Any UI binding layer can drive this without hidden
//! shared state.

use crate::filter::FilterCriteria;
use serde::{Deserialize, Serialize};
use techradar_domain::{Quadrant, Ring};

/// How the blip set is presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Chart,
    List,
}

/// Ephemeral per-session view state
///
/// Created at session start, discarded at session end; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Active filter criteria
    pub filters: FilterCriteria,

    /// Id of the blip whose details are shown, if any
    pub selected_blip: Option<String>,

    /// Quadrant the plot is zoomed into, if any
    pub focused_quadrant: Option<Quadrant>,

    /// Chart or list presentation
    pub view_mode: ViewMode,
}

/// User interaction events that change the view state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    SetSearch(String),
    ToggleRing(Ring),
    ToggleQuadrant(Quadrant),
    ToggleTag(String),
    ClearFilters,
    SelectBlip(Option<String>),
    FocusQuadrant(Option<Quadrant>),
    SetViewMode(ViewMode),
}

impl ViewState {
    /// Apply an event, returning the next state
    pub fn apply(&self, event: &ViewEvent) -> ViewState {
        let mut next = self.clone();

        match event {
            ViewEvent::SetSearch(search) => {
                next.filters.search = search.clone();
            }
            ViewEvent::ToggleRing(ring) => {
                next.filters.toggle_ring(*ring);
            }
            ViewEvent::ToggleQuadrant(quadrant) => {
                next.filters.toggle_quadrant(*quadrant);
            }
            ViewEvent::ToggleTag(tag) => {
                next.filters.toggle_tag(tag);
            }
            ViewEvent::ClearFilters => {
                next.filters = FilterCriteria::default();
            }
            ViewEvent::SelectBlip(blip_id) => {
                next.selected_blip = blip_id.clone();
            }
            ViewEvent::FocusQuadrant(focus) => {
                // Clicking the already-focused quadrant zooms back out
                next.focused_quadrant = if *focus == self.focused_quadrant {
                    None
                } else {
                    *focus
                };
            }
            ViewEvent::SetViewMode(mode) => {
                next.view_mode = *mode;
            }
        }

        next
    }
}
