//! Blip representation and the fixed ring/quadrant/movement enumerations

use serde::{Deserialize, Serialize};

/// Adoption stage of a blip, ordered by proximity to the radar center
///
/// `Adopt` is the innermost ring, `Hold` the outermost. The derived `Ord`
/// follows that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ring {
    Adopt,
    Trial,
    Assess,
    Hold,
}

impl Ring {
    /// All rings in center-outward order
    pub const ALL: [Ring; 4] = [Ring::Adopt, Ring::Trial, Ring::Assess, Ring::Hold];

    /// Normalized radius ceiling of this ring (fraction of the plot radius)
    pub fn radius(&self) -> f64 {
        match self {
            Ring::Adopt => 0.25,
            Ring::Trial => 0.50,
            Ring::Assess => 0.75,
            Ring::Hold => 1.00,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Ring::Adopt => "Adopt",
            Ring::Trial => "Trial",
            Ring::Assess => "Assess",
            Ring::Hold => "Hold",
        }
    }
}

/// Topical category of a blip, in fixed rotational order
///
/// The declaration order is the sector order: quadrant `i` occupies the
/// angular sector `[i * 90deg, (i + 1) * 90deg)` on the radar plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "Languages & Frameworks")]
    LanguagesAndFrameworks,
    Tools,
    Platforms,
    Techniques,
}

impl Quadrant {
    /// All quadrants in sector order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::LanguagesAndFrameworks,
        Quadrant::Tools,
        Quadrant::Platforms,
        Quadrant::Techniques,
    ];

    /// Sector index (0..4) in rotational order
    pub fn index(&self) -> usize {
        match self {
            Quadrant::LanguagesAndFrameworks => 0,
            Quadrant::Tools => 1,
            Quadrant::Platforms => 2,
            Quadrant::Techniques => 3,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Quadrant::LanguagesAndFrameworks => "Languages & Frameworks",
            Quadrant::Tools => "Tools",
            Quadrant::Platforms => "Platforms",
            Quadrant::Techniques => "Techniques",
        }
    }

    /// Short label for overlay drawing where the full name does not fit
    pub fn short_label(&self) -> &'static str {
        match self {
            Quadrant::LanguagesAndFrameworks => "Frameworks",
            Quadrant::Tools => "Tools",
            Quadrant::Platforms => "Platforms",
            Quadrant::Techniques => "Techniques",
        }
    }
}

/// Ring movement of a blip relative to its previous appearance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    MovedIn,
    MovedOut,
    NoChange,
}

/// A single tracked entry on the radar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blip {
    /// Stable identifier; matching ids across editions denote the same
    /// evolving blip
    pub id: String,

    /// Display name
    pub name: String,

    /// Topical category
    pub quadrant: Quadrant,

    /// Adoption stage
    pub ring: Ring,

    /// Free-text description
    pub description: String,

    /// Whether the blip is new in this edition
    pub is_new: bool,

    /// Ring movement since the previous appearance
    pub movement: Movement,

    /// Ring before the movement; present only when movement is not
    /// `NoChange`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_ring: Option<Ring>,

    /// Related URLs
    #[serde(default)]
    pub links: Vec<String>,

    /// Free-text tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Blip {
    /// Create a new blip with empty description, no movement, and no tags
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quadrant: Quadrant,
        ring: Ring,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quadrant,
            ring,
            description: String::new(),
            is_new: false,
            movement: Movement::NoChange,
            previous_ring: None,
            links: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the blip as new in this edition
    pub fn with_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Set the movement and the ring it moved from
    pub fn with_movement(mut self, movement: Movement, previous_ring: Ring) -> Self {
        self.movement = movement;
        self.previous_ring = Some(previous_ring);
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the related links
    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_order() {
        assert!(Ring::Adopt < Ring::Trial);
        assert!(Ring::Trial < Ring::Assess);
        assert!(Ring::Assess < Ring::Hold);
    }

    #[test]
    fn test_ring_radius_monotonic() {
        let radii: Vec<f64> = Ring::ALL.iter().map(|r| r.radius()).collect();
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
        assert!((Ring::Hold.radius() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quadrant_index_matches_order() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), i);
        }
    }

    #[test]
    fn test_quadrant_labels() {
        assert_eq!(Quadrant::LanguagesAndFrameworks.name(), "Languages & Frameworks");
        // The overlay uses a shorter label where the full name does not fit
        assert_eq!(Quadrant::LanguagesAndFrameworks.short_label(), "Frameworks");
        for quadrant in [Quadrant::Tools, Quadrant::Platforms, Quadrant::Techniques] {
            assert_eq!(quadrant.short_label(), quadrant.name());
        }
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&Quadrant::LanguagesAndFrameworks).unwrap();
        assert_eq!(json, "\"Languages & Frameworks\"");

        let json = serde_json::to_string(&Movement::MovedIn).unwrap();
        assert_eq!(json, "\"moved_in\"");

        let json = serde_json::to_string(&Ring::Adopt).unwrap();
        assert_eq!(json, "\"Adopt\"");
    }

    #[test]
    fn test_blip_deserialize_defaults() {
        let json = r#"{
            "id": "rust",
            "name": "Rust",
            "quadrant": "Languages & Frameworks",
            "ring": "Adopt",
            "description": "A systems language",
            "isNew": true,
            "movement": "no_change"
        }"#;

        let blip: Blip = serde_json::from_str(json).unwrap();
        assert_eq!(blip.id, "rust");
        assert!(blip.is_new);
        assert!(blip.previous_ring.is_none());
        assert!(blip.links.is_empty());
        assert!(blip.tags.is_empty());
    }

    #[test]
    fn test_blip_rejects_unknown_ring() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "quadrant": "Tools",
            "ring": "Retire",
            "description": "",
            "isNew": false,
            "movement": "no_change"
        }"#;

        assert!(serde_json::from_str::<Blip>(json).is_err());
    }

    #[test]
    fn test_blip_builder() {
        let blip = Blip::new("kafka", "Apache Kafka", Quadrant::Platforms, Ring::Trial)
            .with_description("Distributed event streaming")
            .with_movement(Movement::MovedIn, Ring::Assess)
            .with_tags(vec!["streaming".to_string()]);

        assert_eq!(blip.movement, Movement::MovedIn);
        assert_eq!(blip.previous_ring, Some(Ring::Assess));
        assert_eq!(blip.tags.len(), 1);
    }
}
