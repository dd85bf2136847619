//! Placed îlots

use serde::{Deserialize, Serialize};

use crate::core::types::{BBox, Dimensions, Vec2, Vec3};
use crate::validation::ValidationResult;

/// Coarse accessibility grade derived from distance to the entrance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRating {
    Excellent,
    Good,
    #[default]
    Fair,
}

/// Whether a wheelchair can approach the zone from at least one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathClearance {
    #[default]
    Adequate,
    Restricted,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    pub wheelchair_accessible: bool,
    /// 1.0 at the entrance, 0.0 at 30 m and beyond
    pub proximity_score: f64,
    pub rating: AccessRating,
    pub path_clearance: PathClearance,
}

/// One îlot placed inside a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedZone {
    pub id: String,
    pub room_id: String,
    pub type_name: String,
    /// Footprint center
    pub position: Vec3,
    pub dimensions: Dimensions,
    /// Axis-aligned footprint, clockwise from the min corner
    pub polygon: Vec<Vec2>,
    pub bbox: BBox,
    pub capacity: u32,
    /// Priority of the zone type, copied from the catalog
    pub priority: f64,
    pub accessibility: Accessibility,
    pub efficiency_score: f64,
    /// Score under the last optimization objective
    pub objective_score: f64,
    pub validation: ValidationResult,
    /// Region the footprint must stay inside; `None` leaves it unconstrained
    #[serde(skip)]
    pub envelope: Option<BBox>,
}

impl PlacedZone {
    pub fn new(
        id: impl Into<String>,
        room_id: impl Into<String>,
        type_name: impl Into<String>,
        position: Vec3,
        dimensions: Dimensions,
    ) -> Self {
        let bbox = BBox::around(position.xy(), dimensions);
        Self {
            id: id.into(),
            room_id: room_id.into(),
            type_name: type_name.into(),
            position,
            dimensions,
            polygon: bbox.corners().to_vec(),
            bbox,
            capacity: 0,
            priority: 0.0,
            accessibility: Accessibility::default(),
            efficiency_score: 0.0,
            objective_score: 0.0,
            validation: ValidationResult::default(),
            envelope: None,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position.xy()
    }

    pub fn distance_to(&self, other: &PlacedZone) -> f64 {
        self.center().distance(&other.center())
    }

    /// Move the footprint so it is centred on `center`, keeping `z`
    pub fn move_to(&mut self, center: Vec2) {
        self.position = Vec3::new(center.x, center.y, self.position.z);
        self.bbox = BBox::around(center, self.dimensions);
        self.polygon = self.bbox.corners().to_vec();
    }
}
