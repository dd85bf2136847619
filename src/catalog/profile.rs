//! Zone type profiles

use serde::{Deserialize, Serialize};

use crate::core::types::Dimensions;

/// An immutable catalog entry describing one kind of îlot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTypeProfile {
    /// Unique identifier, e.g. "work"
    pub name: String,
    /// Footprint before any adjustment (m)
    pub base_size: Dimensions,
    /// Number of occupants
    pub capacity: u32,
    /// Weight in [0, 1] used for tie-breaks and the efficiency objective
    pub priority: f64,
    /// Display color, passed through untouched
    #[serde(default)]
    pub color: String,
    /// Furniture tags, passed through untouched
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl ZoneTypeProfile {
    pub fn footprint_area(&self) -> f64 {
        self.base_size.area()
    }
}
