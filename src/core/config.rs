//! Generation configuration with documented defaults
//!
//! A `GenerationConfig` is a plain value passed into every pipeline call.
//! Callers usually start from `GenerationConfig::default()` and merge a
//! partial `ConfigOverrides` loaded from TOML or JSON on top of it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LayoutError, Result};
use crate::room::RoomType;

/// Corridors are never narrower than this, whatever the configuration says.
pub const MIN_CORRIDOR_WIDTH: f64 = 1.8;

/// Ranking objective applied once across all placed zones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Greedy minimum-distance filter, then efficiency order
    Density,
    /// Small seeded jitter, then proximity/efficiency blend
    Comfort,
    /// Efficiency blended with type priority and accessibility
    Efficiency,
    /// Efficiency, comfort and compliance combined
    #[default]
    Balanced,
}

/// Corridor network topology
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorridorRouter {
    /// Horizontal spine with vertical connectors to every other zone
    #[default]
    Spine,
    /// Minimum spanning tree over zone centers
    SpanningTree,
}

/// Architectural constraints checked by the compliance validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitecturalConfig {
    /// Required free distance between a zone and the surrounding walls (m)
    pub min_clearance: f64,
    /// Requested corridor width (m); raised to `MIN_CORRIDOR_WIDTH` when smaller
    pub corridor_width: f64,
    /// Longest acceptable travel distance to an exit (m)
    pub emergency_egress_max: f64,
    /// Free approach strip a wheelchair needs on at least one side of a zone (m)
    pub accessibility_zone: f64,
}

impl Default for ArchitecturalConfig {
    fn default() -> Self {
        Self {
            min_clearance: 1.2,
            corridor_width: 1.5,
            emergency_egress_max: 30.0,
            accessibility_zone: 1.5,
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Target occupancy ratio in (0, 1]; reported, not used by the grid
    pub density: f64,
    /// Minimum center-to-center distance between zones (m), also the grid spacing
    pub min_distance: f64,
    /// Upper bound on zone spacing (m); must be >= `min_distance`
    pub max_distance: f64,
    pub optimization_objective: Objective,
    pub architectural: ArchitecturalConfig,

    /// Room types eligible for placement
    pub suitable_room_types: Vec<RoomType>,
    /// Per-room-type overrides of the zone type sequence, keyed by room type label
    pub type_sequences: BTreeMap<String, Vec<String>>,
    /// Also test zone corners against the exact room polygon
    pub exact_polygon_check: bool,
    pub corridor_router: CorridorRouter,
    /// Seed for the comfort jitter
    pub seed: u64,
    /// Minimum room count before per-room placement runs in parallel
    pub parallel_threshold: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            density: 0.3,
            min_distance: 2.0,
            max_distance: 8.0,
            optimization_objective: Objective::Balanced,
            architectural: ArchitecturalConfig::default(),

            suitable_room_types: vec![
                RoomType::Office,
                RoomType::MeetingRoom,
                RoomType::GeneralSpace,
                RoomType::Workspace,
                RoomType::OpenOffice,
            ],
            type_sequences: BTreeMap::new(),
            exact_polygon_check: true,
            corridor_router: CorridorRouter::Spine,
            seed: 42,
            parallel_threshold: 8,
        }
    }
}

/// Partial architectural section; present keys replace the defaults one by one
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchitecturalOverrides {
    pub min_clearance: Option<f64>,
    pub corridor_width: Option<f64>,
    pub emergency_egress_max: Option<f64>,
    pub accessibility_zone: Option<f64>,
}

/// Partial configuration as supplied by a caller
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub density: Option<f64>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub optimization_objective: Option<Objective>,
    pub architectural: Option<ArchitecturalOverrides>,
    pub suitable_room_types: Option<Vec<RoomType>>,
    pub type_sequences: Option<BTreeMap<String, Vec<String>>>,
    pub exact_polygon_check: Option<bool>,
    pub corridor_router: Option<CorridorRouter>,
    pub seed: Option<u64>,
    pub parallel_threshold: Option<usize>,
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge overrides onto this config.
    ///
    /// Top-level keys replace wholesale; `architectural` and `type_sequences`
    /// merge key by key so a partial section keeps the remaining defaults.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(v) = overrides.density {
            self.density = v;
        }
        if let Some(v) = overrides.min_distance {
            self.min_distance = v;
        }
        if let Some(v) = overrides.max_distance {
            self.max_distance = v;
        }
        if let Some(v) = overrides.optimization_objective {
            self.optimization_objective = v;
        }
        if let Some(arch) = overrides.architectural {
            let a = &mut self.architectural;
            a.min_clearance = arch.min_clearance.unwrap_or(a.min_clearance);
            a.corridor_width = arch.corridor_width.unwrap_or(a.corridor_width);
            a.emergency_egress_max = arch.emergency_egress_max.unwrap_or(a.emergency_egress_max);
            a.accessibility_zone = arch.accessibility_zone.unwrap_or(a.accessibility_zone);
        }
        if let Some(v) = overrides.suitable_room_types {
            self.suitable_room_types = v;
        }
        if let Some(sequences) = overrides.type_sequences {
            self.type_sequences.extend(sequences);
        }
        if let Some(v) = overrides.exact_polygon_check {
            self.exact_polygon_check = v;
        }
        if let Some(v) = overrides.corridor_router {
            self.corridor_router = v;
        }
        if let Some(v) = overrides.seed {
            self.seed = v;
        }
        if let Some(v) = overrides.parallel_threshold {
            self.parallel_threshold = v;
        }
        self
    }

    /// Defaults merged with overrides parsed from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overrides: ConfigOverrides = toml::from_str(content)?;
        let config = Self::default().merge(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Defaults merged with overrides parsed from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let overrides: ConfigOverrides = serde_json::from_str(content)?;
        let config = Self::default().merge(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Corridor width after applying the global floor
    pub fn effective_corridor_width(&self) -> f64 {
        self.architectural.corridor_width.max(MIN_CORRIDOR_WIDTH)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "density ({}) must be in (0, 1]",
                self.density
            )));
        }

        if self.min_distance <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "min_distance ({}) must be positive",
                self.min_distance
            )));
        }

        if self.max_distance < self.min_distance {
            return Err(LayoutError::InvalidConfig(format!(
                "max_distance ({}) should be >= min_distance ({})",
                self.max_distance, self.min_distance
            )));
        }

        let a = &self.architectural;
        if a.min_clearance < 0.0 || a.accessibility_zone < 0.0 {
            return Err(LayoutError::InvalidConfig(
                "clearances must not be negative".into(),
            ));
        }
        if a.corridor_width <= 0.0 || a.emergency_egress_max <= 0.0 {
            return Err(LayoutError::InvalidConfig(
                "corridor_width and emergency_egress_max must be positive".into(),
            ));
        }

        if let Some((room_type, _)) = self.type_sequences.iter().find(|(_, seq)| seq.is_empty()) {
            return Err(LayoutError::InvalidConfig(format!(
                "type sequence for '{}' is empty",
                room_type
            )));
        }

        Ok(())
    }
}
