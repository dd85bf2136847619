//! End-to-end generation for one floor
//!
//! Per room: place, then validate. Across the floor: optimize once, then
//! synthesize corridors. Per-room work is independent and fans out over
//! rayon for large floors; optimization and corridors run after the join.
//!
//! "Nothing could be placed" is reported through `GenerationStatus`, never
//! as an error.

mod statistics;

pub use statistics::GenerationStatistics;

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::ZoneCatalog;
use crate::core::config::GenerationConfig;
use crate::core::error::{LayoutError, Result};
use crate::corridor::{CorridorSegment, CorridorSynthesizer};
use crate::optimize::PlacementOptimizer;
use crate::placement::{scoring, GridPlacer, PlacedZone};
use crate::room::{Room, RoomAdapter, RoomInput};
use crate::validation::ComplianceValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Completed,
    NoSuitableRooms,
    NoZonesGenerated,
}

impl GenerationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationStatus::Completed)
    }
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationStatus::Completed => write!(f, "layout generated"),
            GenerationStatus::NoSuitableRooms => {
                write!(f, "no room passed the suitability filter")
            }
            GenerationStatus::NoZonesGenerated => {
                write!(f, "suitable rooms found but no zone could be placed")
            }
        }
    }
}

/// Room input the adapter refused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRoom {
    pub room_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub status: GenerationStatus,
    pub message: String,
    pub zones: Vec<PlacedZone>,
    pub corridors: Vec<CorridorSegment>,
    pub statistics: GenerationStatistics,
    #[serde(default)]
    pub skipped_rooms: Vec<SkippedRoom>,
}

impl GenerationResult {
    fn empty(status: GenerationStatus, rooms_considered: usize, rooms_suitable: usize) -> Self {
        Self {
            status,
            message: status.to_string(),
            zones: Vec::new(),
            corridors: Vec::new(),
            statistics: GenerationStatistics {
                rooms_considered,
                rooms_suitable,
                ..Default::default()
            },
            skipped_rooms: Vec::new(),
        }
    }
}

/// Owns the catalog and config for a run; one instance per concurrent caller
pub struct GenerationPipeline {
    catalog: ZoneCatalog,
    config: GenerationConfig,
}

impl GenerationPipeline {
    pub fn new(catalog: ZoneCatalog, config: GenerationConfig) -> Self {
        Self { catalog, config }
    }

    /// Build a pipeline after checking the config and that every zone type
    /// named in `type_sequences` exists in the catalog
    pub fn try_new(catalog: ZoneCatalog, config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        for (room_type, sequence) in &config.type_sequences {
            for name in sequence {
                catalog.require(name).map_err(|e| {
                    warn!(room_type = %room_type, zone_type = %name, "type sequence names an unknown zone type");
                    e
                })?;
            }
        }
        Ok(Self::new(catalog, config))
    }

    pub fn with_defaults() -> Self {
        Self::new(ZoneCatalog::with_defaults(), GenerationConfig::default())
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// Generate a layout for already-normalized rooms
    pub fn generate(&self, rooms: &[Room]) -> GenerationResult {
        let placer = GridPlacer::new(&self.catalog, &self.config);
        let validator = ComplianceValidator::new(&self.config.architectural);

        let suitable: Vec<&Room> = rooms.iter().filter(|r| placer.is_suitable(r)).collect();
        if suitable.is_empty() {
            info!(rooms = rooms.len(), "no suitable rooms");
            return GenerationResult::empty(GenerationStatus::NoSuitableRooms, rooms.len(), 0);
        }

        let place_room = |room: &&Room| -> Vec<PlacedZone> {
            let mut zones = placer.place(room);
            validator.validate_all(&mut zones, room);
            debug!(room = %room.id, zones = zones.len(), "room placed");
            zones
        };

        // PARALLEL: rooms are independent; collect keeps input order
        let per_room: Vec<Vec<PlacedZone>> = if suitable.len() >= self.config.parallel_threshold {
            suitable.par_iter().map(place_room).collect()
        } else {
            suitable.iter().map(place_room).collect()
        };
        let zones: Vec<PlacedZone> = per_room.into_iter().flatten().collect();

        if zones.is_empty() {
            info!(rooms = suitable.len(), "suitable rooms produced no zones");
            return GenerationResult::empty(
                GenerationStatus::NoZonesGenerated,
                rooms.len(),
                suitable.len(),
            );
        }

        // Jittered zones are scored and validated again at their new position
        let mut rooms_by_id: AHashMap<&str, &Room> = AHashMap::with_capacity(suitable.len());
        for room in &suitable {
            rooms_by_id.entry(room.id.as_str()).or_insert(*room);
        }
        let accessibility_zone = self.config.architectural.accessibility_zone;
        let rescore = |zone: &mut PlacedZone| {
            let Some(room) = rooms_by_id.get(zone.room_id.as_str()) else {
                return;
            };
            let center = zone.center();
            zone.accessibility = scoring::accessibility(center, &zone.bbox, room, accessibility_zone);
            zone.efficiency_score = scoring::efficiency_score(center, room);
            zone.validation = validator.validate(zone, room);
        };

        let mut optimizer = PlacementOptimizer::new(self.config.min_distance, self.config.seed);
        let zones = optimizer.optimize_with(zones, self.config.optimization_objective, rescore);
        if zones.is_empty() {
            return GenerationResult::empty(
                GenerationStatus::NoZonesGenerated,
                rooms.len(),
                suitable.len(),
            );
        }

        let floor = suitable
            .iter()
            .map(|r| r.bbox)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default();
        let corridors = CorridorSynthesizer::new(self.config.corridor_router).synthesize(
            &zones,
            &floor,
            self.config.effective_corridor_width(),
        );

        let statistics =
            GenerationStatistics::compute(rooms.len(), suitable.len(), &zones, &corridors);
        info!(
            zones = statistics.total_zones,
            valid = statistics.valid_zones,
            corridors = statistics.corridor_count,
            objective = ?self.config.optimization_objective,
            "generation complete"
        );

        GenerationResult {
            status: GenerationStatus::Completed,
            message: GenerationStatus::Completed.to_string(),
            zones,
            corridors,
            statistics,
            skipped_rooms: Vec::new(),
        }
    }

    /// Normalize raw room descriptions, skip the malformed ones, then generate
    pub fn generate_from_inputs(&self, inputs: &[RoomInput]) -> GenerationResult {
        let (rooms, errors) = RoomAdapter::normalize_all(inputs);

        let skipped: Vec<SkippedRoom> = errors
            .into_iter()
            .map(|e| {
                warn!(error = %e, "skipping room");
                match e {
                    LayoutError::InvalidRoomData { room_id, reason } => {
                        SkippedRoom { room_id, reason }
                    }
                    other => SkippedRoom {
                        room_id: String::new(),
                        reason: other.to_string(),
                    },
                }
            })
            .collect();

        let mut result = self.generate(&rooms);
        result.statistics.rooms_skipped = skipped.len();
        result.skipped_rooms = skipped;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BBox;
    use crate::room::RoomType;

    #[test]
    fn test_status_messages() {
        assert!(GenerationStatus::Completed.is_success());
        assert!(!GenerationStatus::NoSuitableRooms.is_success());
        assert!(GenerationStatus::NoSuitableRooms.to_string().contains("suitability"));
    }

    #[test]
    fn test_skipped_rooms_reported() {
        let pipeline = GenerationPipeline::with_defaults();
        let inputs = vec![
            RoomInput {
                id: "ok".into(),
                room_type: RoomType::Office,
                bbox: Some(BBox::new(0.0, 0.0, 12.0, 10.0)),
                ..Default::default()
            },
            RoomInput {
                id: "broken".into(),
                bbox: Some(BBox::new(0.0, 0.0, -3.0, 10.0)),
                ..Default::default()
            },
        ];

        let result = pipeline.generate_from_inputs(&inputs);
        assert_eq!(result.status, GenerationStatus::Completed);
        assert_eq!(result.skipped_rooms.len(), 1);
        assert_eq!(result.skipped_rooms[0].room_id, "broken");
        assert_eq!(result.statistics.rooms_skipped, 1);
        assert!(!result.zones.is_empty());
    }

    #[test]
    fn test_comfort_zones_scored_at_final_position() {
        let rooms = vec![
            RoomAdapter::from_bounds("a", RoomType::OpenOffice, BBox::new(0.0, 0.0, 20.0, 15.0)).unwrap(),
            RoomAdapter::from_bounds("b", RoomType::Office, BBox::new(21.0, 0.0, 27.0, 6.0)).unwrap(),
        ];
        let config = GenerationConfig {
            optimization_objective: crate::core::config::Objective::Comfort,
            seed: 11,
            ..Default::default()
        };
        let validator = ComplianceValidator::new(&config.architectural);
        let result = GenerationPipeline::new(ZoneCatalog::with_defaults(), config.clone()).generate(&rooms);
        assert!(!result.zones.is_empty());

        for zone in &result.zones {
            let room = rooms.iter().find(|r| r.id == zone.room_id).unwrap();
            let center = zone.center();
            assert_eq!(zone.validation, validator.validate(zone, room), "{}", zone.id);
            assert_eq!(zone.efficiency_score, scoring::efficiency_score(center, room));
            assert_eq!(
                zone.accessibility,
                scoring::accessibility(center, &zone.bbox, room, config.architectural.accessibility_zone)
            );
        }
    }

    #[test]
    fn test_try_new_rejects_unknown_sequence_names() {
        let mut config = GenerationConfig::default();
        config
            .type_sequences
            .insert("office".into(), vec!["work".into(), "sauna".into()]);

        let err = GenerationPipeline::try_new(ZoneCatalog::with_defaults(), config).err();
        assert!(matches!(err, Some(LayoutError::UnknownZoneType(name)) if name == "sauna"));

        let mut config = GenerationConfig::default();
        config.type_sequences.insert("office".into(), vec!["focus".into()]);
        assert!(GenerationPipeline::try_new(ZoneCatalog::with_defaults(), config).is_ok());

        let bad = GenerationConfig { min_distance: 0.0, ..Default::default() };
        assert!(matches!(
            GenerationPipeline::try_new(ZoneCatalog::with_defaults(), bad).err(),
            Some(LayoutError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let rooms: Vec<Room> = (0..4)
            .map(|i| {
                let x = i as f64 * 15.0;
                RoomAdapter::from_bounds(
                    &format!("room_{}", i),
                    RoomType::Workspace,
                    BBox::new(x, 0.0, x + 14.0, 12.0),
                )
                .unwrap()
            })
            .collect();

        let sequential = GenerationPipeline::new(
            ZoneCatalog::with_defaults(),
            GenerationConfig { parallel_threshold: usize::MAX, ..Default::default() },
        )
        .generate(&rooms);
        let parallel = GenerationPipeline::new(
            ZoneCatalog::with_defaults(),
            GenerationConfig { parallel_threshold: 0, ..Default::default() },
        )
        .generate(&rooms);

        assert_eq!(sequential, parallel);
    }
}
