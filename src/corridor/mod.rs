//! Corridor synthesis
//!
//! Connects every placed zone to a walkable network of rectangular strips.
//! Neither router searches around obstacles; they produce a fixed topology
//! over the zone set.

mod spanning_tree;
mod spine;

use geo::Area;
use serde::{Deserialize, Serialize};

use crate::core::config::{CorridorRouter, MIN_CORRIDOR_WIDTH};
use crate::core::types::{BBox, Vec2};
use crate::placement::PlacedZone;
use crate::spatial::polygon::to_geo_polygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorridorKind {
    Main,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorSegment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CorridorKind,
    pub width: f64,
    /// Footprint ring
    pub polygon: Vec<Vec2>,
    /// Centerline length (m)
    pub length: f64,
    /// Footprint area (m²)
    pub area: f64,
    /// Identifiers of the two things this segment joins
    pub connects: (String, String),
}

impl CorridorSegment {
    /// Strip of `width` centred on the line from `start` to `end`
    pub fn strip(
        id: impl Into<String>,
        kind: CorridorKind,
        start: Vec2,
        end: Vec2,
        width: f64,
        connects: (String, String),
    ) -> Self {
        let offset = (end - start).normalize().perp() * (width / 2.0);
        let polygon = vec![start + offset, end + offset, end - offset, start - offset];
        let area = to_geo_polygon(&polygon).unsigned_area();
        Self {
            id: id.into(),
            kind,
            width,
            length: start.distance(&end),
            area,
            polygon,
            connects,
        }
    }
}

/// Builds the corridor network for one floor
pub struct CorridorSynthesizer {
    router: CorridorRouter,
}

impl CorridorSynthesizer {
    pub fn new(router: CorridorRouter) -> Self {
        Self { router }
    }

    /// Connect `zones`; `width` is raised to the 1.8 m floor when smaller
    pub fn synthesize(&self, zones: &[PlacedZone], bounds: &BBox, width: f64) -> Vec<CorridorSegment> {
        let width = width.max(MIN_CORRIDOR_WIDTH);
        if zones.len() < 2 {
            return Vec::new();
        }

        match self.router {
            CorridorRouter::Spine => spine::route(zones, bounds, width),
            CorridorRouter::SpanningTree => spanning_tree::route(zones, width),
        }
    }
}

impl Default for CorridorSynthesizer {
    fn default() -> Self {
        Self::new(CorridorRouter::Spine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Dimensions, Vec3};

    #[test]
    fn test_strip_footprint() {
        let s = CorridorSegment::strip(
            "c",
            CorridorKind::Main,
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            2.0,
            ("a".into(), "b".into()),
        );
        assert_eq!(s.length, 10.0);
        assert!((s.area - 20.0).abs() < 1e-9);
        let ys: Vec<f64> = s.polygon.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_fewer_than_two_zones_yield_nothing() {
        let one = vec![PlacedZone::new("a", "r", "work", Vec3::default(), Dimensions::new(1.0, 1.0))];
        for router in [CorridorRouter::Spine, CorridorRouter::SpanningTree] {
            let out = CorridorSynthesizer::new(router).synthesize(&one, &BBox::default(), 2.0);
            assert!(out.is_empty());
        }
    }
}
