//! Horizontal spine with vertical connectors

use super::{CorridorKind, CorridorSegment};
use crate::core::types::{BBox, Vec2};
use crate::placement::PlacedZone;

/// Spine overhang past the outermost zones (m)
const SPINE_PADDING: f64 = 1.0;
pub(super) const MAIN_ID: &str = "corridor_main";

/// One main strip across the zone extent at its vertical midline, plus a
/// connector to every zone at an even index.
pub(super) fn route(zones: &[PlacedZone], bounds: &BBox, width: f64) -> Vec<CorridorSegment> {
    let Some(extent) = zones.iter().map(|z| z.bbox).reduce(|a, b| a.union(&b)) else {
        return Vec::new();
    };
    let mid_y = extent.center().y;

    let mut start_x = extent.min_x - SPINE_PADDING;
    let mut end_x = extent.max_x + SPINE_PADDING;
    // Stay on the floor when the floor outline is known
    if bounds.contains_box(&extent) {
        start_x = start_x.max(bounds.min_x);
        end_x = end_x.min(bounds.max_x);
    }

    let by_x = |a: &&PlacedZone, b: &&PlacedZone| a.position.x.total_cmp(&b.position.x);
    let west = zones.iter().min_by(by_x).map(|z| z.id.clone()).unwrap_or_default();
    let east = zones.iter().max_by(by_x).map(|z| z.id.clone()).unwrap_or_default();

    let mut segments = Vec::with_capacity(1 + zones.len().div_ceil(2));
    segments.push(CorridorSegment::strip(
        MAIN_ID,
        CorridorKind::Main,
        Vec2::new(start_x, mid_y),
        Vec2::new(end_x, mid_y),
        width,
        (west, east),
    ));

    for zone in zones.iter().step_by(2) {
        let x = zone.position.x;
        let far_y = if zone.position.y >= mid_y {
            zone.bbox.max_y
        } else {
            zone.bbox.min_y
        };
        segments.push(CorridorSegment::strip(
            format!("corridor_{}", zone.id),
            CorridorKind::Secondary,
            Vec2::new(x, mid_y),
            Vec2::new(x, far_y),
            width,
            (MAIN_ID.to_string(), zone.id.clone()),
        ));
    }

    segments
}
