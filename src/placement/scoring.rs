//! Efficiency and accessibility scoring shared by the placer and optimizer
//!
//! These are proxies, not physical models: lighting is approximated by the
//! distance to the nearest wall and ventilation is a constant.

use super::zone::{AccessRating, Accessibility, PathClearance};
use crate::core::types::{BBox, Vec2};
use crate::room::Room;

/// Fixed ventilation share of the efficiency score
pub const VENTILATION_SCORE: f64 = 0.8;

/// Distance from the nearest wall at which the lighting score saturates (m)
const LIGHTING_SATURATION: f64 = 3.0;

/// Entrance distance below which a zone counts as wheelchair reachable (m)
const WHEELCHAIR_RANGE: f64 = 20.0;
/// Entrance distance at which the proximity score reaches zero (m)
const PROXIMITY_RANGE: f64 = 30.0;
const EXCELLENT_RANGE: f64 = 10.0;

/// Mean of position, lighting and ventilation scores, in [0, 1]
pub fn efficiency_score(position: Vec2, room: &Room) -> f64 {
    let radius = room.radius();
    let position_score = if radius > 0.0 {
        (1.0 - position.distance(&room.center.xy()) / radius).max(0.0)
    } else {
        0.0
    };

    let b = &room.bbox;
    let nearest_wall = (position.x - b.min_x)
        .min(b.max_x - position.x)
        .min(position.y - b.min_y)
        .min(b.max_y - position.y)
        .max(0.0);
    let lighting_score = (nearest_wall / LIGHTING_SATURATION).min(1.0);

    (position_score + lighting_score + VENTILATION_SCORE) / 3.0
}

/// Accessibility relative to the room entrance
pub fn accessibility(
    position: Vec2,
    footprint: &BBox,
    room: &Room,
    accessibility_zone: f64,
) -> Accessibility {
    let distance = position.distance(&room.entrance());

    let rating = if distance < EXCELLENT_RANGE {
        AccessRating::Excellent
    } else if distance < WHEELCHAIR_RANGE {
        AccessRating::Good
    } else {
        AccessRating::Fair
    };

    let widest_gap = wall_gaps(footprint, &room.bbox)
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);
    let path_clearance = if widest_gap >= accessibility_zone {
        PathClearance::Adequate
    } else {
        PathClearance::Restricted
    };

    Accessibility {
        wheelchair_accessible: distance < WHEELCHAIR_RANGE,
        proximity_score: (1.0 - distance / PROXIMITY_RANGE).max(0.0),
        rating,
        path_clearance,
    }
}

/// Free distance between a footprint and the west, east, south and north walls
pub fn wall_gaps(footprint: &BBox, walls: &BBox) -> [f64; 4] {
    [
        footprint.min_x - walls.min_x,
        walls.max_x - footprint.max_x,
        footprint.min_y - walls.min_y,
        walls.max_y - footprint.max_y,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Dimensions;
    use crate::room::{RoomAdapter, RoomType};

    fn room(w: f64, h: f64) -> Room {
        RoomAdapter::from_bounds("r", RoomType::Office, BBox::new(0.0, 0.0, w, h)).unwrap()
    }

    #[test]
    fn test_efficiency_at_center_of_large_room() {
        let r = room(20.0, 20.0);
        // position 1.0, lighting 1.0 (10 m from walls), ventilation 0.8
        let score = efficiency_score(Vec2::new(10.0, 10.0), &r);
        assert!((score - 2.8 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_bounded() {
        let r = room(20.0, 10.0);
        for &(x, y) in &[(0.0, 0.0), (20.0, 10.0), (1.0, 9.0), (10.0, 5.0)] {
            let s = efficiency_score(Vec2::new(x, y), &r);
            assert!((0.0..=1.0).contains(&s), "{} out of range", s);
        }
    }

    #[test]
    fn test_accessibility_ratings() {
        let r = room(60.0, 10.0);
        let fp = |x: f64| BBox::around(Vec2::new(x, 5.0), Dimensions::new(2.0, 2.0));

        let near = accessibility(Vec2::new(5.0, 5.0), &fp(5.0), &r, 1.5);
        assert_eq!(near.rating, AccessRating::Excellent);
        assert!(near.wheelchair_accessible);
        assert!((near.proximity_score - (1.0 - 5.0 / 30.0)).abs() < 1e-9);

        let mid = accessibility(Vec2::new(15.0, 5.0), &fp(15.0), &r, 1.5);
        assert_eq!(mid.rating, AccessRating::Good);

        let far = accessibility(Vec2::new(40.0, 5.0), &fp(40.0), &r, 1.5);
        assert_eq!(far.rating, AccessRating::Fair);
        assert!(!far.wheelchair_accessible);
        assert_eq!(far.proximity_score, 0.0);
    }

    #[test]
    fn test_path_clearance_restricted_in_tight_room() {
        let r = room(4.0, 4.0);
        let fp = BBox::around(Vec2::new(2.0, 2.0), Dimensions::new(3.0, 3.0));
        let a = accessibility(Vec2::new(2.0, 2.0), &fp, &r, 1.5);
        assert_eq!(a.path_clearance, PathClearance::Restricted);
    }
}
