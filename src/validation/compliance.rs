//! Architectural compliance: clearance, accessibility, egress

use super::ValidationResult;
use crate::core::config::ArchitecturalConfig;
use crate::placement::scoring::wall_gaps;
use crate::placement::{PathClearance, PlacedZone};
use crate::room::Room;

/// Score multiplier for insufficient wall clearance
pub const CLEARANCE_PENALTY: f64 = 0.7;
/// Score multiplier for an accessibility shortfall (warning only)
pub const ACCESSIBILITY_PENALTY: f64 = 0.9;
/// Score multiplier for an exit that is too far away
pub const EGRESS_PENALTY: f64 = 0.5;

pub struct ComplianceValidator<'a> {
    rules: &'a ArchitecturalConfig,
}

impl<'a> ComplianceValidator<'a> {
    pub fn new(rules: &'a ArchitecturalConfig) -> Self {
        Self { rules }
    }

    /// Run the three checks against the room the zone was placed in
    pub fn validate(&self, zone: &PlacedZone, room: &Room) -> ValidationResult {
        let mut result = ValidationResult::new();

        let clearance = Self::clearance(zone, room);
        if clearance < self.rules.min_clearance {
            result.add_error(
                format!(
                    "clearance {:.2} m is below the required {:.2} m",
                    clearance, self.rules.min_clearance
                ),
                CLEARANCE_PENALTY,
            );
        }

        let access = &zone.accessibility;
        if !access.wheelchair_accessible || access.path_clearance != PathClearance::Adequate {
            let mut reasons = Vec::new();
            if !access.wheelchair_accessible {
                reasons.push("out of wheelchair range of the entrance");
            }
            if access.path_clearance != PathClearance::Adequate {
                reasons.push("no side with a wheelchair approach strip");
            }
            result.add_warning(
                format!("accessibility: {}", reasons.join(", ")),
                ACCESSIBILITY_PENALTY,
            );
        }

        let egress = Self::egress_distance(zone, room);
        if egress > self.rules.emergency_egress_max {
            result.add_error(
                format!(
                    "egress distance {:.1} m exceeds the {:.1} m limit",
                    egress, self.rules.emergency_egress_max
                ),
                EGRESS_PENALTY,
            );
        }

        result
    }

    /// Validate a room's zones in place
    pub fn validate_all(&self, zones: &mut [PlacedZone], room: &Room) {
        for zone in zones {
            zone.validation = self.validate(zone, room);
        }
    }

    /// Narrowest gap between the footprint and the room walls
    pub fn clearance(zone: &PlacedZone, room: &Room) -> f64 {
        wall_gaps(&zone.bbox, &room.bbox)
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    /// Travel distance from the zone center to the nearest exit
    pub fn egress_distance(zone: &PlacedZone, room: &Room) -> f64 {
        let center = zone.center();
        room.exit_points()
            .iter()
            .map(|exit| center.manhattan(exit))
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BBox, Dimensions, Vec2, Vec3};
    use crate::placement::scoring;
    use crate::room::{RoomAdapter, RoomType};

    fn room(w: f64, h: f64) -> Room {
        RoomAdapter::from_bounds("r", RoomType::Office, BBox::new(0.0, 0.0, w, h)).unwrap()
    }

    fn zone_in(room: &Room, x: f64, y: f64) -> PlacedZone {
        let mut z = PlacedZone::new("z", &room.id, "work", Vec3::new(x, y, 0.0), Dimensions::new(2.0, 2.0));
        z.accessibility = scoring::accessibility(Vec2::new(x, y), &z.bbox, room, 1.5);
        z
    }

    #[test]
    fn test_compliant_zone() {
        let r = room(10.0, 10.0);
        let rules = ArchitecturalConfig::default();
        let result = ComplianceValidator::new(&rules).validate(&zone_in(&r, 5.0, 5.0), &r);
        assert!(result.is_valid);
        assert_eq!(result.score, 1.0);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_clearance_failure() {
        let r = room(10.0, 10.0);
        let rules = ArchitecturalConfig::default();
        // Left edge sits 0.5 m from the wall
        let result = ComplianceValidator::new(&rules).validate(&zone_in(&r, 1.5, 5.0), &r);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!((result.score - CLEARANCE_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_egress_and_accessibility_failures() {
        // Entrance at (0, 5); zone center 40 m away
        let r = room(50.0, 10.0);
        let rules = ArchitecturalConfig::default();
        let result = ComplianceValidator::new(&rules).validate(&zone_in(&r, 40.0, 5.0), &r);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("egress"));
        assert_eq!(result.warnings.len(), 1);
        assert!((result.score - EGRESS_PENALTY * ACCESSIBILITY_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_warning_alone_keeps_zone_valid() {
        let r = room(10.0, 10.0);
        let rules = ArchitecturalConfig::default();
        let mut z = zone_in(&r, 5.0, 5.0);
        z.accessibility.path_clearance = PathClearance::Restricted;

        let result = ComplianceValidator::new(&rules).validate(&z, &r);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!((result.score - ACCESSIBILITY_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_declared_exit_shortens_egress() {
        let mut r = room(50.0, 10.0);
        r.exits = vec![Vec2::new(50.0, 5.0)];
        let z = zone_in(&r, 40.0, 5.0);
        assert_eq!(ComplianceValidator::egress_distance(&z, &r), 10.0);
    }
}
