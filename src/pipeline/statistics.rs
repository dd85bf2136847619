use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corridor::CorridorSegment;
use crate::placement::PlacedZone;
use crate::validation;

/// Aggregate figures for one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStatistics {
    pub rooms_considered: usize,
    pub rooms_suitable: usize,
    /// Inputs rejected by the room adapter
    pub rooms_skipped: usize,

    pub total_zones: usize,
    pub valid_zones: usize,
    pub invalid_zones: usize,
    pub total_capacity: u64,
    /// Zone count per type name
    pub type_distribution: BTreeMap<String, usize>,
    pub average_capacity: f64,
    pub average_efficiency: f64,
    /// Mean validation score
    pub average_compliance: f64,
    pub overlapping_pairs: usize,

    pub corridor_count: usize,
    pub total_corridor_length: f64,
    pub total_corridor_area: f64,
}

impl GenerationStatistics {
    pub fn compute(
        rooms_considered: usize,
        rooms_suitable: usize,
        zones: &[PlacedZone],
        corridors: &[CorridorSegment],
    ) -> Self {
        let mut stats = Self {
            rooms_considered,
            rooms_suitable,
            total_zones: zones.len(),
            corridor_count: corridors.len(),
            ..Default::default()
        };

        for zone in zones {
            if zone.validation.is_valid {
                stats.valid_zones += 1;
            } else {
                stats.invalid_zones += 1;
            }
            stats.total_capacity += u64::from(zone.capacity);
            *stats.type_distribution.entry(zone.type_name.clone()).or_default() += 1;
        }

        if !zones.is_empty() {
            let n = zones.len() as f64;
            stats.average_capacity = stats.total_capacity as f64 / n;
            stats.average_efficiency = zones.iter().map(|z| z.efficiency_score).sum::<f64>() / n;
            stats.average_compliance = zones.iter().map(|z| z.validation.score).sum::<f64>() / n;
        }
        stats.overlapping_pairs = validation::overlapping_pairs(zones).len();

        stats.total_corridor_length = corridors.iter().map(|c| c.length).sum();
        stats.total_corridor_area = corridors.iter().map(|c| c.area).sum();

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Dimensions, Vec3};

    #[test]
    fn test_counts_and_averages() {
        let mut a = PlacedZone::new("a", "r", "work", Vec3::new(0.0, 0.0, 0.0), Dimensions::new(1.0, 1.0));
        a.capacity = 4;
        a.efficiency_score = 0.8;
        let mut b = PlacedZone::new("b", "r", "meeting", Vec3::new(5.0, 0.0, 0.0), Dimensions::new(1.0, 1.0));
        b.capacity = 8;
        b.efficiency_score = 0.4;
        b.validation.add_error("too far".into(), 0.5);

        let stats = GenerationStatistics::compute(2, 1, &[a, b], &[]);
        assert_eq!(stats.total_zones, 2);
        assert_eq!(stats.valid_zones, 1);
        assert_eq!(stats.invalid_zones, 1);
        assert_eq!(stats.total_capacity, 12);
        assert_eq!(stats.average_capacity, 6.0);
        assert!((stats.average_efficiency - 0.6).abs() < 1e-9);
        assert!((stats.average_compliance - 0.75).abs() < 1e-9);
        assert_eq!(stats.type_distribution["work"], 1);
        assert_eq!(stats.overlapping_pairs, 0);
    }

    #[test]
    fn test_capacity_total_does_not_wrap() {
        let zones: Vec<PlacedZone> = (0..3)
            .map(|i| {
                let mut z = PlacedZone::new(
                    format!("z{}", i),
                    "r",
                    "hall",
                    Vec3::new(i as f64 * 10.0, 0.0, 0.0),
                    Dimensions::new(1.0, 1.0),
                );
                z.capacity = u32::MAX;
                z
            })
            .collect();

        let stats = GenerationStatistics::compute(1, 1, &zones, &[]);
        assert_eq!(stats.total_capacity, 3 * u64::from(u32::MAX));
        assert_eq!(stats.average_capacity, u32::MAX as f64);
    }
}
