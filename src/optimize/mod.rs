//! Cross-room re-ranking of placed zones
//!
//! One objective is applied to the full zone set of a floor. Only the
//! density pass can drop zones; the other passes re-score, re-order and (for
//! comfort) nudge positions.
//!
//! The density pass is a greedy scan in input order. It is order-dependent
//! and does not search for the largest compatible subset.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::Objective;
use crate::core::types::{BBox, Vec2};
use crate::placement::{AccessRating, PlacedZone};

/// Largest comfort jitter along each axis (m)
pub const MAX_JITTER: f64 = 0.3;

pub struct PlacementOptimizer {
    min_distance: f64,
    rng: ChaCha8Rng,
}

impl PlacementOptimizer {
    pub fn new(min_distance: f64, seed: u64) -> Self {
        Self {
            min_distance,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn optimize(&mut self, zones: Vec<PlacedZone>, objective: Objective) -> Vec<PlacedZone> {
        self.optimize_with(zones, objective, |_| {})
    }

    /// Like `optimize`, calling `rescore` on every zone the comfort pass
    /// moves, before its comfort score is taken.
    pub fn optimize_with<F>(
        &mut self,
        zones: Vec<PlacedZone>,
        objective: Objective,
        rescore: F,
    ) -> Vec<PlacedZone>
    where
        F: FnMut(&mut PlacedZone),
    {
        match objective {
            Objective::Density => self.optimize_density(zones),
            Objective::Comfort => self.optimize_comfort(zones, rescore),
            Objective::Efficiency => Self::optimize_efficiency(zones),
            Objective::Balanced => Self::optimize_balanced(zones),
        }
    }

    /// Keep a zone only if it is far enough from every zone kept so far
    fn optimize_density(&self, zones: Vec<PlacedZone>) -> Vec<PlacedZone> {
        let mut kept: Vec<PlacedZone> = Vec::with_capacity(zones.len());
        for zone in zones {
            if kept.iter().all(|k| k.distance_to(&zone) >= self.min_distance) {
                kept.push(zone);
            }
        }
        for zone in &mut kept {
            zone.objective_score = zone.efficiency_score;
        }
        sort_by_score(&mut kept);
        kept
    }

    fn optimize_comfort<F>(&mut self, mut zones: Vec<PlacedZone>, mut rescore: F) -> Vec<PlacedZone>
    where
        F: FnMut(&mut PlacedZone),
    {
        for zone in &mut zones {
            let dx = self.rng.gen_range(-MAX_JITTER..=MAX_JITTER);
            let dy = self.rng.gen_range(-MAX_JITTER..=MAX_JITTER);
            let target = zone.center() + Vec2::new(dx, dy);
            let target = match zone.envelope {
                Some(envelope) => clamp_center(target, zone, &envelope),
                None => target,
            };
            zone.move_to(target);
            rescore(zone);
            zone.objective_score = comfort_score(zone);
        }
        sort_by_score(&mut zones);
        zones
    }

    fn optimize_efficiency(mut zones: Vec<PlacedZone>) -> Vec<PlacedZone> {
        for zone in &mut zones {
            zone.efficiency_score = blended_efficiency(zone);
            zone.objective_score = zone.efficiency_score;
        }
        sort_by_score(&mut zones);
        zones
    }

    fn optimize_balanced(mut zones: Vec<PlacedZone>) -> Vec<PlacedZone> {
        for zone in &mut zones {
            zone.objective_score = 0.4 * zone.efficiency_score
                + 0.3 * comfort_score(zone)
                + 0.3 * zone.validation.score;
        }
        sort_by_score(&mut zones);
        zones
    }
}

pub fn comfort_score(zone: &PlacedZone) -> f64 {
    0.4 * zone.accessibility.proximity_score + 0.6 * zone.efficiency_score
}

/// Base efficiency blended with type priority and an accessibility bonus
pub fn blended_efficiency(zone: &PlacedZone) -> f64 {
    let bonus = match zone.accessibility.rating {
        AccessRating::Excellent => 1.0,
        AccessRating::Good => 0.6,
        AccessRating::Fair => 0.2,
    };
    let priority = zone.priority.clamp(0.0, 1.0);
    (0.7 * zone.efficiency_score + 0.2 * priority + 0.1 * bonus).clamp(0.0, 1.0)
}

/// Stable descending sort on `objective_score`
fn sort_by_score(zones: &mut [PlacedZone]) {
    zones.sort_by_key(|z| Reverse(OrderedFloat(z.objective_score)));
}

/// Keep the whole footprint inside `envelope`
fn clamp_center(target: Vec2, zone: &PlacedZone, envelope: &BBox) -> Vec2 {
    let hw = zone.dimensions.width / 2.0;
    let hh = zone.dimensions.height / 2.0;
    let clamp = |v: f64, lo: f64, hi: f64| if lo > hi { (lo + hi) / 2.0 } else { v.clamp(lo, hi) };
    Vec2::new(
        clamp(target.x, envelope.min_x + hw, envelope.max_x - hw),
        clamp(target.y, envelope.min_y + hh, envelope.max_y - hh),
    )
}
