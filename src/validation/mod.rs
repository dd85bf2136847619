//! Compliance validation for placed zones
//!
//! A failed check is data, not an error: the zone keeps its place in the
//! output with `is_valid == false` and the reasons attached.

mod compliance;

pub use compliance::{
    ComplianceValidator, ACCESSIBILITY_PENALTY, CLEARANCE_PENALTY, EGRESS_PENALTY,
};

use serde::{Deserialize, Serialize};

use crate::placement::PlacedZone;

/// Overlap slack so zones that merely touch are not reported (m)
const OVERLAP_TOLERANCE: f64 = 0.01;

/// Outcome of validating one zone.
///
/// Built through `add_error`/`add_warning`, which keep
/// `is_valid == errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Product of the penalties of every failed check, in [0, 1]
    pub score: f64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            score: 1.0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String, penalty: f64) {
        self.errors.push(message);
        self.score *= penalty;
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, message: String, penalty: f64) {
        self.warnings.push(message);
        self.score *= penalty;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Pairs of zones whose footprints overlap
pub fn overlapping_pairs(zones: &[PlacedZone]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for i in 0..zones.len() {
        for j in (i + 1)..zones.len() {
            if zones[i].bbox.overlaps(&zones[j].bbox, OVERLAP_TOLERANCE) {
                pairs.push((zones[i].id.clone(), zones[j].id.clone()));
            }
        }
    }
    pairs
}
