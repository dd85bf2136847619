//! Zone placement: grid layout, zone model and scoring

mod grid;
pub mod scoring;
mod zone;

pub use grid::{
    default_type_sequence, placement_envelope, GridLayout, GridPlacer, BOUNDARY_MARGIN,
    CIRCULATION_FACTOR, MIN_SUITABLE_AREA, MIN_SUITABLE_SIDE, STRUCTURAL_FACTOR,
};
pub use zone::{AccessRating, Accessibility, PathClearance, PlacedZone};
