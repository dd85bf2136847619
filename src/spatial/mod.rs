//! Floor-plan geometry helpers

pub mod polygon;

pub use polygon::{contains_point, polygon_area, validate_polygon, PolygonIssue};
