//! Polygon checks: vertex count, self-intersection, area, containment

use geo::{Area, Intersects, LineString, Point, Polygon};

use crate::core::types::Vec2;

/// Problems that make a room outline unusable
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonIssue {
    InsufficientVertices { count: usize, minimum: usize },
    SelfIntersecting,
    ZeroArea,
}

impl std::fmt::Display for PolygonIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolygonIssue::InsufficientVertices { count, minimum } => {
                write!(f, "polygon has {} vertices, needs at least {}", count, minimum)
            }
            PolygonIssue::SelfIntersecting => write!(f, "polygon edges cross each other"),
            PolygonIssue::ZeroArea => write!(f, "polygon encloses no area"),
        }
    }
}

/// Validate an implicitly closed ring. Either winding is accepted.
pub fn validate_polygon(vertices: &[Vec2]) -> Vec<PolygonIssue> {
    let mut issues = Vec::new();

    if vertices.len() < 3 {
        issues.push(PolygonIssue::InsufficientVertices {
            count: vertices.len(),
            minimum: 3,
        });
        return issues; // Can't do further checks
    }

    if is_self_intersecting(vertices) {
        issues.push(PolygonIssue::SelfIntersecting);
    }

    if polygon_area(vertices) <= f64::EPSILON {
        issues.push(PolygonIssue::ZeroArea);
    }

    issues
}

/// Unsigned area of an implicitly closed ring
pub fn polygon_area(vertices: &[Vec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    to_geo_polygon(vertices).unsigned_area()
}

/// Point-in-polygon test, boundary inclusive
pub fn contains_point(vertices: &[Vec2], point: Vec2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    to_geo_polygon(vertices).intersects(&Point::new(point.x, point.y))
}

/// Close the ring and convert to a geo polygon
pub fn to_geo_polygon(vertices: &[Vec2]) -> Polygon<f64> {
    let mut coords: Vec<(f64, f64)> = vertices.iter().map(|v| (v.x, v.y)).collect();
    if let Some(first) = coords.first().cloned() {
        coords.push(first);
    }
    Polygon::new(LineString::from(coords), vec![])
}

/// Check if polygon edges intersect each other (excluding adjacent edges)
fn is_self_intersecting(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return false; // Triangle can't self-intersect
    }

    for i in 0..n {
        let a1 = vertices[i];
        let a2 = vertices[(i + 1) % n];

        for j in (i + 2)..n {
            // Skip adjacent edges
            if j == (i + n - 1) % n {
                continue;
            }

            let b1 = vertices[j];
            let b2 = vertices[(j + 1) % n];

            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}

/// Proper intersection only; touching endpoints don't count
fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

fn cross(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
