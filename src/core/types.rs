//! Core type definitions used throughout the codebase
//!
//! All lengths are meters, in room-local floor coordinates with `y` growing
//! away from the left-bottom corner.

use serde::{Deserialize, Serialize};

/// 2D floor position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Travel distance along the floor axes
    pub fn manhattan(&self, other: &Self) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0001 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::default()
        }
    }

    /// Perpendicular vector (rotated 90° counter-clockwise)
    pub fn perp(&self) -> Self {
        Self { x: -self.y, y: self.x }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// 3D position; `z` is carried for the viewer and ignored by the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Floor projection
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Width (along x) and height (along y) of a footprint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Box of the given size centred on `center`
    pub fn around(center: Vec2, size: Dimensions) -> Self {
        let hw = size.width / 2.0;
        let hh = size.height / 2.0;
        Self::new(center.x - hw, center.y - hh, center.x + hw, center.y + hh)
    }

    /// Tight box around a point set; `None` for an empty set
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Shrink every side by `margin`. A box that would invert collapses to its center.
    pub fn shrink(&self, margin: f64) -> Self {
        let c = self.center();
        Self {
            min_x: (self.min_x + margin).min(c.x),
            min_y: (self.min_y + margin).min(c.y),
            max_x: (self.max_x - margin).max(c.x),
            max_y: (self.max_y - margin).max(c.y),
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Whether `other` lies fully inside (edges inclusive, with float slack)
    pub fn contains_box(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        other.min_x >= self.min_x - EPS
            && other.min_y >= self.min_y - EPS
            && other.max_x <= self.max_x + EPS
            && other.max_y <= self.max_y + EPS
    }

    /// Interior overlap; boxes sharing only an edge within `tolerance` do not count
    pub fn overlaps(&self, other: &Self, tolerance: f64) -> bool {
        let overlap_x = (self.max_x - tolerance) > other.min_x && (other.max_x - tolerance) > self.min_x;
        let overlap_y = (self.max_y - tolerance) > other.min_y && (other.max_y - tolerance) > self.min_y;
        overlap_x && overlap_y
    }

    /// Corners clockwise starting at `(min_x, min_y)`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x, self.min_y),
            Vec2::new(self.min_x, self.max_y),
            Vec2::new(self.max_x, self.max_y),
            Vec2::new(self.max_x, self.min_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_collapses_instead_of_inverting() {
        let b = BBox::new(0.0, 0.0, 2.0, 10.0).shrink(1.5);
        assert_eq!(b.min_x, 1.0);
        assert_eq!(b.max_x, 1.0);
        assert_eq!(b.min_y, 1.5);
        assert_eq!(b.max_y, 8.5);
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = BBox::new(0.0, 0.0, 2.0, 2.0);
        let b = BBox::new(2.0, 0.0, 4.0, 2.0);
        assert!(!a.overlaps(&b, 0.01));
        assert!(a.overlaps(&BBox::new(1.0, 1.0, 3.0, 3.0), 0.01));
    }

    #[test]
    fn test_corners_clockwise_from_min() {
        let c = BBox::new(0.0, 0.0, 4.0, 3.0).corners();
        assert_eq!(c[0], Vec2::new(0.0, 0.0));
        assert_eq!(c[1], Vec2::new(0.0, 3.0));
        assert_eq!(c[2], Vec2::new(4.0, 3.0));
        assert_eq!(c[3], Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_manhattan() {
        let a = Vec2::new(0.0, 0.0);
        assert_eq!(a.manhattan(&Vec2::new(3.0, -4.0)), 7.0);
        assert_eq!(a.distance(&Vec2::new(3.0, -4.0)), 5.0);
    }
}
