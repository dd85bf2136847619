//! Normalization of external room descriptions

use serde::{Deserialize, Serialize};

use super::{Room, RoomType};
use crate::core::error::{LayoutError, Result};
use crate::core::types::{BBox, Dimensions, Vec2, Vec3};
use crate::spatial;

/// Room as delivered by a room detector or a hand-drawn plan.
///
/// Geometry is taken from the first field present out of `polygon`, `bbox`,
/// or `center` + `width` + `height`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomInput {
    pub id: String,
    #[serde(rename = "type", alias = "room_type", default)]
    pub room_type: RoomType,
    #[serde(default)]
    pub center: Option<Vec3>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub bbox: Option<BBox>,
    #[serde(default)]
    pub polygon: Option<Vec<Vec2>>,
    #[serde(default)]
    pub exits: Vec<Vec2>,
}

pub struct RoomAdapter;

impl RoomAdapter {
    /// Build a canonical room, or fail with `InvalidRoomData`
    pub fn normalize(input: &RoomInput) -> Result<Room> {
        if input.id.trim().is_empty() {
            return Err(LayoutError::invalid_room("<unnamed>", "room id is empty"));
        }

        let z = input.center.map(|c| c.z).unwrap_or(0.0);

        let room = if let Some(polygon) = &input.polygon {
            Self::from_polygon(&input.id, input.room_type, polygon, z)?
        } else if let Some(bbox) = input.bbox {
            Self::rectangle(&input.id, input.room_type, bbox, input.area, z)?
        } else if let (Some(center), Some(width), Some(height)) =
            (input.center, input.width, input.height)
        {
            let bbox = BBox::around(center.xy(), Dimensions::new(width, height));
            Self::rectangle(&input.id, input.room_type, bbox, input.area, z)?
        } else {
            return Err(LayoutError::invalid_room(
                &input.id,
                "no polygon, bounding box or center/width/height",
            ));
        };

        Ok(Room {
            exits: input.exits.clone(),
            ..room
        })
    }

    /// Rectangular fallback room built from bounds alone
    pub fn from_bounds(id: &str, room_type: RoomType, bbox: BBox) -> Result<Room> {
        Self::rectangle(id, room_type, bbox, None, 0.0)
    }

    /// Normalize a batch, keeping the good rooms and reporting the bad ones
    pub fn normalize_all(inputs: &[RoomInput]) -> (Vec<Room>, Vec<LayoutError>) {
        let mut rooms = Vec::with_capacity(inputs.len());
        let mut errors = Vec::new();
        for input in inputs {
            match Self::normalize(input) {
                Ok(room) => rooms.push(room),
                Err(e) => errors.push(e),
            }
        }
        (rooms, errors)
    }

    fn from_polygon(id: &str, room_type: RoomType, polygon: &[Vec2], z: f64) -> Result<Room> {
        if let Some(issue) = spatial::validate_polygon(polygon).into_iter().next() {
            return Err(LayoutError::invalid_room(id, issue.to_string()));
        }

        let bbox = BBox::from_points(polygon)
            .ok_or_else(|| LayoutError::invalid_room(id, "polygon has no vertices"))?;
        let area = spatial::polygon_area(polygon);
        Self::check_dimensions(id, bbox.width(), bbox.height(), area)?;

        let c = bbox.center();
        Ok(Room {
            id: id.to_string(),
            room_type,
            center: Vec3::new(c.x, c.y, z),
            width: bbox.width(),
            height: bbox.height(),
            area,
            bbox,
            polygon: polygon.to_vec(),
            exits: Vec::new(),
        })
    }

    fn rectangle(
        id: &str,
        room_type: RoomType,
        bbox: BBox,
        area: Option<f64>,
        z: f64,
    ) -> Result<Room> {
        let width = bbox.width();
        let height = bbox.height();
        let area = area.unwrap_or(width * height);
        Self::check_dimensions(id, width, height, area)?;

        let c = bbox.center();
        Ok(Room {
            id: id.to_string(),
            room_type,
            center: Vec3::new(c.x, c.y, z),
            width,
            height,
            area,
            bbox,
            polygon: bbox.corners().to_vec(),
            exits: Vec::new(),
        })
    }

    fn check_dimensions(id: &str, width: f64, height: f64, area: f64) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(width) || !positive(height) {
            return Err(LayoutError::invalid_room(
                id,
                format!("non-positive dimensions {}x{}", width, height),
            ));
        }
        if !positive(area) {
            return Err(LayoutError::invalid_room(id, format!("non-positive area {}", area)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_fallback_polygon_is_clockwise_from_min() {
        let input = RoomInput {
            id: "r1".into(),
            room_type: RoomType::GeneralSpace,
            bbox: Some(BBox::new(0.0, 0.0, 20.0, 15.0)),
            area: Some(300.0),
            ..Default::default()
        };
        let room = RoomAdapter::normalize(&input).unwrap();

        assert_eq!(room.width, 20.0);
        assert_eq!(room.height, 15.0);
        assert_eq!(room.area, 300.0);
        assert_eq!(
            room.polygon,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 15.0),
                Vec2::new(20.0, 15.0),
                Vec2::new(20.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_polygon_is_authoritative() {
        let input = RoomInput {
            id: "l".into(),
            room_type: RoomType::OpenOffice,
            // Stale detector values are ignored
            area: Some(999.0),
            bbox: Some(BBox::new(0.0, 0.0, 1.0, 1.0)),
            polygon: Some(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 5.0),
                Vec2::new(5.0, 5.0),
                Vec2::new(5.0, 10.0),
                Vec2::new(0.0, 10.0),
            ]),
            ..Default::default()
        };
        let room = RoomAdapter::normalize(&input).unwrap();

        assert_eq!(room.bbox, BBox::new(0.0, 0.0, 10.0, 10.0));
        assert!((room.area - 75.0).abs() < 1e-9);
        assert_eq!(room.polygon.len(), 6);
    }

    #[test]
    fn test_center_and_size_fallback() {
        let input = RoomInput {
            id: "c".into(),
            center: Some(Vec3::new(5.0, 5.0, 3.0)),
            width: Some(4.0),
            height: Some(6.0),
            ..Default::default()
        };
        let room = RoomAdapter::normalize(&input).unwrap();
        assert_eq!(room.bbox, BBox::new(3.0, 2.0, 7.0, 8.0));
        assert_eq!(room.center.z, 3.0);
        assert_eq!(room.area, 24.0);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let two_vertices = RoomInput {
            id: "a".into(),
            polygon: Some(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]),
            ..Default::default()
        };
        let flat_box = RoomInput {
            id: "b".into(),
            bbox: Some(BBox::new(0.0, 0.0, 10.0, 0.0)),
            ..Default::default()
        };
        let negative_area = RoomInput {
            id: "c".into(),
            bbox: Some(BBox::new(0.0, 0.0, 10.0, 10.0)),
            area: Some(-1.0),
            ..Default::default()
        };
        let nothing = RoomInput {
            id: "d".into(),
            ..Default::default()
        };

        for input in [two_vertices, flat_box, negative_area, nothing] {
            let err = RoomAdapter::normalize(&input).unwrap_err();
            assert!(
                matches!(err, LayoutError::InvalidRoomData { ref room_id, .. } if *room_id == input.id),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn test_normalize_all_keeps_good_rooms() {
        let inputs = vec![
            RoomInput {
                id: "good".into(),
                bbox: Some(BBox::new(0.0, 0.0, 5.0, 5.0)),
                ..Default::default()
            },
            RoomInput {
                id: "bad".into(),
                ..Default::default()
            },
        ];
        let (rooms, errors) = RoomAdapter::normalize_all(&inputs);
        assert_eq!(rooms.len(), 1);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_deserialize_detector_json() {
        let input: RoomInput = serde_json::from_str(
            r#"{
                "id": "room_3",
                "type": "meeting_room",
                "bbox": { "min_x": 0.0, "min_y": 0.0, "max_x": 6.0, "max_y": 5.0 },
                "area": 30.0
            }"#,
        )
        .unwrap();
        assert_eq!(input.room_type, RoomType::MeetingRoom);
        assert!(RoomAdapter::normalize(&input).is_ok());
    }
}
