//! Rooms as the engine sees them
//!
//! External room descriptions come in many shapes; [`RoomAdapter`] turns
//! them into the canonical [`Room`], which is read-only afterwards.

mod adapter;

pub use adapter::{RoomAdapter, RoomInput};

use serde::{Deserialize, Serialize};

use crate::core::types::{BBox, Vec2, Vec3};
use crate::spatial;

/// Room classification as reported by the room source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Office,
    MeetingRoom,
    GeneralSpace,
    Workspace,
    OpenOffice,
    #[default]
    #[serde(other)]
    Other,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Office => "office",
            RoomType::MeetingRoom => "meeting_room",
            RoomType::GeneralSpace => "general_space",
            RoomType::Workspace => "workspace",
            RoomType::OpenOffice => "open_office",
            RoomType::Other => "other",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub center: Vec3,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    pub bbox: BBox,
    /// Implicitly closed outline, at least 3 vertices
    pub polygon: Vec<Vec2>,
    /// Egress points; empty means the entrance doubles as the only exit
    #[serde(default)]
    pub exits: Vec<Vec2>,
}

impl Room {
    /// Reference entrance at the middle of the left wall
    pub fn entrance(&self) -> Vec2 {
        Vec2::new(self.bbox.min_x, self.center.y)
    }

    /// Points a zone can evacuate to
    pub fn exit_points(&self) -> Vec<Vec2> {
        if self.exits.is_empty() {
            vec![self.entrance()]
        } else {
            self.exits.clone()
        }
    }

    /// Half of the longer side
    pub fn radius(&self) -> f64 {
        self.width.max(self.height) / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        spatial::contains_point(&self.polygon, point)
    }
}
