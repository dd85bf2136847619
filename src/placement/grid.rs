//! Grid placement of zones inside a single room
//!
//! The grid is fully deterministic: identical rooms and configs produce
//! identical zones. Cells whose footprint would leave the room are skipped
//! and never backfilled, so a room may hold fewer zones than `max_zones`.

use tracing::{debug, warn};

use super::scoring;
use super::zone::PlacedZone;
use crate::catalog::{ZoneCatalog, ZoneTypeProfile};
use crate::core::config::GenerationConfig;
use crate::core::types::{BBox, Vec2, Vec3};
use crate::room::{Room, RoomType};

/// Share of floor lost to circulation
pub const CIRCULATION_FACTOR: f64 = 0.3;
/// Share of floor lost to columns, ducts and walls
pub const STRUCTURAL_FACTOR: f64 = 0.1;
/// Keep-out strip along every wall (m)
pub const BOUNDARY_MARGIN: f64 = 0.5;

/// Smallest room area considered for placement (m²)
pub const MIN_SUITABLE_AREA: f64 = 15.0;
/// Smallest room side considered for placement (m)
pub const MIN_SUITABLE_SIDE: f64 = 3.0;

/// Grid dimensions chosen for one room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub max_zones: usize,
    pub spacing: f64,
}

/// Places zones for one room at a time
pub struct GridPlacer<'a> {
    catalog: &'a ZoneCatalog,
    config: &'a GenerationConfig,
}

impl<'a> GridPlacer<'a> {
    pub fn new(catalog: &'a ZoneCatalog, config: &'a GenerationConfig) -> Self {
        Self { catalog, config }
    }

    /// Whether placement should be attempted at all
    pub fn is_suitable(&self, room: &Room) -> bool {
        self.config.suitable_room_types.contains(&room.room_type)
            && room.area >= MIN_SUITABLE_AREA
            && room.width >= MIN_SUITABLE_SIDE
            && room.height >= MIN_SUITABLE_SIDE
    }

    /// Zone type names to cycle through for this room
    pub fn determine_type_sequence(&self, room: &Room) -> Vec<String> {
        if let Some(sequence) = self.config.type_sequences.get(room.room_type.as_str()) {
            return sequence.clone();
        }
        default_type_sequence(room.room_type)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Floor area left after circulation and structure
    pub fn usable_area(room: &Room) -> f64 {
        room.area * (1.0 - CIRCULATION_FACTOR - STRUCTURAL_FACTOR)
    }

    /// Size the grid for a room and the profiles it will cycle through
    pub fn compute_grid(&self, room: &Room, profiles: &[&ZoneTypeProfile]) -> GridLayout {
        let spacing = self.config.min_distance;
        if profiles.is_empty() {
            return GridLayout { cols: 1, rows: 1, max_zones: 0, spacing };
        }

        let avg_zone_area =
            profiles.iter().map(|p| p.footprint_area()).sum::<f64>() / profiles.len() as f64;
        let mut max_zones = (Self::usable_area(room) / avg_zone_area).floor().max(0.0) as usize;

        let aspect_ratio = room.width / room.height;
        let mut cols = ((max_zones as f64 * aspect_ratio).sqrt().ceil() as usize).max(1);
        let mut rows = ((max_zones as f64 / cols as f64).ceil() as usize).max(1);

        // A cell must hold the smallest footprint plus spacing
        let min_width = profiles.iter().map(|p| p.base_size.width).fold(f64::INFINITY, f64::min);
        let min_height = profiles.iter().map(|p| p.base_size.height).fold(f64::INFINITY, f64::min);
        let (span_x, span_y) = usable_span(room, spacing);
        let max_cols = (span_x / (min_width + spacing)).floor().max(0.0) as usize;
        let max_rows = (span_y / (min_height + spacing)).floor().max(0.0) as usize;
        cols = cols.min(max_cols).max(1);
        rows = rows.min(max_rows).max(1);

        max_zones = max_zones.min(cols * rows);

        GridLayout { cols, rows, max_zones, spacing }
    }

    /// Center of a grid cell. Cells split the usable span evenly, which starts
    /// half a spacing inside the boundary margin.
    pub fn cell_center(room: &Room, grid: &GridLayout, row: usize, col: usize) -> Vec2 {
        let inset = edge_inset(grid.spacing);
        let (span_x, span_y) = usable_span(room, grid.spacing);
        let cell_w = span_x / grid.cols.max(1) as f64;
        let cell_h = span_y / grid.rows.max(1) as f64;
        Vec2::new(
            room.bbox.min_x + inset + (col as f64 + 0.5) * cell_w,
            room.bbox.min_y + inset + (row as f64 + 0.5) * cell_h,
        )
    }

    /// Footprint must stay inside the margin box and, optionally, the exact outline
    pub fn is_valid_position(&self, room: &Room, footprint: &BBox) -> bool {
        if !placement_envelope(room).contains_box(footprint) {
            return false;
        }
        if self.config.exact_polygon_check {
            return footprint.corners().iter().all(|&c| room.contains(c));
        }
        true
    }

    /// Resolve names to catalog profiles, dropping names the catalog lacks
    pub fn resolve_profiles(&self, room: &Room, names: &[String]) -> Vec<&'a ZoneTypeProfile> {
        names
            .iter()
            .filter_map(|name| {
                let profile = self.catalog.get(name);
                if profile.is_none() {
                    warn!(room = %room.id, zone_type = %name, "zone type not in catalog, skipped");
                }
                profile
            })
            .collect()
    }

    /// Place zones in a room. Unsuitable rooms yield nothing.
    pub fn place(&self, room: &Room) -> Vec<PlacedZone> {
        if !self.is_suitable(room) {
            debug!(room = %room.id, room_type = %room.room_type, "room not suitable");
            return Vec::new();
        }

        let names = self.determine_type_sequence(room);
        let profiles = self.resolve_profiles(room, &names);
        let grid = self.compute_grid(room, &profiles);
        debug!(
            room = %room.id,
            cols = grid.cols,
            rows = grid.rows,
            max_zones = grid.max_zones,
            "grid computed"
        );

        let envelope = placement_envelope(room);
        let mut zones = Vec::with_capacity(grid.max_zones);

        for index in 0..grid.max_zones {
            let row = index / grid.cols;
            let col = index % grid.cols;
            let profile = profiles[index % profiles.len()];

            let center = Self::cell_center(room, &grid, row, col);
            let footprint = BBox::around(center, profile.base_size);
            if !self.is_valid_position(room, &footprint) {
                debug!(room = %room.id, index, zone_type = %profile.name, "cell rejected");
                continue;
            }

            let mut zone = PlacedZone::new(
                format!("{}_{}_{}", room.id, profile.name, index),
                room.id.clone(),
                profile.name.clone(),
                Vec3::new(center.x, center.y, room.center.z),
                profile.base_size,
            );
            zone.capacity = profile.capacity;
            zone.priority = profile.priority;
            zone.accessibility = scoring::accessibility(
                center,
                &zone.bbox,
                room,
                self.config.architectural.accessibility_zone,
            );
            zone.efficiency_score = scoring::efficiency_score(center, room);
            zone.envelope = Some(envelope);
            zones.push(zone);
        }

        zones
    }
}

/// Built-in zone type cycle per room type
pub fn default_type_sequence(room_type: RoomType) -> &'static [&'static str] {
    match room_type {
        RoomType::Office => &["work", "focus", "meeting"],
        RoomType::MeetingRoom => &["meeting", "focus"],
        RoomType::GeneralSpace => &["work", "meeting", "social", "break"],
        RoomType::Workspace => &["work", "focus", "collaboration"],
        RoomType::OpenOffice => &["work", "collaboration", "social", "break"],
        RoomType::Other => &["work", "meeting"],
    }
}

/// Room bbox minus the boundary margin
pub fn placement_envelope(room: &Room) -> BBox {
    room.bbox.shrink(BOUNDARY_MARGIN)
}

/// Distance from a wall to the first cell edge
fn edge_inset(spacing: f64) -> f64 {
    BOUNDARY_MARGIN + spacing / 2.0
}

fn usable_span(room: &Room, spacing: f64) -> (f64, f64) {
    let inset = edge_inset(spacing);
    (
        (room.width - 2.0 * inset).max(0.0),
        (room.height - 2.0 * inset).max(0.0),
    )
}
