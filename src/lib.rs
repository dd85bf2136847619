//! Ilot Planner - zone packing and corridor synthesis for floor plans

pub mod catalog;
pub mod core;
pub mod corridor;
pub mod optimize;
pub mod pipeline;
pub mod placement;
pub mod room;
pub mod spatial;
pub mod validation;

pub use crate::catalog::{ZoneCatalog, ZoneTypeProfile};
pub use crate::core::config::{GenerationConfig, Objective};
pub use crate::core::error::{LayoutError, Result};
pub use crate::pipeline::{GenerationPipeline, GenerationResult, GenerationStatus};
pub use crate::room::{Room, RoomAdapter, RoomInput, RoomType};
