use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid room data for '{room_id}': {reason}")]
    InvalidRoomData { room_id: String, reason: String },

    #[error("Unknown zone type: {0}")]
    UnknownZoneType(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    pub fn invalid_room(room_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRoomData {
            room_id: room_id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
