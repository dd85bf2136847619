//! Zone catalog - the registry of îlot types the placer can use
//!
//! The catalog is built once and shared read-only between pipeline runs.

mod profile;

pub use profile::ZoneTypeProfile;

use ahash::AHashMap;
use serde::Deserialize;

use crate::core::error::{LayoutError, Result};
use crate::core::types::Dimensions;

/// Catalog of all available zone types
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    profiles: Vec<ZoneTypeProfile>,
    by_name: AHashMap<String, usize>,
}

impl ZoneCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in office furniture profiles
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        let defaults = [
            ("work", 3.0, 2.0, 4, 1.0, "#4a90d9", &["desk", "chair", "monitor"][..]),
            ("focus", 2.0, 2.0, 1, 0.9, "#7b68ee", &["desk", "chair", "acoustic_panel"][..]),
            ("meeting", 4.0, 3.0, 8, 0.8, "#e67e22", &["table", "chair", "screen"][..]),
            ("collaboration", 3.5, 2.5, 6, 0.85, "#27ae60", &["table", "whiteboard"][..]),
            ("social", 3.5, 3.0, 6, 0.6, "#f1c40f", &["sofa", "low_table"][..]),
            ("break", 3.0, 2.5, 4, 0.5, "#95a5a6", &["counter", "stool"][..]),
        ];

        for (name, width, height, capacity, priority, color, equipment) in defaults {
            // Names above are unique, so insertion cannot fail
            let _ = catalog.add(ZoneTypeProfile {
                name: name.into(),
                base_size: Dimensions::new(width, height),
                capacity,
                priority,
                color: color.into(),
                equipment: equipment.iter().map(|s| s.to_string()).collect(),
            });
        }

        catalog
    }

    /// Add a profile; names must be unique
    pub fn add(&mut self, profile: ZoneTypeProfile) -> Result<()> {
        if profile.base_size.width <= 0.0 || profile.base_size.height <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "zone type '{}' has non-positive size {}x{}",
                profile.name, profile.base_size.width, profile.base_size.height
            )));
        }
        if self.by_name.contains_key(&profile.name) {
            return Err(LayoutError::InvalidConfig(format!(
                "duplicate zone type '{}'",
                profile.name
            )));
        }
        self.by_name.insert(profile.name.clone(), self.profiles.len());
        self.profiles.push(profile);
        Ok(())
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Option<&ZoneTypeProfile> {
        self.by_name.get(name).map(|&i| &self.profiles[i])
    }

    /// Like `get`, but an unknown name is an error
    pub fn require(&self, name: &str) -> Result<&ZoneTypeProfile> {
        self.get(name)
            .ok_or_else(|| LayoutError::UnknownZoneType(name.to_string()))
    }

    /// All profiles in insertion order
    pub fn all(&self) -> &[ZoneTypeProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Load a catalog from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string with `[[profiles]]` entries
    pub fn parse_toml(content: &str) -> Result<Self> {
        let data: TomlCatalog = toml::from_str(content)?;
        let mut catalog = Self::new();
        for profile in data.profiles {
            catalog.add(profile)?;
        }
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    profiles: Vec<ZoneTypeProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_sequence_types() {
        let catalog = ZoneCatalog::with_defaults();
        for name in ["work", "focus", "meeting", "collaboration", "social", "break"] {
            assert!(catalog.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(catalog.get("meeting").unwrap().capacity, 8);
    }

    #[test]
    fn test_require_unknown() {
        let catalog = ZoneCatalog::with_defaults();
        assert!(matches!(
            catalog.require("sauna"),
            Err(LayoutError::UnknownZoneType(_))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let catalog = ZoneCatalog::parse_toml(
            r##"
            [[profiles]]
            name = "lab"
            base_size = { width = 5.0, height = 4.0 }
            capacity = 3
            priority = 0.7
            color = "#ff0000"
            equipment = ["bench"]

            [[profiles]]
            name = "phone"
            base_size = { width = 1.2, height = 1.2 }
            capacity = 1
            priority = 0.4
            "##,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("lab").unwrap().footprint_area(), 20.0);
        assert!(catalog.get("phone").unwrap().equipment.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = ZoneCatalog::parse_toml(
            r#"
            [[profiles]]
            name = "a"
            base_size = { width = 1.0, height = 1.0 }
            capacity = 1
            priority = 0.5

            [[profiles]]
            name = "a"
            base_size = { width = 2.0, height = 2.0 }
            capacity = 1
            priority = 0.5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));
    }
}
