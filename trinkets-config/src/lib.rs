use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod menu;
pub mod messages;
pub mod trinket;

pub use menu::MenuConfig;
pub use messages::Messages;
pub use trinket::{EffectConfig, TrinketConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The whole configuration tree.
///
/// Trinket catalogs live in top-level tables named `<category>_trinkets`,
/// one sub-table per item identifier.
#[derive(Deserialize, Default, Debug)]
pub struct TrinketsConfig {
    #[serde(default)]
    pub trinkets_menu: MenuConfig,
    #[serde(flatten)]
    pub categories: BTreeMap<String, BTreeMap<String, TrinketConfig>>,
}

impl TrinketsConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn category(&self, category: &str) -> Option<&BTreeMap<String, TrinketConfig>> {
        self.categories.get(&format!("{category}_trinkets"))
    }

    /// The catalog entry for an item in a category, or `None` when the item
    /// is not configured as a trinket there.
    pub fn trinket(&self, category: &str, item_id: &str) -> Option<&TrinketConfig> {
        self.category(category).and_then(|items| items.get(item_id))
    }
}

fn load_toml<T>(path: &Path) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        log::info!("{} not found; using defaults", path.display());
        return Ok(T::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trinket_catalog() {
        let config = TrinketsConfig::parse(
            r#"
            [trinkets_menu]
            title = "Trinkets"

            [trinkets_menu.slots]
            10 = "helmet"
            20 = "ring"

            [ring_trinkets.speed_ring.effects.speed]
            amplifier = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.trinkets_menu.title, "Trinkets");
        assert_eq!(config.trinkets_menu.slots.get("20").unwrap(), "ring");

        let trinket = config.trinket("ring", "speed_ring").unwrap();
        let effect = trinket.effects.get("speed").unwrap();
        assert_eq!(effect.amplifier, 1);
        assert!(effect.ambient);
        assert!(effect.particles);
        assert!(effect.has_icon);
    }

    #[test]
    fn unconfigured_lookups_are_none() {
        let config = TrinketsConfig::default();
        assert!(config.category("ring").is_none());
        assert!(config.trinket("ring", "speed_ring").is_none());
    }

    #[test]
    fn effect_flags_can_be_overridden() {
        let config = TrinketsConfig::parse(
            r#"
            [belt_trinkets.iron_belt.effects.resistance]
            amplifier = 2
            ambient = false
            particles = false
            has_icon = false
            "#,
        )
        .unwrap();

        let effect = config
            .trinket("belt", "iron_belt")
            .unwrap()
            .effects
            .get("resistance")
            .unwrap();
        assert_eq!(effect.amplifier, 2);
        assert!(!effect.ambient);
        assert!(!effect.particles);
        assert!(!effect.has_icon);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = TrinketsConfig::load(Path::new("does/not/exist.toml")).unwrap();
        assert!(config.categories.is_empty());
        assert_eq!(
            config.trinkets_menu.empty_slot,
            "light_gray_stained_glass_pane"
        );
    }
}
