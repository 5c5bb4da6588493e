use std::collections::BTreeMap;

use serde::Deserialize;

/// One catalog entry: the effects granted while the item sits in a slot of
/// its category.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct TrinketConfig {
    #[serde(default)]
    pub effects: BTreeMap<String, EffectConfig>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EffectConfig {
    pub amplifier: u8,
    pub ambient: bool,
    pub particles: bool,
    pub has_icon: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            amplifier: 0,
            ambient: true,
            particles: true,
            has_icon: true,
        }
    }
}
