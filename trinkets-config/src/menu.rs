use std::collections::BTreeMap;

use serde::Deserialize;

/// The `trinkets_menu` table: window title, the filler item shown in
/// positions without a slot definition, and the slot index -> category map.
///
/// Slot keys are written as strings in the file (`10 = "helmet"`); index
/// parsing and range checks happen when the schema is built.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    /// Filler item descriptor. Either a plain item name or `registry:<id>`
    /// to pull the item from the external item registry.
    pub empty_slot: String,
    pub slots: BTreeMap<String, String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            empty_slot: "light_gray_stained_glass_pane".to_string(),
            slots: BTreeMap::new(),
        }
    }
}
