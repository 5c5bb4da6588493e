use std::collections::{BTreeMap, HashMap};

use trinkets_config::MenuConfig;

use crate::item::EquipmentType;
use crate::menu::MENU_SIZE;

/// The static slot layout: position -> category, plus the positions bound
/// to the four standard equipment pieces. Rebuilt on reload, immutable in
/// between.
pub struct SlotSchema {
    slots: BTreeMap<usize, String>,
    armor: HashMap<EquipmentType, usize>,
}

impl SlotSchema {
    pub fn from_config(menu: &MenuConfig) -> Self {
        let mut slots = BTreeMap::new();
        for (key, category) in &menu.slots {
            match key.parse::<usize>() {
                Ok(index) if index < MENU_SIZE => {
                    slots.insert(index, category.clone());
                }
                _ => log::warn!("Ignoring invalid slot index {key:?} in trinkets_menu.slots"),
            }
        }

        // Lowest position wins when a category appears more than once.
        let mut armor = HashMap::new();
        for (&index, category) in &slots {
            if let Some(kind) = EquipmentType::from_category(category) {
                armor.entry(kind).or_insert(index);
            }
        }

        Self { slots, armor }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_defined(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    pub fn category(&self, index: usize) -> Option<&str> {
        self.slots.get(&index).map(String::as_str)
    }

    /// The position mirroring the given equipment piece, if the schema
    /// binds one.
    pub fn armor_slot(&self, kind: EquipmentType) -> Option<usize> {
        self.armor.get(&kind).copied()
    }

    /// The lowest position carrying the given category.
    pub fn slot_for(&self, category: &str) -> Option<usize> {
        self.slots
            .iter()
            .find(|(_, c)| c.as_str() == category)
            .map(|(&index, _)| index)
    }

    /// All defined positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots.iter().map(|(&index, category)| (index, category.as_str()))
    }
}
