use trinkets_config::TrinketsConfig;

use crate::item::{EquipmentType, ItemRegistry, ItemStack};

/// Whether `stack` may occupy a slot of the given category.
///
/// Taking an item out is always legal, so the empty stack is always
/// accepted. Armor categories take only matching equipment; trinket
/// categories take only catalog items with an entry under
/// `<category>_trinkets`. Purely advisory — the click handler enforces the
/// verdict.
pub fn can_insert(
    category: &str,
    stack: &ItemStack,
    registry: &dyn ItemRegistry,
    config: &TrinketsConfig,
) -> bool {
    if stack.is_empty() {
        return true;
    }

    match EquipmentType::from_category(category) {
        Some(kind) => stack.equipment == Some(kind),
        None => match registry.id_of(stack) {
            Some(id) => config.trinket(category, &id).is_some(),
            None => false,
        },
    }
}
