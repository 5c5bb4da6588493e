use crate::item::EquipmentType;
use crate::menu::TrinketMenu;
use crate::menu::schema::SlotSchema;
use crate::player::TrinketPlayer;

/// Snapshots the player's standard equipment into the schema-bound armor
/// positions. Taken on open; whatever the menu held there is overwritten.
pub async fn load_from_equipment(player: &dyn TrinketPlayer, menu: &TrinketMenu, schema: &SlotSchema) {
    for kind in EquipmentType::ALL {
        if let Some(slot) = schema.armor_slot(kind) {
            menu.set_stack(slot, player.equipment(kind).await).await;
        }
    }
}

/// Copies the armor positions back onto the player's standard equipment.
/// Performed on menu close and on disconnect.
pub async fn flush_to_equipment(player: &dyn TrinketPlayer, menu: &TrinketMenu, schema: &SlotSchema) {
    for kind in EquipmentType::ALL {
        if let Some(slot) = schema.armor_slot(kind) {
            player.set_equipment(kind, menu.cloned_stack(slot).await).await;
        }
    }
}
