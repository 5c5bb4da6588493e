use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::item::ItemStack;
use crate::menu::schema::SlotSchema;

pub mod schema;
pub mod slot;
pub mod sync;

/// A double chest worth of positions.
pub const MENU_SIZE: usize = 54;

/// A player's trinket menu. Positions without a schema entry hold the
/// filler stack; the four armor positions mirror standard equipment while
/// the menu is open.
pub struct TrinketMenu {
    stacks: Vec<Arc<Mutex<ItemStack>>>,
}

impl TrinketMenu {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            stacks: (0..MENU_SIZE)
                .map(|_| Arc::new(Mutex::new(ItemStack::empty())))
                .collect(),
        })
    }

    pub const fn size(&self) -> usize {
        MENU_SIZE
    }

    pub fn get_stack(&self, slot: usize) -> Arc<Mutex<ItemStack>> {
        self.stacks[slot].clone()
    }

    pub async fn cloned_stack(&self, slot: usize) -> ItemStack {
        self.stacks[slot].lock().await.clone()
    }

    pub async fn set_stack(&self, slot: usize, stack: ItemStack) {
        *self.stacks[slot].lock().await = stack;
    }

    /// Puts the filler into every position the schema does not define.
    pub async fn fill_undefined(&self, schema: &SlotSchema, filler: &ItemStack) {
        for slot in 0..MENU_SIZE {
            if !schema.is_defined(slot) {
                self.set_stack(slot, filler.clone()).await;
            }
        }
    }
}

/// Owns one menu per player, created lazily on first open and retained for
/// the rest of the server session so trinkets survive a reconnect.
pub struct MenuRegistry {
    menus: RwLock<HashMap<Uuid, Arc<TrinketMenu>>>,
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self {
            menus: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, player: Uuid) -> Option<Arc<TrinketMenu>> {
        self.menus.read().await.get(&player).cloned()
    }

    pub async fn get_or_create(&self, player: Uuid) -> Arc<TrinketMenu> {
        if let Some(menu) = self.get(player).await {
            return menu;
        }
        self.menus
            .write()
            .await
            .entry(player)
            .or_insert_with(TrinketMenu::new)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trinkets_config::MenuConfig;

    fn schema_with(slots: &[(&str, &str)]) -> SlotSchema {
        let mut menu = MenuConfig::default();
        for (index, category) in slots {
            menu.slots.insert((*index).to_string(), (*category).to_string());
        }
        SlotSchema::from_config(&menu)
    }

    #[tokio::test]
    async fn undefined_positions_hold_the_filler() {
        let schema = schema_with(&[("20", "ring")]);
        let filler = ItemStack::new("light_gray_stained_glass_pane", 1);
        let menu = TrinketMenu::new();
        menu.fill_undefined(&schema, &filler).await;

        assert!(menu.cloned_stack(0).await.is_similar(&filler));
        assert!(menu.cloned_stack(53).await.is_similar(&filler));
        // The defined position is left alone.
        assert!(menu.cloned_stack(20).await.is_empty());
    }

    #[tokio::test]
    async fn registry_returns_one_menu_per_player() {
        let registry = MenuRegistry::new();
        let player = Uuid::new_v4();

        assert!(registry.get(player).await.is_none());
        let first = registry.get_or_create(player).await;
        let second = registry.get_or_create(player).await;
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.get(player).await.is_some());
    }
}
