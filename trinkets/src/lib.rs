pub mod command;
pub mod effect;
pub mod item;
pub mod manager;
pub mod menu;
pub mod player;

pub use manager::{ClickOutcome, TrinketManager};

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use tokio::sync::{Mutex, RwLock};
    use trinkets_config::{Messages, TrinketsConfig};
    use uuid::Uuid;

    use crate::effect::Effect;
    use crate::item::{EquipmentType, ItemRegistry, ItemStack};
    use crate::manager::ActiveConfig;
    use crate::player::TrinketPlayer;

    pub struct FakePlayer {
        pub uuid: Uuid,
        pub connected: AtomicBool,
        pub equipment: Mutex<HashMap<EquipmentType, ItemStack>>,
        pub applied: Mutex<Vec<Effect>>,
        pub messages: Mutex<Vec<String>>,
        pub permissions: Vec<String>,
    }

    impl FakePlayer {
        pub fn new() -> Arc<Self> {
            Self::with_permissions(&[])
        }

        pub fn with_permissions(nodes: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                uuid: Uuid::new_v4(),
                connected: AtomicBool::new(true),
                equipment: Mutex::new(HashMap::new()),
                applied: Mutex::new(Vec::new()),
                messages: Mutex::new(Vec::new()),
                permissions: nodes.iter().map(|node| (*node).to_string()).collect(),
            })
        }
    }

    #[async_trait]
    impl TrinketPlayer for FakePlayer {
        fn uuid(&self) -> Uuid {
            self.uuid
        }

        fn is_connected(&self) -> bool {
            self.connected.load(Ordering::Relaxed)
        }

        fn has_permission(&self, node: &str) -> bool {
            self.permissions.iter().any(|held| held == node)
        }

        async fn equipment(&self, kind: EquipmentType) -> ItemStack {
            self.equipment
                .lock()
                .await
                .get(&kind)
                .cloned()
                .unwrap_or_else(ItemStack::empty)
        }

        async fn set_equipment(&self, kind: EquipmentType, stack: ItemStack) {
            self.equipment.lock().await.insert(kind, stack);
        }

        async fn apply_effect(&self, effect: Effect) {
            self.applied.lock().await.push(effect);
        }

        async fn send_message(&self, message: &str) {
            self.messages.lock().await.push(message.to_string());
        }
    }

    /// Registry where an item is catalog-known iff its name is listed, and
    /// the name doubles as its identifier.
    pub struct FakeRegistry {
        ids: Vec<String>,
    }

    impl FakeRegistry {
        pub fn new(ids: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                ids: ids.iter().map(|id| (*id).to_string()).collect(),
            })
        }
    }

    impl ItemRegistry for FakeRegistry {
        fn exists(&self, stack: &ItemStack) -> bool {
            self.ids.iter().any(|id| id == &stack.name)
        }

        fn id_of(&self, stack: &ItemStack) -> Option<String> {
            self.exists(stack).then(|| stack.name.clone())
        }

        fn by_id(&self, id: &str) -> Option<ItemStack> {
            self.ids.iter().any(|known| known == id).then(|| ItemStack::new(id, 1))
        }
    }

    /// Armor on 10/19/28/37, a ring slot on 20, a speed ring with
    /// amplifier 1 and a luck ring.
    pub fn ring_config() -> TrinketsConfig {
        TrinketsConfig::parse(
            r#"
            [trinkets_menu]
            title = "Trinkets"

            [trinkets_menu.slots]
            10 = "helmet"
            19 = "chestplate"
            28 = "leggings"
            37 = "boots"
            20 = "ring"

            [ring_trinkets.speed_ring.effects.speed]
            amplifier = 1

            [ring_trinkets.luck_ring.effects.luck]
            "#,
        )
        .unwrap()
    }

    pub fn build_active(config: TrinketsConfig) -> ActiveConfig {
        let registry = FakeRegistry::new(&[]);
        ActiveConfig::new(config, Messages::default(), registry.as_ref())
    }

    pub fn active_config(config: TrinketsConfig) -> Arc<RwLock<ActiveConfig>> {
        Arc::new(RwLock::new(build_active(config)))
    }
}
