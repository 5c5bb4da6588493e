use std::sync::Arc;

use tokio::sync::RwLock;
use trinkets_config::{Messages, TrinketsConfig};

use crate::effect::task::EffectScheduler;
use crate::item::{EquipmentType, ItemRegistry, ItemStack};
use crate::menu::schema::SlotSchema;
use crate::menu::{MenuRegistry, TrinketMenu, slot, sync};
use crate::player::TrinketPlayer;

const DEFAULT_FILLER: &str = "light_gray_stained_glass_pane";

/// Everything derived from one configuration load. Swapped wholesale on
/// reload; running effect tasks read the current tree on their next firing.
pub struct ActiveConfig {
    pub config: TrinketsConfig,
    pub messages: Messages,
    pub schema: SlotSchema,
    pub filler: ItemStack,
}

impl ActiveConfig {
    pub fn new(config: TrinketsConfig, messages: Messages, registry: &dyn ItemRegistry) -> Self {
        let schema = SlotSchema::from_config(&config.trinkets_menu);
        let filler = resolve_filler(&config.trinkets_menu.empty_slot, registry);
        Self {
            config,
            messages,
            schema,
            filler,
        }
    }
}

fn resolve_filler(descriptor: &str, registry: &dyn ItemRegistry) -> ItemStack {
    if let Some(id) = descriptor.strip_prefix("registry:") {
        if let Some(stack) = registry.by_id(id) {
            return stack;
        }
        log::warn!("Unknown registry item {id:?} for empty_slot; using the default filler");
        return ItemStack::new(DEFAULT_FILLER, 1);
    }
    ItemStack::new(descriptor, 1)
}

/// What a click did to the menu. The host GUI cancels the underlying event
/// either way and updates its cursor from the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Invalid target or invalid item; nothing changed.
    Denied,
    /// The cursor stack went into the slot; the cursor is now empty.
    Placed,
    /// The slot was emptied; the stack goes onto the cursor.
    Taken(ItemStack),
    /// Click on an empty slot with an empty cursor.
    Noop,
}

/// Ties the pieces together: one menu and at most one effect task per
/// player, the active configuration, and the host-facing event surface.
pub struct TrinketManager {
    registry: Arc<dyn ItemRegistry>,
    active: Arc<RwLock<ActiveConfig>>,
    menus: MenuRegistry,
    scheduler: EffectScheduler,
}

impl TrinketManager {
    pub fn new(
        config: TrinketsConfig,
        messages: Messages,
        registry: Arc<dyn ItemRegistry>,
    ) -> Self {
        let active = ActiveConfig::new(config, messages, registry.as_ref());
        log::info!("Trinkets starting up with {} configured slots", active.schema.len());
        Self {
            registry,
            active: Arc::new(RwLock::new(active)),
            menus: MenuRegistry::new(),
            scheduler: EffectScheduler::new(),
        }
    }

    pub async fn message(&self, key: &str) -> String {
        self.active.read().await.messages.message(key)
    }

    pub async fn menu_title(&self) -> String {
        self.active.read().await.config.trinkets_menu.title.clone()
    }

    /// Opens (lazily creating) the player's menu: undefined positions get
    /// the filler, armor positions get a fresh equipment snapshot.
    pub async fn open_menu(&self, player: &Arc<dyn TrinketPlayer>) -> Arc<TrinketMenu> {
        let menu = self.menus.get_or_create(player.uuid()).await;
        let active = self.active.read().await;
        menu.fill_undefined(&active.schema, &active.filler).await;
        sync::load_from_equipment(player.as_ref(), &menu, &active.schema).await;
        menu
    }

    pub async fn menu(&self, player: &Arc<dyn TrinketPlayer>) -> Option<Arc<TrinketMenu>> {
        self.menus.get(player.uuid()).await
    }

    /// A click in the player's open menu. Placement and removal swap whole
    /// stacks; trinket-slot changes restart or stop the player's effect
    /// stream.
    pub async fn handle_click(
        &self,
        player: &Arc<dyn TrinketPlayer>,
        slot_index: usize,
        cursor: &ItemStack,
    ) -> ClickOutcome {
        let Some(menu) = self.menus.get(player.uuid()).await else {
            return ClickOutcome::Denied;
        };
        if slot_index >= menu.size() {
            return ClickOutcome::Denied;
        }

        let active = self.active.read().await;
        let Some(category) = active.schema.category(slot_index) else {
            // Undefined positions only ever hold the filler.
            return ClickOutcome::Denied;
        };

        let cell = menu.get_stack(slot_index);
        let mut stack = cell.lock().await;
        if stack.is_similar(&active.filler) {
            return ClickOutcome::Denied;
        }

        if !cursor.is_empty() {
            if !slot::can_insert(category, cursor, self.registry.as_ref(), &active.config) {
                return ClickOutcome::Denied;
            }
            *stack = cursor.clone();
            drop(stack);

            if EquipmentType::from_category(category).is_none()
                && let Some(id) = self.registry.id_of(cursor)
            {
                self.scheduler
                    .start(
                        player.clone(),
                        menu.clone(),
                        self.active.clone(),
                        category.to_owned(),
                        id,
                    )
                    .await;
            }
            ClickOutcome::Placed
        } else if !stack.is_empty() {
            let taken = std::mem::replace(&mut *stack, ItemStack::empty());
            drop(stack);

            if EquipmentType::from_category(category).is_none() && self.registry.exists(&taken) {
                self.scheduler.stop(player.uuid()).await;
            }
            ClickOutcome::Taken(taken)
        } else {
            ClickOutcome::Noop
        }
    }

    /// Menu closed: the armor positions flush back onto the player.
    pub async fn handle_close(&self, player: &Arc<dyn TrinketPlayer>) {
        let Some(menu) = self.menus.get(player.uuid()).await else {
            return;
        };
        let active = self.active.read().await;
        sync::flush_to_equipment(player.as_ref(), &menu, &active.schema).await;
    }

    /// Reconnect: restart the effect stream for an eligible item already
    /// sitting in a trinket slot. Slots are scanned in ascending order and
    /// each eligible item replaces the previous stream, so the last one
    /// wins.
    pub async fn handle_join(&self, player: &Arc<dyn TrinketPlayer>) {
        let Some(menu) = self.menus.get(player.uuid()).await else {
            return;
        };
        let active = self.active.read().await;
        for (slot_index, category) in active.schema.iter() {
            if EquipmentType::from_category(category).is_some() {
                continue;
            }
            let stack = menu.cloned_stack(slot_index).await;
            if stack.is_empty() || stack.is_similar(&active.filler) {
                continue;
            }
            if let Some(id) = self.registry.id_of(&stack) {
                self.scheduler
                    .start(
                        player.clone(),
                        menu.clone(),
                        self.active.clone(),
                        category.to_owned(),
                        id,
                    )
                    .await;
            }
        }
    }

    /// Disconnect: the effect stream dies immediately and the armor
    /// positions flush back. The menu itself is retained for a reconnect.
    pub async fn handle_quit(&self, player: &Arc<dyn TrinketPlayer>) {
        self.scheduler.stop(player.uuid()).await;
        if let Some(menu) = self.menus.get(player.uuid()).await {
            let active = self.active.read().await;
            sync::flush_to_equipment(player.as_ref(), &menu, &active.schema).await;
        }
    }

    /// Swaps in a freshly loaded configuration. Task state is untouched;
    /// running tasks pick up the new tree on their next firing.
    pub async fn reload(&self, config: TrinketsConfig, messages: Messages) {
        let rebuilt = ActiveConfig::new(config, messages, self.registry.as_ref());
        *self.active.write().await = rebuilt;
        log::info!("Trinkets configuration reloaded");
    }

    pub async fn has_effect_stream(&self, player: &Arc<dyn TrinketPlayer>) -> bool {
        self.scheduler.is_running(player.uuid()).await
    }

    /// Cancels every effect task. Called once when the host shuts down.
    pub async fn shutdown(&self) {
        log::info!("Trinkets shutting down");
        self.scheduler.shutdown().await;
    }
}
