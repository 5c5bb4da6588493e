use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::effect::resolve_effects;
use crate::manager::ActiveConfig;
use crate::menu::TrinketMenu;
use crate::player::TrinketPlayer;

/// One game tick.
pub const TICK: Duration = Duration::from_millis(50);

/// Reapplication period in ticks. Shorter than the effect duration, so a
/// running stream never visibly flickers.
pub const EFFECT_PERIOD_TICKS: u32 = 20;

struct EffectTask {
    id: u64,
    token: CancellationToken,
}

/// Owns the per-player effect tasks. At most one task is live per player;
/// starting a new one cancels and replaces the old one under the same map
/// guard, so two racing placements can never leave two live tasks.
pub struct EffectScheduler {
    tasks: Arc<Mutex<HashMap<Uuid, EffectTask>>>,
    next_task_id: AtomicU64,
}

impl Default for EffectScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectScheduler {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            next_task_id: AtomicU64::new(0),
        }
    }

    /// Starts the effect stream for an item sitting in a trinket slot,
    /// replacing whatever stream the player had. The task fires once
    /// immediately and then every [`EFFECT_PERIOD_TICKS`].
    pub async fn start(
        &self,
        player: Arc<dyn TrinketPlayer>,
        menu: Arc<TrinketMenu>,
        config: Arc<RwLock<ActiveConfig>>,
        category: String,
        item_id: String,
    ) {
        let id = self.next_task_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        {
            let mut tasks = self.tasks.lock().await;
            if let Some(previous) = tasks.insert(
                player.uuid(),
                EffectTask {
                    id,
                    token: token.clone(),
                },
            ) {
                previous.token.cancel();
            }
        }

        log::debug!("Starting effect task {id} ({category}/{item_id}) for {}", player.uuid());
        let tasks = self.tasks.clone();
        tokio::spawn(run_effect_task(
            player, menu, config, tasks, category, item_id, id, token,
        ));
    }

    /// Cancels the player's effect stream, if any. Used on explicit removal
    /// and on disconnect; takes effect before the next firing.
    pub async fn stop(&self, player: Uuid) {
        if let Some(task) = self.tasks.lock().await.remove(&player) {
            task.token.cancel();
            log::debug!("Stopped effect task {} for {player}", task.id);
        }
    }

    pub async fn is_running(&self, player: Uuid) -> bool {
        self.tasks.lock().await.contains_key(&player)
    }

    /// Cancels every task. Called once on server shutdown.
    pub async fn shutdown(&self) {
        for (_, task) in self.tasks.lock().await.drain() {
            task.token.cancel();
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_effect_task(
    player: Arc<dyn TrinketPlayer>,
    menu: Arc<TrinketMenu>,
    config: Arc<RwLock<ActiveConfig>>,
    tasks: Arc<Mutex<HashMap<Uuid, EffectTask>>>,
    category: String,
    item_id: String,
    task_id: u64,
    token: CancellationToken,
) {
    let mut interval = tokio::time::interval(TICK * EFFECT_PERIOD_TICKS);
    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => return,
            _ = interval.tick() => {}
        }

        if !player.is_connected() {
            remove_if_current(&tasks, player.uuid(), task_id).await;
            return;
        }

        let effects = {
            let active = config.read().await;
            let occupied = match active.schema.slot_for(&category) {
                Some(slot) => {
                    let stack = menu.cloned_stack(slot).await;
                    !stack.is_empty() && !stack.is_similar(&active.filler)
                }
                None => false,
            };
            if !occupied {
                drop(active);
                log::debug!("Effect task {task_id} for {} lost its item; stopping", player.uuid());
                remove_if_current(&tasks, player.uuid(), task_id).await;
                return;
            }
            resolve_effects(&active.config, &category, &item_id)
        };

        for effect in effects {
            player.apply_effect(effect).await;
        }
    }
}

/// A task that stops itself must not tear down a replacement that has
/// already taken its map entry.
async fn remove_if_current(tasks: &Mutex<HashMap<Uuid, EffectTask>>, player: Uuid, task_id: u64) {
    let mut tasks = tasks.lock().await;
    if tasks.get(&player).is_some_and(|task| task.id == task_id) {
        tasks.remove(&player);
    }
}
