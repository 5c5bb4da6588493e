use async_trait::async_trait;
use uuid::Uuid;

use crate::effect::Effect;
use crate::item::{EquipmentType, ItemStack};

/// Seam to the host's player object: connectivity, standard equipment
/// access, timed status effect application and chat delivery. The engine
/// never looks behind this trait.
#[async_trait]
pub trait TrinketPlayer: Send + Sync {
    fn uuid(&self) -> Uuid;

    fn is_connected(&self) -> bool;

    fn has_permission(&self, node: &str) -> bool;

    async fn equipment(&self, kind: EquipmentType) -> ItemStack;

    async fn set_equipment(&self, kind: EquipmentType, stack: ItemStack);

    /// Applies a timed status effect; reapplying refreshes the duration.
    async fn apply_effect(&self, effect: Effect);

    async fn send_message(&self, message: &str);
}
