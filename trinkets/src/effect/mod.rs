use std::hash::{Hash, Hasher};

use trinkets_config::TrinketsConfig;

pub mod task;

/// Duration of every application. A cycle later the task refreshes it, so
/// the effect reads as continuous and fades within 100 ticks of the last
/// application.
pub const EFFECT_DURATION_TICKS: i32 = 100;

pub struct StatusEffect {
    pub name: &'static str,
    pub id: u8,
}

impl PartialEq for StatusEffect {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StatusEffect {}

impl Hash for StatusEffect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for StatusEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl StatusEffect {
    pub const SPEED: Self = Self { name: "speed", id: 1 };
    pub const SLOWNESS: Self = Self { name: "slowness", id: 2 };
    pub const HASTE: Self = Self { name: "haste", id: 3 };
    pub const MINING_FATIGUE: Self = Self { name: "mining_fatigue", id: 4 };
    pub const STRENGTH: Self = Self { name: "strength", id: 5 };
    pub const INSTANT_HEALTH: Self = Self { name: "instant_health", id: 6 };
    pub const INSTANT_DAMAGE: Self = Self { name: "instant_damage", id: 7 };
    pub const JUMP_BOOST: Self = Self { name: "jump_boost", id: 8 };
    pub const NAUSEA: Self = Self { name: "nausea", id: 9 };
    pub const REGENERATION: Self = Self { name: "regeneration", id: 10 };
    pub const RESISTANCE: Self = Self { name: "resistance", id: 11 };
    pub const FIRE_RESISTANCE: Self = Self { name: "fire_resistance", id: 12 };
    pub const WATER_BREATHING: Self = Self { name: "water_breathing", id: 13 };
    pub const INVISIBILITY: Self = Self { name: "invisibility", id: 14 };
    pub const BLINDNESS: Self = Self { name: "blindness", id: 15 };
    pub const NIGHT_VISION: Self = Self { name: "night_vision", id: 16 };
    pub const HUNGER: Self = Self { name: "hunger", id: 17 };
    pub const WEAKNESS: Self = Self { name: "weakness", id: 18 };
    pub const POISON: Self = Self { name: "poison", id: 19 };
    pub const WITHER: Self = Self { name: "wither", id: 20 };
    pub const HEALTH_BOOST: Self = Self { name: "health_boost", id: 21 };
    pub const ABSORPTION: Self = Self { name: "absorption", id: 22 };
    pub const SATURATION: Self = Self { name: "saturation", id: 23 };
    pub const GLOWING: Self = Self { name: "glowing", id: 24 };
    pub const LEVITATION: Self = Self { name: "levitation", id: 25 };
    pub const LUCK: Self = Self { name: "luck", id: 26 };
    pub const UNLUCK: Self = Self { name: "unluck", id: 27 };
    pub const SLOW_FALLING: Self = Self { name: "slow_falling", id: 28 };
    pub const CONDUIT_POWER: Self = Self { name: "conduit_power", id: 29 };
    pub const DOLPHINS_GRACE: Self = Self { name: "dolphins_grace", id: 30 };
    pub const BAD_OMEN: Self = Self { name: "bad_omen", id: 31 };
    pub const HERO_OF_THE_VILLAGE: Self = Self { name: "hero_of_the_village", id: 32 };
    pub const DARKNESS: Self = Self { name: "darkness", id: 33 };

    pub fn from_name(name: &str) -> Option<&'static Self> {
        match name {
            "speed" => Some(&Self::SPEED),
            "slowness" => Some(&Self::SLOWNESS),
            "haste" => Some(&Self::HASTE),
            "mining_fatigue" => Some(&Self::MINING_FATIGUE),
            "strength" => Some(&Self::STRENGTH),
            "instant_health" => Some(&Self::INSTANT_HEALTH),
            "instant_damage" => Some(&Self::INSTANT_DAMAGE),
            "jump_boost" => Some(&Self::JUMP_BOOST),
            "nausea" => Some(&Self::NAUSEA),
            "regeneration" => Some(&Self::REGENERATION),
            "resistance" => Some(&Self::RESISTANCE),
            "fire_resistance" => Some(&Self::FIRE_RESISTANCE),
            "water_breathing" => Some(&Self::WATER_BREATHING),
            "invisibility" => Some(&Self::INVISIBILITY),
            "blindness" => Some(&Self::BLINDNESS),
            "night_vision" => Some(&Self::NIGHT_VISION),
            "hunger" => Some(&Self::HUNGER),
            "weakness" => Some(&Self::WEAKNESS),
            "poison" => Some(&Self::POISON),
            "wither" => Some(&Self::WITHER),
            "health_boost" => Some(&Self::HEALTH_BOOST),
            "absorption" => Some(&Self::ABSORPTION),
            "saturation" => Some(&Self::SATURATION),
            "glowing" => Some(&Self::GLOWING),
            "levitation" => Some(&Self::LEVITATION),
            "luck" => Some(&Self::LUCK),
            "unluck" => Some(&Self::UNLUCK),
            "slow_falling" => Some(&Self::SLOW_FALLING),
            "conduit_power" => Some(&Self::CONDUIT_POWER),
            "dolphins_grace" => Some(&Self::DOLPHINS_GRACE),
            "bad_omen" => Some(&Self::BAD_OMEN),
            "hero_of_the_village" => Some(&Self::HERO_OF_THE_VILLAGE),
            "darkness" => Some(&Self::DARKNESS),
            _ => None,
        }
    }
}

/// A fully resolved, ready-to-apply status effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub effect_type: &'static StatusEffect,
    pub duration: i32,
    pub amplifier: u8,
    pub ambient: bool,
    pub show_particles: bool,
    pub show_icon: bool,
}

/// Resolves the configured effects for an item in a slot category.
///
/// Unconfigured pairings resolve to an empty list. Effect names are matched
/// case-insensitively; names that match no known effect are skipped.
pub fn resolve_effects(config: &TrinketsConfig, category: &str, item_id: &str) -> Vec<Effect> {
    let Some(trinket) = config.trinket(category, item_id) else {
        return Vec::new();
    };

    let mut effects = Vec::new();
    for (name, entry) in &trinket.effects {
        let Some(effect_type) = StatusEffect::from_name(&name.to_lowercase()) else {
            log::warn!("Skipping unknown effect type {name:?} for {category}_trinkets.{item_id}");
            continue;
        };
        effects.push(Effect {
            effect_type,
            duration: EFFECT_DURATION_TICKS,
            amplifier: entry.amplifier,
            ambient: entry.ambient,
            show_particles: entry.particles,
            show_icon: entry.has_icon,
        });
    }
    effects
}
