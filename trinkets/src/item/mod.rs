/// The four standard equipment pieces mirrored into the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
}

impl EquipmentType {
    pub const ALL: [Self; 4] = [Self::Helmet, Self::Chestplate, Self::Leggings, Self::Boots];

    /// The reserved slot category bound to this piece.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Helmet => "helmet",
            Self::Chestplate => "chestplate",
            Self::Leggings => "leggings",
            Self::Boots => "boots",
        }
    }

    /// `None` for trinket categories.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "helmet" => Some(Self::Helmet),
            "chestplate" => Some(Self::Chestplate),
            "leggings" => Some(Self::Leggings),
            "boots" => Some(Self::Boots),
            _ => None,
        }
    }
}

/// An opaque item stack. The engine only ever looks at the item name, the
/// intrinsic equipment tag and whether the stack is empty; everything else
/// about items belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub name: String,
    pub equipment: Option<EquipmentType>,
    pub item_count: u8,
}

impl ItemStack {
    pub fn new(name: impl Into<String>, item_count: u8) -> Self {
        Self {
            name: name.into(),
            equipment: None,
            item_count,
        }
    }

    pub fn armor(name: impl Into<String>, equipment: EquipmentType) -> Self {
        Self {
            name: name.into(),
            equipment: Some(equipment),
            item_count: 1,
        }
    }

    pub fn empty() -> Self {
        Self {
            name: String::new(),
            equipment: None,
            item_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.name.is_empty()
    }

    /// Same item, ignoring the stack count.
    pub fn is_similar(&self, other: &Self) -> bool {
        self.name == other.name && self.equipment == other.equipment
    }
}

/// Seam to the external item catalog that owns custom item identity.
pub trait ItemRegistry: Send + Sync {
    /// Whether the stack is a catalog item at all.
    fn exists(&self, stack: &ItemStack) -> bool;

    /// The catalog identifier of the stack, if it has one.
    fn id_of(&self, stack: &ItemStack) -> Option<String>;

    /// A fresh stack built from a catalog identifier.
    fn by_id(&self, id: &str) -> Option<ItemStack>;
}
