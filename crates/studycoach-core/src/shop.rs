//! Shop catalog and inventory.
//!
//! A twelve-item catalog over three categories. Ownership and equipment
//! are the only mutable bits: purchases route through the ledger's spend
//! so a declined purchase leaves no partial state, and equipping is
//! exclusive within a category.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ShopError};
use crate::events::Event;
use crate::progression::UserState;

/// Catalog item kind. Closed set; the equip-exclusivity rule is checked
/// per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Theme,
    Avatar,
    Music,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 3] = [ItemCategory::Theme, ItemCategory::Avatar, ItemCategory::Music];

    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Theme => "theme",
            ItemCategory::Avatar => "avatar",
            ItemCategory::Music => "music",
        }
    }
}

/// One catalog entry plus the player's ownership flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: ItemCategory,
    pub owned: bool,
    /// At most one owned item per category carries this flag.
    pub equipped: bool,
}

fn item(
    id: &str,
    name: &str,
    price: u64,
    category: ItemCategory,
    owned: bool,
    equipped: bool,
) -> ShopItem {
    ShopItem {
        id: id.into(),
        name: name.into(),
        price,
        category,
        owned,
        equipped,
    }
}

/// The player's view of the catalog.
///
/// The item set is static; only `owned` and `equipped` flags mutate, via
/// [`Shop::purchase`] and [`Shop::equip`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    items: Vec<ShopItem>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    /// The full catalog, with one starter item per category already owned
    /// and equipped.
    pub fn new() -> Self {
        Self {
            items: vec![
                item("theme-cosmic", "Cosmic Purple", 500, ItemCategory::Theme, true, true),
                item("theme-forest", "Forest Calm", 750, ItemCategory::Theme, false, false),
                item("theme-ocean", "Ocean Waves", 1000, ItemCategory::Theme, false, false),
                item("theme-sunset", "Golden Sunset", 1250, ItemCategory::Theme, false, false),
                item("avatar-robot", "Cyber Bot", 300, ItemCategory::Avatar, true, true),
                item("avatar-wizard", "Wise Wizard", 400, ItemCategory::Avatar, false, false),
                item("avatar-ninja", "Shadow Ninja", 500, ItemCategory::Avatar, false, false),
                item("avatar-dragon", "Fire Dragon", 750, ItemCategory::Avatar, false, false),
                item("music-lofi", "Lo-fi Beats", 200, ItemCategory::Music, true, true),
                item("music-classical", "Classical Focus", 250, ItemCategory::Music, false, false),
                item("music-nature", "Nature Sounds", 300, ItemCategory::Music, false, false),
                item("music-electronic", "Electronic Vibes", 400, ItemCategory::Music, false, false),
            ],
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_in(&self, category: ItemCategory) -> Vec<&ShopItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// The currently equipped item of a category, if any.
    pub fn equipped(&self, category: ItemCategory) -> Option<&ShopItem> {
        self.items
            .iter()
            .find(|item| item.category == category && item.equipped)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Buy an item, charging the ledger.
    ///
    /// Existence and ownership are checked before the spend, and the item
    /// is marked owned only after the spend succeeds; a declined purchase
    /// leaves both the balance and the item untouched. Purchases do not
    /// auto-equip.
    pub fn purchase(&mut self, id: &str, user: &mut UserState) -> Result<Event, CoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ShopError::UnknownItem(id.to_string()))?;
        if self.items[index].owned {
            return Err(ShopError::AlreadyOwned(id.to_string()).into());
        }
        let price = self.items[index].price;
        user.spend(price)?;
        self.items[index].owned = true;
        Ok(Event::ItemPurchased {
            item_id: id.to_string(),
            price,
            remaining_coins: user.coins,
            at: Utc::now(),
        })
    }

    /// Equip an owned item, unequipping the rest of its category.
    pub fn equip(&mut self, id: &str) -> Result<Event, CoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ShopError::UnknownItem(id.to_string()))?;
        if !self.items[index].owned {
            return Err(ShopError::NotOwned(id.to_string()).into());
        }
        let category = self.items[index].category;
        for item in &mut self.items {
            if item.category == category {
                item.equipped = item.id == id;
            }
        }
        Ok(Event::ItemEquipped {
            item_id: id.to_string(),
            category,
            at: Utc::now(),
        })
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
