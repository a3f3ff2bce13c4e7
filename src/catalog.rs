//! Item catalog
//!
//! The immutable table of everything that can be scattered in the drawer.
//! Validated once at construction: at least two items, exactly one target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable item identifier (index into the catalog)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host-supplied item definition, before ids are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    /// Icon token (an emoji in the default drawer)
    pub icon: String,
    #[serde(default)]
    pub is_target: bool,
}

impl ItemSpec {
    pub fn decoy(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            is_target: false,
        }
    }

    pub fn target(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            is_target: true,
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub display_name: String,
    pub icon: String,
    pub is_target: bool,
}

/// Validated, read-only item table
#[derive(Debug, Clone, Serialize)]
pub struct ItemCatalog {
    items: Vec<Item>,
    target: ItemId,
}

impl ItemCatalog {
    /// Minimum catalog size (one target plus at least one decoy)
    pub const MIN_ITEMS: usize = 2;

    /// Build a catalog, assigning ids by position
    pub fn new(specs: Vec<ItemSpec>) -> Result<Self, CatalogError> {
        Self::validate(&specs)?;
        Ok(Self::assign_ids(specs))
    }

    fn validate(specs: &[ItemSpec]) -> Result<(), CatalogError> {
        if specs.is_empty() {
            return Err(CatalogError::Empty);
        }

        match specs.iter().filter(|s| s.is_target).count() {
            0 => return Err(CatalogError::NoTarget),
            1 => {}
            count => return Err(CatalogError::MultipleTargets { count }),
        }

        if specs.len() < Self::MIN_ITEMS {
            return Err(CatalogError::TooFewItems { count: specs.len() });
        }
        Ok(())
    }

    /// Caller guarantees `specs` passed `validate`
    fn assign_ids(specs: Vec<ItemSpec>) -> Self {
        let items: Vec<Item> = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Item {
                id: ItemId(index as u32),
                display_name: spec.name,
                icon: spec.icon,
                is_target: spec.is_target,
            })
            .collect();
        let target = items
            .iter()
            .position(|item| item.is_target)
            .map_or(ItemId(0), |index| ItemId(index as u32));

        Self { items, target }
    }

    /// Parse a JSON array of `ItemSpec`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let specs: Vec<ItemSpec> = serde_json::from_str(json)?;
        Self::new(specs)
    }

    /// The drawer from the original game: fifteen decoys and the ID card
    pub fn drawer() -> Self {
        let specs = vec![
            ItemSpec::decoy("Phone", "📱"),
            ItemSpec::decoy("Keys", "🔑"),
            ItemSpec::decoy("Credit Card", "💳"),
            ItemSpec::decoy("Note", "📝"),
            ItemSpec::decoy("Pen", "✏️"),
            ItemSpec::decoy("Paperclip", "📎"),
            ItemSpec::decoy("Pin", "📌"),
            ItemSpec::decoy("Safety Pin", "🧷"),
            ItemSpec::decoy("Paper", "📄"),
            ItemSpec::decoy("Clipboard", "📋"),
            ItemSpec::decoy("Business Card", "📇"),
            ItemSpec::decoy("Ticket", "🎫"),
            ItemSpec::decoy("Pill", "💊"),
            ItemSpec::decoy("Coin", "🪙"),
            ItemSpec::decoy("Receipt", "🧾"),
            ItemSpec::target("ID Card", "🆔"),
        ];
        debug_assert!(Self::validate(&specs).is_ok());
        Self::assign_ids(specs)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0 as usize)
    }

    /// The single target item
    pub fn target(&self) -> &Item {
        &self.items[self.target.0 as usize]
    }

    /// Look up an item by display name (case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.display_name == name)
    }
}
