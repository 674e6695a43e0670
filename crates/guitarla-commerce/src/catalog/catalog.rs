//! Read-only catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::error::CommerceError;
use crate::ids::ItemId;

/// Ordered, immutable list of purchasable items.
///
/// Built once at startup; nothing in the cart engine mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CommerceError::DuplicateItem(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| CommerceError::InvalidCatalog(e.to_string()))?;
        Self::new(items)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up an item by id, failing if it is not in the catalog.
    pub fn require(&self, id: ItemId) -> Result<&Item, CommerceError> {
        self.get(id).ok_or(CommerceError::ItemNotFound(id))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = CommerceError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Lukather", "price": 299, "image": "guitarra_01", "description": "Uno"},
        {"id": 2, "name": "SRV", "price": 349.5, "image": "guitarra_02", "description": "Dos"}
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Lukather", "SRV"]);
        assert_eq!(
            catalog.get(ItemId::new(2)).unwrap().price,
            Money::from_cents(34950)
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let item = Item::new(1, "A", Money::from_cents(100), "a", "a");
        let result = Catalog::new(vec![item.clone(), item]);
        assert!(matches!(result, Err(CommerceError::DuplicateItem(id)) if id == ItemId::new(1)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{}"),
            Err(CommerceError::InvalidCatalog(_))
        ));
        assert!(Catalog::from_json(r#"[{"id": 1, "name": "A"}]"#).is_err());
    }

    #[test]
    fn test_rejects_fraction_of_a_cent() {
        let json = r#"[{"id": 1, "name": "A", "price": 0.004, "image": "a", "description": "a"}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(_)));
        assert!(err.to_string().contains("fraction of a cent"));
    }

    #[test]
    fn test_require_missing_item() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(catalog.require(ItemId::new(1)).is_ok());
        assert!(matches!(
            catalog.require(ItemId::new(99)),
            Err(CommerceError::ItemNotFound(_))
        ));
    }
}
