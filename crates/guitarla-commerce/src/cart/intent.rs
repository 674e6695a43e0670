//! User intents that transform a cart.

use std::fmt;

use crate::catalog::Item;
use crate::ids::ItemId;

/// A request from the presentation layer to change the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    /// Add one of the item.
    Add(Item),
    /// Remove the item's line.
    Remove(ItemId),
    /// One more of the item.
    Increase(ItemId),
    /// One fewer of the item.
    Decrease(ItemId),
    /// Empty the cart.
    Clear,
}

impl CartIntent {
    /// Item targeted by this intent, if any.
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            CartIntent::Add(item) => Some(item.id),
            CartIntent::Remove(id) | CartIntent::Increase(id) | CartIntent::Decrease(id) => {
                Some(*id)
            }
            CartIntent::Clear => None,
        }
    }

    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            CartIntent::Add(_) => "add",
            CartIntent::Remove(_) => "remove",
            CartIntent::Increase(_) => "increase",
            CartIntent::Decrease(_) => "decrease",
            CartIntent::Clear => "clear",
        }
    }
}

impl fmt::Display for CartIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item_id() {
            Some(id) => write!(f, "{}({})", self.as_str(), id),
            None => f.write_str(self.as_str()),
        }
    }
}
