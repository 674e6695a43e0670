//! Cart and cart line types.
//!
//! Every transition takes `&self` and returns a fresh [`Cart`]; the receiver
//! is never modified, so callers can compare old and new values to detect
//! updates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cart::{CartIntent, CartTotals};
use crate::catalog::Item;
use crate::error::CommerceError;
use crate::ids::ItemId;

/// Lowest quantity a line can be decreased to.
pub const MIN_ITEMS: u32 = 1;

/// Highest quantity a line can reach.
pub const MAX_ITEMS: u32 = 5;

/// An item in the cart together with how many of it were picked.
///
/// Serializes flat: the item fields followed by `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog item, copied at the time it was first added.
    #[serde(flatten)]
    pub item: Item,
    /// Always within `MIN_ITEMS..=MAX_ITEMS`.
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line for `item` with quantity 1.
    pub fn new(item: Item) -> Self {
        Self {
            item,
            quantity: MIN_ITEMS,
        }
    }

    /// Id of the item on this line.
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            item: self.item.clone(),
            quantity,
        }
    }
}

/// The shopping cart: lines ordered by first insertion, unique by item id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines, checking quantity bounds and id
    /// uniqueness.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if !(MIN_ITEMS..=MAX_ITEMS).contains(&line.quantity) {
                return Err(CommerceError::InvalidQuantity {
                    id: line.id(),
                    quantity: line.quantity,
                    min: MIN_ITEMS,
                    max: MAX_ITEMS,
                });
            }
            if !seen.insert(line.id()) {
                return Err(CommerceError::DuplicateCartLine(line.id()));
            }
        }
        Ok(Self { lines })
    }

    /// Add one of `item`.
    ///
    /// Appends a new line when the item is not in the cart yet, otherwise
    /// bumps the existing line in place. A line already at [`MAX_ITEMS`] is
    /// left alone.
    pub fn add_item(&self, item: &Item) -> Cart {
        match self.line(item.id) {
            Some(line) if line.quantity >= MAX_ITEMS => self.clone(),
            Some(_) => self.increase_quantity(item.id),
            None => {
                let mut lines = self.lines.clone();
                lines.push(CartLine::new(item.clone()));
                Cart { lines }
            }
        }
    }

    /// Drop the line for `id`. Unknown ids leave the cart as is.
    pub fn remove_item(&self, id: ItemId) -> Cart {
        Cart {
            lines: self
                .lines
                .iter()
                .filter(|line| line.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// One more of `id`, capped at [`MAX_ITEMS`].
    pub fn increase_quantity(&self, id: ItemId) -> Cart {
        self.map_quantity(id, |q| if q < MAX_ITEMS { q + 1 } else { q })
    }

    /// One fewer of `id`, floored at [`MIN_ITEMS`].
    ///
    /// Reaching the floor never removes the line.
    pub fn decrease_quantity(&self, id: ItemId) -> Cart {
        self.map_quantity(id, |q| if q > MIN_ITEMS { q - 1 } else { q })
    }

    /// Apply an intent and return the resulting cart.
    pub fn apply(&self, intent: &CartIntent) -> Cart {
        match intent {
            CartIntent::Add(item) => self.add_item(item),
            CartIntent::Remove(id) => self.remove_item(*id),
            CartIntent::Increase(id) => self.increase_quantity(*id),
            CartIntent::Decrease(id) => self.decrease_quantity(*id),
            CartIntent::Clear => Cart::new(),
        }
    }

    fn map_quantity(&self, id: ItemId, f: impl Fn(u32) -> u32) -> Cart {
        Cart {
            lines: self
                .lines
                .iter()
                .map(|line| {
                    if line.id() == id {
                        line.with_quantity(f(line.quantity))
                    } else {
                        line.clone()
                    }
                })
                .collect(),
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Get the line for an item.
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Check if the item is in the cart.
    pub fn contains(&self, id: ItemId) -> bool {
        self.line(id).is_some()
    }

    /// Quantity of an item, 0 when absent.
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Price breakdown for display.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        CartTotals::for_cart(self)
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CommerceError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        Cart::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn guitar(id: i64) -> Item {
        Item::new(
            id,
            format!("Guitar {id}"),
            Money::from_cents(29900 + id.abs() * 1000),
            format!("guitarra_{id:02}"),
            "Solid body",
        )
    }

    fn cart_with(lines: &[(i64, u32)]) -> Cart {
        let lines = lines
            .iter()
            .map(|&(id, quantity)| CartLine {
                item: guitar(id),
                quantity,
            })
            .collect();
        Cart::from_lines(lines).unwrap()
    }

    #[test]
    fn test_add_new_item_appends_line() {
        let cart = cart_with(&[(1, 2)]);
        let next = cart.add_item(&guitar(2));

        assert_eq!(next.len(), cart.len() + 1);
        assert_eq!(next.lines()[1].id(), ItemId::new(2));
        assert_eq!(next.lines()[1].quantity, 1);
        assert_eq!(next.lines()[1].item, guitar(2));
    }

    #[test]
    fn test_add_existing_item_increments_in_place() {
        let cart = cart_with(&[(1, 2), (2, 1), (3, 4)]);
        let next = cart.add_item(&guitar(2));

        assert_eq!(next.len(), 3);
        let ids: Vec<i64> = next.iter().map(|l| l.id().get()).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(next.quantity_of(ItemId::new(1)), 2);
        assert_eq!(next.quantity_of(ItemId::new(2)), 2);
        assert_eq!(next.quantity_of(ItemId::new(3)), 4);
    }

    #[test]
    fn test_add_five_times_then_sixth_is_ignored() {
        let item = guitar(1);
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart = cart.add_item(&item);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(item.id), 5);

        let sixth = cart.add_item(&item);
        assert_eq!(sixth, cart);
        assert_eq!(sixth.quantity_of(item.id), 5);
    }

    #[test]
    fn test_increase_is_capped() {
        let mut cart = cart_with(&[(1, 3)]);
        for _ in 0..10 {
            cart = cart.increase_quantity(ItemId::new(1));
            assert!(cart.quantity_of(ItemId::new(1)) <= MAX_ITEMS);
        }
        assert_eq!(cart.quantity_of(ItemId::new(1)), MAX_ITEMS);
    }

    #[test]
    fn test_decrease_is_floored() {
        let cart = cart_with(&[(2, 3)]);
        let cart = cart.decrease_quantity(ItemId::new(2));
        let cart = cart.decrease_quantity(ItemId::new(2));
        assert_eq!(cart.quantity_of(ItemId::new(2)), 1);

        let cart = cart.decrease_quantity(ItemId::new(2));
        assert_eq!(cart.quantity_of(ItemId::new(2)), 1);
        assert!(cart.contains(ItemId::new(2)));
    }

    #[test]
    fn test_quantity_ops_only_touch_target() {
        let cart = cart_with(&[(1, 2), (2, 2)]);

        let up = cart.increase_quantity(ItemId::new(1));
        assert_eq!(up.line(ItemId::new(2)), cart.line(ItemId::new(2)));

        let down = cart.decrease_quantity(ItemId::new(2));
        assert_eq!(down.line(ItemId::new(1)), cart.line(ItemId::new(1)));
    }

    #[test]
    fn test_quantity_ops_on_absent_id_are_noops() {
        let cart = cart_with(&[(1, 2)]);
        assert_eq!(cart.increase_quantity(ItemId::new(9)), cart);
        assert_eq!(cart.decrease_quantity(ItemId::new(9)), cart);
        assert_eq!(cart.remove_item(ItemId::new(9)), cart);
    }

    #[test]
    fn test_remove_keeps_other_lines() {
        let cart = cart_with(&[(1, 3), (2, 4)]);
        let next = cart.remove_item(ItemId::new(1));

        assert_eq!(next.len(), 1);
        assert_eq!(next.line(ItemId::new(2)), cart.line(ItemId::new(2)));

        let again = next.remove_item(ItemId::new(1));
        assert_eq!(again, next);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let cart = cart_with(&[(1, 1), (2, 1), (3, 1), (4, 1)]);
        let next = cart.remove_item(ItemId::new(2));

        let ids: Vec<i64> = next.iter().map(|l| l.id().get()).collect();
        assert_eq!(ids, [1, 3, 4]);
    }

    #[test]
    fn test_operations_leave_input_untouched() {
        let cart = cart_with(&[(1, 2), (2, 5)]);
        let snapshot = cart.clone();

        let _ = cart.add_item(&guitar(1));
        let _ = cart.add_item(&guitar(3));
        let _ = cart.remove_item(ItemId::new(2));
        let _ = cart.increase_quantity(ItemId::new(1));
        let _ = cart.decrease_quantity(ItemId::new(1));
        let _ = cart.apply(&CartIntent::Clear);

        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_apply_clear_always_empties() {
        assert!(Cart::new().apply(&CartIntent::Clear).is_empty());
        assert!(cart_with(&[(1, 5), (2, 1)])
            .apply(&CartIntent::Clear)
            .is_empty());
    }

    #[test]
    fn test_apply_dispatches_each_intent() {
        let cart = Cart::new()
            .apply(&CartIntent::Add(guitar(1)))
            .apply(&CartIntent::Add(guitar(2)))
            .apply(&CartIntent::Increase(ItemId::new(1)))
            .apply(&CartIntent::Increase(ItemId::new(1)))
            .apply(&CartIntent::Decrease(ItemId::new(1)))
            .apply(&CartIntent::Remove(ItemId::new(2)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ItemId::new(1)), 2);
    }

    #[test]
    fn test_json_round_trip() {
        for cart in [Cart::new(), cart_with(&[(1, 1), (4, 5), (2, 3)])] {
            let json = serde_json::to_string(&cart).unwrap();
            let back: Cart = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cart);
        }
    }

    #[test]
    fn test_json_layout_is_flat() {
        let cart = cart_with(&[(1, 2)]);
        let value = serde_json::to_value(&cart).unwrap();
        let line = &value[0];

        let mut keys: Vec<&str> = line.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["description", "id", "image", "name", "price", "quantity"]
        );
        assert_eq!(line["quantity"], 2);
    }

    #[test]
    fn test_decode_rejects_invalid_lines() {
        let zero = r#"[{"id":1,"name":"A","price":1,"image":"a","description":"a","quantity":0}]"#;
        let six = r#"[{"id":1,"name":"A","price":1,"image":"a","description":"a","quantity":6}]"#;
        let dup = r#"[
            {"id":1,"name":"A","price":1,"image":"a","description":"a","quantity":1},
            {"id":1,"name":"A","price":1,"image":"a","description":"a","quantity":2}
        ]"#;

        assert!(serde_json::from_str::<Cart>(zero).is_err());
        assert!(serde_json::from_str::<Cart>(six).is_err());
        assert!(serde_json::from_str::<Cart>(dup).is_err());
    }

    #[test]
    fn test_decode_keeps_prices_and_ids_exact() {
        let json = r#"[{"id":-3,"name":"A","price":19.99,"image":"a","description":"a","quantity":2}]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.quantity_of(ItemId::new(-3)), 2);
        assert_eq!(serde_json::to_string(&cart).unwrap(), json);

        let sub_cent = r#"[{"id":1,"name":"A","price":19.999,"image":"a","description":"a","quantity":2}]"#;
        assert!(serde_json::from_str::<Cart>(sub_cent).is_err());
    }

    #[test]
    fn test_item_count() {
        let cart = cart_with(&[(1, 2), (2, 3)]);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(Cart::new().item_count(), 0);
    }
}
