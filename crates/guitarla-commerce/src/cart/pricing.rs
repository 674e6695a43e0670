//! Cart totals.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::Serialize;

/// Totals shown next to the cart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: u32,
    /// Sum of line subtotals.
    pub total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Compute totals for a cart.
    ///
    /// Returns an error if arithmetic overflow occurs.
    pub fn for_cart(cart: &Cart) -> Result<Self, CommerceError> {
        let lines = cart
            .iter()
            .map(|line| {
                let subtotal = line
                    .item
                    .price
                    .try_multiply(line.quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(LineTotal {
                    id: line.id(),
                    name: line.item.name.clone(),
                    unit_price: line.item.price,
                    quantity: line.quantity,
                    subtotal,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total =
            Money::try_sum(lines.iter().map(|l| &l.subtotal)).ok_or(CommerceError::Overflow)?;

        Ok(Self {
            line_count: lines.len(),
            item_count: cart.item_count(),
            total,
            lines,
        })
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Breakdown for a single line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineTotal {
    /// Item id.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    #[test]
    fn test_totals() {
        let lukather = Item::new(1, "Lukather", Money::from_cents(29900), "g1", "d");
        let srv = Item::new(2, "SRV", Money::from_cents(34999), "g2", "d");
        let cart = Cart::new()
            .add_item(&lukather)
            .add_item(&lukather)
            .add_item(&srv);

        let totals = cart.totals().unwrap();
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.lines[0].subtotal, Money::from_cents(59800));
        assert_eq!(totals.total, Money::from_cents(59800 + 34999));
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = Cart::new().totals().unwrap();
        assert!(totals.is_empty());
        assert!(totals.total.is_zero());
        assert_eq!(totals.item_count, 0);
    }

    #[test]
    fn test_overflow_is_reported() {
        let pricey = Item::new(1, "Gold", Money::from_cents(i64::MAX / 2 + 1), "g", "d");
        let cart = Cart::new().add_item(&pricey).add_item(&pricey);
        assert!(matches!(cart.totals(), Err(CommerceError::Overflow)));
    }
}
