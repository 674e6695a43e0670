//! The cart engine.

use tracing::{debug, warn};

use crate::cart::{Cart, CartIntent, CartTotals};
use crate::catalog::Item;
use crate::engine::CartPersistence;
use crate::error::CommerceError;
use crate::ids::ItemId;

/// Owns the current cart and writes every new state through to its
/// persistence port.
///
/// Intents are handled one at a time through `&mut self`; there is a single
/// writer by construction. A failed write leaves the engine dirty, and the
/// next intent writes again even if it does not change the cart.
///
/// # Example
///
/// ```rust
/// use guitarla_commerce::prelude::*;
/// use guitarla_store::MemoryStore;
///
/// let store = MemoryStore::new();
/// let mut engine = CartEngine::initialize(KvPersistence::new(&store));
///
/// let item = Item::new(1, "Lukather", Money::from_cents(29900), "guitarra_01", "Strat");
/// engine.add_to_cart(&item);
/// engine.increase_quantity(item.id);
///
/// assert_eq!(engine.cart().quantity_of(item.id), 2);
/// ```
#[derive(Debug)]
pub struct CartEngine<P> {
    cart: Cart,
    persistence: P,
    dirty: bool,
}

impl<P: CartPersistence> CartEngine<P> {
    /// Restore the cart from `persistence` and write it straight back.
    ///
    /// The initial write replaces anything unreadable with a valid (empty)
    /// cart.
    pub fn initialize(persistence: P) -> Self {
        let cart = persistence.restore();
        let mut engine = Self {
            cart,
            persistence,
            dirty: false,
        };
        engine.write_through();
        engine
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Totals for the current cart.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        self.cart.totals()
    }

    /// Apply an intent and return the new cart.
    ///
    /// The cart is persisted whenever the intent changed it, or when an
    /// earlier write failed.
    pub fn dispatch(&mut self, intent: CartIntent) -> &Cart {
        let next = self.cart.apply(&intent);
        if next == self.cart {
            if self.dirty {
                debug!(%intent, "retrying failed cart write");
                self.write_through();
            } else {
                debug!(%intent, "intent left cart unchanged");
            }
            return &self.cart;
        }

        debug!(
            %intent,
            lines = next.len(),
            items = next.item_count(),
            quantity = ?intent.item_id().map(|id| next.quantity_of(id)),
            "cart updated"
        );
        self.cart = next;
        self.write_through();
        &self.cart
    }

    /// Add one of `item`, merging into an existing line.
    pub fn add_to_cart(&mut self, item: &Item) -> &Cart {
        self.dispatch(CartIntent::Add(item.clone()))
    }

    /// Remove the line for `id`.
    pub fn remove_from_cart(&mut self, id: ItemId) -> &Cart {
        self.dispatch(CartIntent::Remove(id))
    }

    /// One more of `id`, up to the per-line maximum.
    pub fn increase_quantity(&mut self, id: ItemId) -> &Cart {
        self.dispatch(CartIntent::Increase(id))
    }

    /// One fewer of `id`, down to the per-line minimum.
    pub fn decrease_quantity(&mut self, id: ItemId) -> &Cart {
        self.dispatch(CartIntent::Decrease(id))
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> &Cart {
        self.dispatch(CartIntent::Clear)
    }

    /// Whether the last write failed, so the store lags behind [`cart`].
    ///
    /// [`cart`]: CartEngine::cart
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Take the engine apart.
    pub fn into_parts(self) -> (Cart, P) {
        (self.cart, self.persistence)
    }

    fn write_through(&mut self) {
        match self.persistence.persist(&self.cart) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!(error = %e, lines = self.cart.len(), "failed to persist cart");
                self.dirty = true;
            }
        }
    }
}
