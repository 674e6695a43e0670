//! Persistence port and its key-value adapter.

use guitarla_store::{Cache, KeyValueStore};
use tracing::{info, warn};

use crate::cart::Cart;
use crate::error::CommerceError;

/// Key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Where the engine reads its initial cart from and mirrors every new state
/// to.
pub trait CartPersistence {
    /// Load the persisted cart.
    ///
    /// Missing, unreadable or invalid values yield an empty cart; this never
    /// fails.
    fn restore(&self) -> Cart;

    /// Overwrite the persisted cart with `cart`.
    fn persist(&self, cart: &Cart) -> Result<(), CommerceError>;
}

impl<P: CartPersistence + ?Sized> CartPersistence for &P {
    fn restore(&self) -> Cart {
        (**self).restore()
    }

    fn persist(&self, cart: &Cart) -> Result<(), CommerceError> {
        (**self).persist(cart)
    }
}

/// Stores the cart as JSON under a single key of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct KvPersistence<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: KeyValueStore> KvPersistence<S> {
    /// Persist under [`CART_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    /// Key the cart is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStore> CartPersistence for KvPersistence<S> {
    fn restore(&self) -> Cart {
        match self.cache.get::<Cart>(&self.key) {
            Ok(Some(cart)) => {
                info!(
                    key = %self.key,
                    lines = cart.len(),
                    items = cart.item_count(),
                    "restored cart"
                );
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart");
                Cart::new()
            }
        }
    }

    fn persist(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.cache.set(&self.key, cart)?;
        Ok(())
    }
}
