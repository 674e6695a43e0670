//! Newtype ID for catalog items.
//!
//! Item ids are plain integers on the wire; the newtype keeps them from being
//! mixed up with quantities or prices. Any integer a JSON document can carry
//! exactly is accepted, negative ones included.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Create an ID from its integer value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_integer() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: ItemId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ItemId::new(12));
    }

    #[test]
    fn test_id_accepts_full_integer_range() {
        let negative: ItemId = serde_json::from_str("-3").unwrap();
        assert_eq!(negative.get(), -3);

        let large: ItemId = serde_json::from_str("9007199254740991").unwrap();
        assert_eq!(large.get(), 9_007_199_254_740_991);
        assert_eq!(serde_json::to_string(&large).unwrap(), "9007199254740991");

        assert!(serde_json::from_str::<ItemId>("1.5").is_err());
        assert!(serde_json::from_str::<ItemId>("\"1\"").is_err());
    }

    #[test]
    fn test_id_from_str() {
        let id: ItemId = " 4 ".parse().unwrap();
        assert_eq!(id.get(), 4);
        assert_eq!("-7".parse::<ItemId>().unwrap(), ItemId::new(-7));
        assert!("four".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ItemId::new(9)), "9");
    }
}
