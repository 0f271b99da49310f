use serde::{Deserialize, Serialize};

use truckfest_core::{DomainError, DomainResult, ValueObject};

use crate::price::Price;

/// A named, priced good.
///
/// Immutable once built. Two items are the same item iff name and price both
/// match, which is what lets several trucks stock "the same" item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ItemAttributes")]
pub struct Item {
    name: String,
    price: Price,
}

/// Attribute form accepted on deserialization: `{ "name": ..., "price": "$3.75" }`.
#[derive(Debug, Deserialize)]
struct ItemAttributes {
    name: String,
    price: Price,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Price) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self { name, price })
    }

    /// Build an item from a dollar string such as `"$3.75"`.
    pub fn parse(name: impl Into<String>, price: &str) -> DomainResult<Self> {
        Self::new(name, price.parse()?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl ValueObject for Item {}

impl TryFrom<ItemAttributes> for Item {
    type Error = DomainError;

    fn try_from(value: ItemAttributes) -> Result<Self, Self::Error> {
        Item::new(value.name, value.price)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}
