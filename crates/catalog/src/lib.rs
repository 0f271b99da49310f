//! Catalog domain module.
//!
//! Items sold at an event are plain value objects: a name and a price. Trucks
//! key their stock by `Item`, so equality and hashing cover both fields.

pub mod item;
pub mod price;

pub use item::Item;
pub use price::Price;
