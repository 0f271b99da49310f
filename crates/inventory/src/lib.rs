//! Inventory domain module.
//!
//! A food truck owns the stock it carries: quantities per catalog item, kept
//! in the order each item was first stocked. Pure in-memory domain logic.

pub mod food_truck;

pub use food_truck::{FoodTruck, FoodTruckId};
