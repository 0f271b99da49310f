//! `truckfest-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog,
//! inventory and event crates (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod ordered;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use ordered::OrderedMap;
pub use value_object::ValueObject;
