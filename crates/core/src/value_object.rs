//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal and
//! interchangeable (an `Item` stocked by two trucks is the same item).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Price { cents: u64 }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { cents: 375 }, Price { cents: 375 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
