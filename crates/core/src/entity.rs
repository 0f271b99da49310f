//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A food truck keeps its identity while its stock changes; two trucks with
/// the same name and stock are still different trucks.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
