//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Cart line items are entities keyed by their product name: adding the same
/// name twice changes the existing item instead of creating a second one.
pub trait Entity {
    /// Identity key of the entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
