//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by its `Id`, not by its attribute values: two
/// records with the same identifier describe the same catalog entry even if
/// the upstream feed has since changed the other fields.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
