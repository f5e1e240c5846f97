//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are the same value. A product grade
/// is a value object; a product is not (it has an identity, see
/// [`Entity`](crate::Entity)).
///
/// The trait bounds keep value objects cheap to copy, comparable, and
/// debuggable. To "modify" one, construct a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
