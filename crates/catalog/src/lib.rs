//! Catalog record vocabulary.
//!
//! Pure data shapes for sellable catalog entries, populated by an upstream
//! feed and consumed by the cart. No storage, no HTTP, no pricing logic.

pub mod grade;
pub mod product;

pub use grade::GradeType;
pub use product::{Product, ProductId};
