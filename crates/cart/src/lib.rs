//! Cart record vocabulary.
//!
//! The cart line shape consumed by an e-commerce front end. No cart
//! container, no totals, no checkout — those belong to the consuming
//! application.

pub mod item;

pub use item::CartItem;
