//! Product record: the sellable catalog entry shape.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity};

use crate::grade::GradeType;

/// Product identifier, assigned by the upstream catalog system.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = u64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

/// Sellable catalog entry.
///
/// The upstream feed populates these records; this crate only constrains
/// their shape and validates them. The `id` is immutable in intent: no
/// mutator is offered, records are plain values.
///
/// Currency and precision of `price` are the feed's concern, as is whether
/// `link` actually resolves; this crate checks only what the shape itself can
/// promise (see [`Product::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub grade: GradeType,
    pub link: String,
}

impl Product {
    /// Validating constructor.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        grade: GradeType,
        link: impl Into<String>,
    ) -> DomainResult<Self> {
        let product = Self {
            id,
            name: name.into(),
            price,
            grade,
            link: link.into(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Re-check record invariants.
    ///
    /// Deserialization does not go through [`Product::new`], so feed data
    /// should be passed through here after decoding. The grade is already
    /// closed at the type level; this covers the remaining fields.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if !self.price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }

        if self.price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }

        if self.link.trim().is_empty() {
            return Err(DomainError::validation("link cannot be empty"));
        }

        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
