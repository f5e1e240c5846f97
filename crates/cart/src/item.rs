//! Cart item: a catalog product plus a selected unit count.

use serde::{Deserialize, Serialize};

use shopfront_catalog::Product;
use shopfront_core::{DomainError, DomainResult};

/// One line of a shopping cart.
///
/// Composition rather than inheritance: the catalog shape can evolve without
/// dragging the cart shape along. On the wire the product fields are
/// flattened, so the record keeps the flat "all Product fields plus
/// `quantity`" shape the front end expects.
///
/// Aggregation, totals, and dedup/merging of lines with the same product id
/// are left to the consuming application; this crate defines the line shape
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Build a cart line from a catalog product and a unit count.
    ///
    /// Structural extension is lossless: every field of `product` is retained
    /// unchanged, with `quantity` carried alongside.
    pub fn new(product: Product, quantity: u32) -> DomainResult<Self> {
        let item = Self { product, quantity };
        item.validate()?;
        Ok(item)
    }

    /// Re-check line invariants, including the embedded product's.
    pub fn validate(&self) -> DomainResult<()> {
        self.product.validate()?;

        if self.quantity == 0 {
            return Err(DomainError::invariant("quantity must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shopfront_catalog::{GradeType, ProductId};

    fn widget() -> Product {
        Product::new(
            ProductId::new(1),
            "Widget",
            9.99,
            GradeType::Hg,
            "https://example/1",
        )
        .unwrap()
    }

    #[test]
    fn extension_retains_every_product_field() {
        let product = widget();
        let item = CartItem::new(product.clone(), 3).unwrap();

        assert_eq!(item.product, product);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn new_rejects_zero_quantity() {
        let err = CartItem::new(widget(), 0).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation error for zero quantity"),
        }
    }

    #[test]
    fn new_revalidates_the_embedded_product() {
        let mut product = widget();
        product.name.clear();

        let err = CartItem::new(product, 2).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for invalid product"),
        }
    }

    #[test]
    fn serializes_to_the_flat_cart_shape() {
        let item = CartItem::new(widget(), 3).unwrap();
        let value = serde_json::to_value(item).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Widget",
                "price": 9.99,
                "grade": "hg",
                "link": "https://example/1",
                "quantity": 3,
            })
        );
    }

    #[test]
    fn deserializes_from_the_flat_cart_shape() {
        let item: CartItem = serde_json::from_value(json!({
            "id": 7,
            "name": "Gadget",
            "price": 120.0,
            "grade": "sd",
            "link": "https://example/7",
            "quantity": 2,
        }))
        .unwrap();
        item.validate().unwrap();

        assert_eq!(item.product.id, ProductId::new(7));
        assert_eq!(item.product.grade, GradeType::Sd);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn validate_catches_zero_quantity_after_deserialization() {
        let item: CartItem = serde_json::from_value(json!({
            "id": 7,
            "name": "Gadget",
            "price": 120.0,
            "grade": "sd",
            "link": "https://example/7",
            "quantity": 0,
        }))
        .unwrap();
        match item.validate() {
            Err(DomainError::InvariantViolation(_)) => {}
            _ => panic!("Expected InvariantViolation error for deserialized zero quantity"),
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                any::<u64>(),
                "[A-Za-z][A-Za-z0-9 ]{0,49}",
                0.0f64..1_000_000.0,
                0usize..5,
                "https://[a-z]{1,12}/[0-9]{1,6}",
            )
                .prop_map(|(id, name, price, grade_idx, link)| {
                    Product::new(
                        ProductId::new(id),
                        name,
                        price,
                        GradeType::ALL[grade_idx],
                        link,
                    )
                    .unwrap()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: structural extension is lossless for any valid
            /// product and positive quantity.
            #[test]
            fn extension_is_lossless(
                product in arb_product(),
                quantity in 1u32..10_000,
            ) {
                let item = CartItem::new(product.clone(), quantity).unwrap();
                prop_assert_eq!(item.product, product);
                prop_assert_eq!(item.quantity, quantity);
            }

            /// Property: the flattened wire shape survives a serde round
            /// trip (flattening must not shadow or drop fields).
            #[test]
            fn flat_wire_shape_round_trips(
                product in arb_product(),
                quantity in 1u32..10_000,
            ) {
                let item = CartItem::new(product, quantity).unwrap();
                let value = serde_json::to_value(&item).unwrap();

                prop_assert!(value.get("quantity").is_some());
                prop_assert!(value.get("product").is_none());

                let decoded: CartItem = serde_json::from_value(value).unwrap();
                prop_assert_eq!(decoded, item);
            }
        }
    }
}
