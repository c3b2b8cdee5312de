//! Cart mutation service: validation against the catalog, then cart edits.
//!
//! All catalog access on the mutation path funnels through
//! [`CartService::validate_for_cart`], which checks the request shape before
//! touching storage and never mutates inventory.

use storefront_catalog::CatalogStore;
use storefront_core::{DomainError, DomainResult, ProductId};

use crate::cart::Cart;
use crate::line::{CartLine, ValidatedLine};

#[derive(Debug, Clone)]
pub struct CartService<C> {
    catalog: C,
}

impl<C> CartService<C>
where
    C: CatalogStore,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Validate a (product, quantity) request for cart membership.
    ///
    /// Order matters: the quantity shape check happens before any catalog
    /// read. Returns a title/price snapshot on success; no side effects.
    pub fn validate_for_cart(
        &self,
        product_id: ProductId,
        requested: u32,
    ) -> DomainResult<ValidatedLine> {
        if requested < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        let product = self.catalog.get(product_id).ok_or(DomainError::NotFound)?;
        if product.available < requested {
            return Err(DomainError::insufficient_stock(format!(
                "out of stock for {}",
                product.title
            )));
        }
        Ok(ValidatedLine {
            product_id,
            title: product.title,
            price: product.price,
            quantity: requested,
        })
    }

    /// Add a product to the cart.
    ///
    /// If the cart already holds a line for this product the quantities are
    /// merged, and the *combined* quantity is validated against current
    /// stock. On failure the cart is left untouched.
    pub fn add_line(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        requested: u32,
    ) -> DomainResult<CartLine> {
        if requested < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        let combined = cart
            .quantity_of(product_id)
            .unwrap_or(0)
            .checked_add(requested)
            .ok_or_else(|| DomainError::validation("quantity too large"))?;
        let validated = self.validate_for_cart(product_id, combined)?;
        Ok(cart.put(validated.into_line()?))
    }

    /// Set the absolute quantity for a product in the cart.
    ///
    /// Re-validates exactly like add; replaces the existing line in place
    /// (fresh title/price snapshot, subtotal recomputed) or appends when the
    /// product is not yet in the cart.
    pub fn upsert_line(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        requested: u32,
    ) -> DomainResult<CartLine> {
        let validated = self.validate_for_cart(product_id, requested)?;
        Ok(cart.put(validated.into_line()?))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use storefront_catalog::Product;
    use storefront_core::Money;

    use super::*;

    /// Map-backed catalog double for service tests.
    #[derive(Default)]
    struct TestCatalog {
        products: RwLock<HashMap<ProductId, Product>>,
    }

    impl TestCatalog {
        fn insert(&self, product: Product) {
            self.products.write().unwrap().insert(product.id, product);
        }

        fn set_price(&self, id: ProductId, price: Money) {
            self.products.write().unwrap().get_mut(&id).unwrap().price = price;
        }
    }

    impl CatalogStore for TestCatalog {
        fn get(&self, id: ProductId) -> Option<Product> {
            self.products.read().unwrap().get(&id).cloned()
        }

        fn get_many(&self, ids: &[ProductId]) -> Vec<Product> {
            let m = self.products.read().unwrap();
            ids.iter().filter_map(|id| m.get(id).cloned()).collect()
        }
    }

    fn service_with(products: Vec<Product>) -> CartService<TestCatalog> {
        let catalog = TestCatalog::default();
        for p in products {
            catalog.insert(p);
        }
        CartService::new(catalog)
    }

    fn product(title: &str, available: u32, price_cents: u64) -> Product {
        Product::new(
            ProductId::new(),
            title,
            available,
            Money::from_cents(price_cents),
        )
        .unwrap()
    }

    #[test]
    fn add_line_snapshots_title_and_subtotal() {
        let p = product("Gadget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        let line = svc.add_line(&mut cart, id, 3).unwrap();
        assert_eq!(line.title, "Gadget");
        assert_eq!(line.quantity, 3);
        assert_eq!(line.subtotal, Money::from_cents(3000));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn add_line_rejects_zero_quantity_before_lookup() {
        // No product seeded: a zero quantity must fail validation, not NotFound.
        let svc = service_with(vec![]);
        let mut cart = Cart::new();

        let err = svc.add_line(&mut cart, ProductId::new(), 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn add_line_unknown_product_is_not_found() {
        let svc = service_with(vec![]);
        let mut cart = Cart::new();

        let err = svc.add_line(&mut cart, ProductId::new(), 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_line_beyond_stock_leaves_cart_unchanged() {
        let p = product("Scarce", 2, 500);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        let err = svc.add_line(&mut cart, id, 5).unwrap_err();
        assert!(matches!(err, DomainError::InsufficientStock(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn add_line_merges_quantities_for_same_product() {
        let p = product("Widget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        svc.add_line(&mut cart, id, 2).unwrap();
        let line = svc.add_line(&mut cart, id, 3).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(line.quantity, 5);
        assert_eq!(line.subtotal, Money::from_cents(5000));
    }

    #[test]
    fn add_line_merge_validates_combined_quantity() {
        let p = product("Widget", 4, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        svc.add_line(&mut cart, id, 3).unwrap();
        let err = svc.add_line(&mut cart, id, 2).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientStock(_)));
        assert_eq!(cart.quantity_of(id), Some(3));
    }

    #[test]
    fn upsert_replaces_rather_than_accumulates() {
        let p = product("Widget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        svc.upsert_line(&mut cart, id, 2).unwrap();
        let line = svc.upsert_line(&mut cart, id, 5).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(line.quantity, 5);
        assert_eq!(cart.quantity_of(id), Some(5));
    }

    #[test]
    fn upsert_appends_when_absent() {
        let p = product("Widget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        let line = svc.upsert_line(&mut cart, id, 2).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn upsert_beyond_stock_keeps_prior_line() {
        let p = product("Widget", 5, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        svc.upsert_line(&mut cart, id, 2).unwrap();
        let err = svc.upsert_line(&mut cart, id, 9).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientStock(_)));
        assert_eq!(cart.quantity_of(id), Some(2));
    }

    #[test]
    fn upsert_refreshes_price_snapshot() {
        let p = product("Widget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        svc.add_line(&mut cart, id, 2).unwrap();
        svc.catalog.set_price(id, Money::from_cents(1500));
        let line = svc.upsert_line(&mut cart, id, 2).unwrap();

        assert_eq!(line.subtotal, Money::from_cents(3000));
    }

    #[test]
    fn existing_lines_keep_stale_snapshot_after_price_change() {
        let p = product("Widget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);
        let mut cart = Cart::new();

        svc.add_line(&mut cart, id, 2).unwrap();
        svc.catalog.set_price(id, Money::from_cents(9999));

        assert_eq!(cart.lines()[0].subtotal, Money::from_cents(2000));
        assert_eq!(cart.total().unwrap(), Money::from_cents(2000));
    }

    #[test]
    fn validate_for_cart_has_no_side_effects() {
        let p = product("Widget", 10, 1000);
        let id = p.id;
        let svc = service_with(vec![p]);

        svc.validate_for_cart(id, 4).unwrap();
        assert_eq!(svc.catalog.get(id).unwrap().available, 10);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Subtotal always equals price × quantity for valid adds.
            #[test]
            fn add_subtotal_is_price_times_quantity(
                price_cents in 1u64..1_000_000,
                quantity in 1u32..1_000,
            ) {
                let p = Product::new(
                    ProductId::new(),
                    "Widget",
                    1_000,
                    Money::from_cents(price_cents),
                )
                .unwrap();
                let id = p.id;
                let svc = service_with(vec![p]);
                let mut cart = Cart::new();

                let line = svc.add_line(&mut cart, id, quantity).unwrap();
                prop_assert_eq!(
                    line.subtotal.cents(),
                    price_cents * u64::from(quantity)
                );
            }

            /// Requests above availability never touch the cart.
            #[test]
            fn overdraw_never_mutates_cart(
                available in 0u32..50,
                extra in 1u32..50,
            ) {
                let p = Product::new(
                    ProductId::new(),
                    "Widget",
                    available,
                    Money::from_cents(100),
                )
                .unwrap();
                let id = p.id;
                let svc = service_with(vec![p]);
                let mut cart = Cart::new();

                let res = svc.add_line(&mut cart, id, available + extra);
                prop_assert!(res.is_err());
                prop_assert!(cart.is_empty());
            }

            /// The last upsert wins regardless of the sequence before it.
            #[test]
            fn last_upsert_wins(quantities in proptest::collection::vec(1u32..20, 1..8)) {
                let p = Product::new(ProductId::new(), "Widget", 1_000, Money::from_cents(250))
                    .unwrap();
                let id = p.id;
                let svc = service_with(vec![p]);
                let mut cart = Cart::new();

                for &q in &quantities {
                    svc.upsert_line(&mut cart, id, q).unwrap();
                }

                prop_assert_eq!(cart.lines().len(), 1);
                prop_assert_eq!(cart.quantity_of(id), quantities.last().copied());
            }

            /// Cart total is always the sum of its cached line subtotals.
            #[test]
            fn total_is_sum_of_subtotals(
                inputs in proptest::collection::vec((1u64..10_000, 1u32..20), 0..10),
            ) {
                let mut products = Vec::new();
                for (price_cents, _) in &inputs {
                    products.push(
                        Product::new(
                            ProductId::new(),
                            "Widget",
                            1_000,
                            Money::from_cents(*price_cents),
                        )
                        .unwrap(),
                    );
                }
                let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();
                let svc = service_with(products);
                let mut cart = Cart::new();

                for (id, (_, quantity)) in ids.iter().zip(&inputs) {
                    svc.add_line(&mut cart, *id, *quantity).unwrap();
                }

                let expected: u64 = cart.lines().iter().map(|l| l.subtotal.cents()).sum();
                prop_assert_eq!(cart.total().unwrap().cents(), expected);
            }
        }
    }
}
