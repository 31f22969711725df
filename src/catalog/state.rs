//! Catalog State Management
//!
//! The catalog is process-wide and shared by every chat. Products live in a
//! `DashMap`, so a stock check-and-decrement holds the lock of that one
//! product's shard and nothing else.

use super::models::Product;
use crate::error::{StoreError, StoreResult};
use dashmap::{mapref::entry::Entry, DashMap};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

/// A product plus the position it was first listed at.
#[derive(Debug, Clone)]
struct Listing {
    seq: u64,
    product: Product,
}

/// In-memory product catalog
#[derive(Debug, Default)]
pub struct Catalog {
    items: DashMap<String, Listing>,
    next_seq: AtomicU64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store's opening stock.
    pub fn with_default_stock() -> Self {
        let catalog = Self::new();
        let stock: [(&str, u32, Decimal, &str); 15] = [
            ("Rice", 50, Decimal::new(25, 1), "Long grain white rice"),
            ("Sugar", 20, Decimal::from(3), "Granulated white sugar"),
            ("Flour", 30, Decimal::from(2), "All-purpose flour"),
            ("Salt", 40, Decimal::from(1), "Fine sea salt"),
            ("Eggs", 60, Decimal::new(5, 1), "Large brown eggs"),
            ("Milk", 25, Decimal::new(25, 1), "Whole milk"),
            ("Butter", 15, Decimal::from(4), "Unsalted butter"),
            ("Bread", 10, Decimal::from(3), "Sourdough bread"),
            ("Cheese", 20, Decimal::from(5), "Cheddar cheese"),
            ("Chicken", 5, Decimal::from(10), "Boneless chicken breast"),
            ("Beef", 5, Decimal::from(12), "Ground beef"),
            ("Fish", 5, Decimal::from(8), "Salmon fillet"),
            ("Vegetables", 20, Decimal::new(15, 1), "Mixed vegetables"),
            ("Fruits", 30, Decimal::from(2), "Assorted fruits"),
            ("Water", 40, Decimal::from(1), "Bottled water"),
        ];
        for (name, quantity, price, description) in stock {
            catalog.add_item(name, quantity, price, description);
        }
        catalog
    }

    /// Inserts a product or overwrites the existing one with the same name.
    ///
    /// An overwritten product keeps its original place in [`Catalog::list_all`].
    pub fn add_item(
        &self,
        name: impl Into<String>,
        quantity: u32,
        price: Decimal,
        description: impl Into<String>,
    ) -> Product {
        let name = name.into();
        let product = Product {
            name: name.clone(),
            quantity,
            price,
            description: description.into(),
        };

        match self.items.entry(name) {
            Entry::Occupied(mut slot) => slot.get_mut().product = product.clone(),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(Listing {
                    seq,
                    product: product.clone(),
                });
            }
        }
        product
    }

    /// Exact-name lookup.
    pub fn get_item(&self, name: &str) -> Option<Product> {
        self.items.get(name).map(|listing| listing.product.clone())
    }

    /// Lookup for names typed by customers: exact match first, then
    /// case-insensitive.
    pub fn resolve(&self, name: &str) -> Option<Product> {
        let name = name.trim();
        self.get_item(name).or_else(|| {
            self.items
                .iter()
                .find(|listing| listing.key().eq_ignore_ascii_case(name))
                .map(|listing| listing.product.clone())
        })
    }

    /// Takes `quantity` units out of stock and returns what is left.
    ///
    /// Fails without touching the product when stock is short.
    pub fn decrement(&self, name: &str, quantity: u32) -> StoreResult<u32> {
        let mut listing = self
            .items
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        let available = listing.product.quantity;
        if quantity > available {
            return Err(StoreError::InsufficientStock {
                requested: quantity,
                available,
            });
        }
        listing.product.quantity = available - quantity;
        Ok(listing.product.quantity)
    }

    /// Puts units back on the shelf.
    pub fn restock(&self, name: &str, quantity: u32) -> StoreResult<u32> {
        let mut listing = self
            .items
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        listing.product.quantity = listing.product.quantity.saturating_add(quantity);
        Ok(listing.product.quantity)
    }

    /// Every product, in the order it was first added.
    pub fn list_all(&self) -> Vec<Product> {
        let mut listings: Vec<Listing> = self.items.iter().map(|l| l.value().clone()).collect();
        listings.sort_by_key(|l| l.seq);
        listings.into_iter().map(|l| l.product).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_overwrites_in_place() {
        let catalog = Catalog::new();
        catalog.add_item("Rice", 50, Decimal::new(25, 1), "Long grain");
        catalog.add_item("Salt", 40, Decimal::from(1), "Fine sea salt");
        catalog.add_item("Rice", 10, Decimal::from(3), "Basmati");

        let rice = catalog.get_item("Rice").unwrap();
        assert_eq!(rice.quantity, 10);
        assert_eq!(rice.price, Decimal::from(3));
        assert_eq!(rice.description, "Basmati");

        let names: Vec<String> = catalog.list_all().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Rice", "Salt"]);
    }

    #[test]
    fn default_stock_is_listed_in_order() {
        let catalog = Catalog::with_default_stock();
        let products = catalog.list_all();
        assert_eq!(products.len(), 15);
        assert_eq!(products[0].name, "Rice");
        assert_eq!(products[14].name, "Water");
        assert_eq!(products[4].price.to_string(), "0.5");
    }

    #[test]
    fn decrement_never_goes_negative() {
        let catalog = Catalog::new();
        catalog.add_item("Beef", 5, Decimal::from(12), "Ground beef");

        assert_eq!(catalog.decrement("Beef", 3), Ok(2));
        assert_eq!(
            catalog.decrement("Beef", 3),
            Err(StoreError::InsufficientStock {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(catalog.decrement("Beef", 2), Ok(0));
        assert!(catalog.decrement("Beef", 1).is_err());
        assert_eq!(catalog.get_item("Beef").unwrap().quantity, 0);
    }

    #[test]
    fn decrement_unknown_product() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.decrement("Caviar", 1),
            Err(StoreError::NotFound("Caviar".into()))
        );
    }

    #[test]
    fn resolve_ignores_case() {
        let catalog = Catalog::with_default_stock();
        assert_eq!(catalog.resolve("rice").unwrap().name, "Rice");
        assert_eq!(catalog.resolve(" MILK ").unwrap().name, "Milk");
        assert!(catalog.resolve("caviar").is_none());
        assert!(catalog.get_item("rice").is_none());
    }

    #[test]
    fn concurrent_decrements_respect_stock() {
        let catalog = std::sync::Arc::new(Catalog::new());
        catalog.add_item("Fish", 5, Decimal::from(8), "Salmon fillet");

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let catalog = catalog.clone();
                std::thread::spawn(move || catalog.decrement("Fish", 1).is_ok())
            })
            .collect();
        let sold = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(sold, 5);
        assert_eq!(catalog.get_item("Fish").unwrap().quantity, 0);
    }
}
