//! In-memory storage backed by `DashMap`.
//!
//! Each cart lives in its own map entry; `update` keeps the entry's shard
//! locked for the whole read-modify-write, so concurrent mutations of one
//! cart are serialized just like the row lock in the Postgres repository.

use dashmap::DashMap;

use crate::domain::cart::{Cart, CartId, CartItem, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CartMutation, CartRepository, ProductCatalog};

#[derive(Debug, Default)]
pub struct MemoryCartRepository {
    carts: DashMap<CartId, Vec<CartItem>>,
}

impl CartRepository for MemoryCartRepository {
    fn load_or_create(&self, id: &CartId) -> Result<Cart, DomainError> {
        let items = self.carts.entry(id.clone()).or_default();
        Ok(Cart {
            id: id.clone(),
            items: items.value().clone(),
        })
    }

    fn update(&self, id: &CartId, mutation: &mut CartMutation<'_>) -> Result<Cart, DomainError> {
        let mut items = self.carts.entry(id.clone()).or_default();
        let mut cart = Cart {
            id: id.clone(),
            items: items.value().clone(),
        };

        if mutation(&mut cart)? {
            *items = cart.items.clone();
        }
        Ok(cart)
    }
}

#[derive(Debug, Default)]
pub struct MemoryProductCatalog {
    products: DashMap<String, Product>,
}

impl MemoryProductCatalog {
    /// Insert or replace the catalog record for `product.name`.
    pub fn insert(&self, product: Product) {
        self.products.insert(product.name.clone(), product);
    }
}

impl ProductCatalog for MemoryProductCatalog {
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.products.get(name).map(|entry| entry.value().clone()))
    }
}
