use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::cart::{Cart, CartId, CartItem, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CartRepository, ProductCatalog};

/// Operations on the shop's cart document.
///
/// Every method is a single keyed read-modify-write against the repository.
/// Failures are returned to the caller; nothing is swallowed here.
pub struct CartService {
    carts: Arc<dyn CartRepository>,
    catalog: Arc<dyn ProductCatalog>,
    cart_id: CartId,
}

impl CartService {
    pub fn new(
        carts: Arc<dyn CartRepository>,
        catalog: Arc<dyn ProductCatalog>,
        cart_id: CartId,
    ) -> Self {
        Self {
            carts,
            catalog,
            cart_id,
        }
    }

    pub fn cart_id(&self) -> &CartId {
        &self.cart_id
    }

    pub fn get_cart(&self) -> Result<Cart, DomainError> {
        self.carts.load_or_create(&self.cart_id)
    }

    pub fn add(&self, product: &Product) -> Result<Cart, DomainError> {
        product.validate()?;

        let cart = self.carts.update(&self.cart_id, &mut |cart| {
            cart.add(product)?;
            Ok(true)
        })?;

        log::info!(
            "Product '{}' added/updated in cart '{}'",
            product.name,
            self.cart_id
        );
        Ok(cart)
    }

    /// Resolve `name` in the product catalog and add it to the cart.
    pub fn add_product_by_name(&self, name: &str) -> Result<Cart, DomainError> {
        let product = self
            .catalog
            .find_by_name(name)?
            .ok_or_else(|| DomainError::ProductNotFound(name.to_string()))?;

        self.add(&product)
    }

    pub fn delete_product_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let mut removed = false;
        self.carts.update(&self.cart_id, &mut |cart| {
            removed = cart.remove_by_name(name);
            Ok(removed)
        })?;

        if removed {
            log::info!("Product '{}' removed from cart '{}'", name, self.cart_id);
        } else {
            log::debug!("Product '{}' not found in cart '{}'", name, self.cart_id);
        }
        Ok(removed)
    }

    pub fn get_items(&self) -> Result<Vec<CartItem>, DomainError> {
        Ok(self.get_cart()?.items)
    }

    pub fn get_products_quantity(&self) -> Result<i64, DomainError> {
        Ok(self.get_cart()?.products_quantity())
    }

    pub fn get_total_price(&self) -> Result<BigDecimal, DomainError> {
        Ok(self.get_cart()?.total_price())
    }

    pub fn clear_cart(&self) -> Result<(), DomainError> {
        self.carts.update(&self.cart_id, &mut |cart| {
            cart.clear();
            Ok(true)
        })?;

        log::info!("Cart '{}' cleared", self.cart_id);
        Ok(())
    }
}
