use std::fmt;

use bigdecimal::{BigDecimal, Zero};

use super::errors::DomainError;

pub const DEFAULT_CART_ID: &str = "default";

/// Stable key of a persisted cart document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartId(String);

impl CartId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidInput(
                "cart id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self(DEFAULT_CART_ID.to_string())
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: BigDecimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidInput(
                "product must have a non-empty name".to_string(),
            ));
        }
        if self.price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "product '{}' must have a non-negative price, got {}",
                self.name, self.price
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn empty(id: CartId) -> Self {
        Self { id, items: vec![] }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same product name keeps the price it was
    /// first added with; only its quantity grows.
    pub fn add(&mut self, product: &Product) -> Result<(), DomainError> {
        product.validate()?;

        match self
            .items
            .iter_mut()
            .find(|item| item.product.name == product.name)
        {
            Some(item) => {
                item.quantity = item.quantity.checked_add(1).ok_or_else(|| {
                    DomainError::InvalidInput(format!(
                        "quantity of '{}' cannot grow any further",
                        product.name
                    ))
                })?;
            }
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
        Ok(())
    }

    /// Remove every line for `name`. Returns whether anything was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.name != name);
        self.items.len() < before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn products_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    pub fn total_price(&self) -> BigDecimal {
        self.items.iter().fold(BigDecimal::zero(), |total, item| {
            total + item.product.price.clone() * BigDecimal::from(item.quantity)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: i64) -> Product {
        Product::new(name, BigDecimal::from(price))
    }

    #[test]
    fn cart_id_rejects_empty_key() {
        assert!(matches!(CartId::new(""), Err(DomainError::InvalidInput(_))));
        assert_eq!(CartId::new("shop").unwrap().as_str(), "shop");
        assert_eq!(CartId::default().to_string(), DEFAULT_CART_ID);
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = product("", 1).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let err = product("Pen", -1).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn validate_accepts_free_product() {
        assert!(product("Sticker", 0).validate().is_ok());
    }

    #[test]
    fn add_appends_new_line_with_quantity_one() {
        let mut cart = Cart::empty(CartId::default());
        cart.add(&product("Pen", 2)).unwrap();

        assert_eq!(
            cart.items,
            vec![CartItem {
                product: product("Pen", 2),
                quantity: 1
            }]
        );
        assert_eq!(cart.total_price(), BigDecimal::from(2));
    }

    #[test]
    fn repeated_add_keeps_first_price() {
        let mut cart = Cart::empty(CartId::default());
        cart.add(&product("Pen", 2)).unwrap();
        cart.add(&product("Pen", 5)).unwrap();
        cart.add(&product("Pen", 7)).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.items[0].product.price, BigDecimal::from(2));
    }

    #[test]
    fn invalid_add_leaves_cart_untouched() {
        let mut cart = Cart::empty(CartId::default());
        cart.add(&product("Pen", 2)).unwrap();
        let before = cart.clone();

        assert!(cart.add(&product("", 3)).is_err());
        assert!(cart.add(&product("Book", -10)).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn add_refuses_quantity_overflow() {
        let mut cart = Cart::empty(CartId::default());
        cart.items.push(CartItem {
            product: product("Pen", 2),
            quantity: i32::MAX,
        });

        assert!(cart.add(&product("Pen", 2)).is_err());
        assert_eq!(cart.items[0].quantity, i32::MAX);
    }

    #[test]
    fn remove_by_name_only_touches_matching_line() {
        let mut cart = Cart::empty(CartId::default());
        cart.add(&product("Pen", 2)).unwrap();
        cart.add(&product("Book", 10)).unwrap();

        assert!(cart.remove_by_name("Pen"));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product.name, "Book");

        assert!(!cart.remove_by_name("Pen"));
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn aggregates_over_mixed_cart() {
        let mut cart = Cart::empty(CartId::default());
        cart.add(&product("Pen", 2)).unwrap();
        cart.add(&product("Book", 10)).unwrap();
        cart.add(&product("Pen", 2)).unwrap();

        assert_eq!(cart.products_quantity(), 3);
        assert_eq!(cart.total_price(), BigDecimal::from(14));

        cart.clear();
        assert_eq!(cart.products_quantity(), 0);
        assert_eq!(cart.total_price(), BigDecimal::zero());
    }

    #[test]
    fn total_price_handles_fractional_prices() {
        let mut cart = Cart::empty(CartId::default());
        let price: BigDecimal = "9.99".parse().unwrap();
        cart.add(&Product::new("Mug", price.clone())).unwrap();
        cart.add(&Product::new("Mug", price)).unwrap();

        assert_eq!(cart.total_price(), "19.98".parse::<BigDecimal>().unwrap());
    }
}
