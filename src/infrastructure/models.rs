use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::cart::{CartItem, Product};
use crate::schema::{carts, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = carts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartRow {
    pub id: String,
    pub items: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = carts)]
pub struct NewCartRow {
    pub id: String,
    pub items: Value,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(primary_key(name))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub name: String,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub name: String,
    pub price: BigDecimal,
}

// ── JSONB document shape ──────────────────────────────────────────────────────
//
// `carts.items` holds `[{ "product": { "name", "price" }, "quantity" }]`.
// Prices are written as decimal strings.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    pub name: String,
    pub price: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDocument {
    pub product: ProductDocument,
    pub quantity: i32,
}

impl From<&CartItem> for CartItemDocument {
    fn from(item: &CartItem) -> Self {
        Self {
            product: ProductDocument {
                name: item.product.name.clone(),
                price: item.product.price.clone(),
            },
            quantity: item.quantity,
        }
    }
}

impl From<CartItemDocument> for CartItem {
    fn from(doc: CartItemDocument) -> Self {
        Self {
            product: Product::new(doc.product.name, doc.product.price),
            quantity: doc.quantity,
        }
    }
}
