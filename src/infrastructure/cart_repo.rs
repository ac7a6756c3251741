use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use serde_json::{json, Value};

use crate::db::DbPool;
use crate::domain::cart::{Cart, CartId, CartItem};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CartMutation, CartRepository};
use crate::schema::carts;

use super::models::{CartItemDocument, CartRow, NewCartRow};

// ── Document codec ────────────────────────────────────────────────────────────

/// Decode the `items` column. A JSON `null` counts as a missing field and is
/// reported back so the caller can repair the stored document.
fn decode_items(value: Value) -> Result<(Vec<CartItem>, bool), DomainError> {
    if value.is_null() {
        return Ok((vec![], true));
    }
    let docs: Vec<CartItemDocument> =
        serde_json::from_value(value).map_err(|e| DomainError::CorruptDocument(e.to_string()))?;
    Ok((docs.into_iter().map(CartItem::from).collect(), false))
}

fn encode_items(items: &[CartItem]) -> Result<Value, DomainError> {
    let docs: Vec<CartItemDocument> = items.iter().map(CartItemDocument::from).collect();
    serde_json::to_value(docs).map_err(|e| DomainError::Internal(e.to_string()))
}

// ── Queries ───────────────────────────────────────────────────────────────────

fn ensure_cart(conn: &mut PgConnection, id: &CartId) -> QueryResult<usize> {
    diesel::insert_into(carts::table)
        .values(&NewCartRow {
            id: id.as_str().to_string(),
            items: json!([]),
        })
        .on_conflict_do_nothing()
        .execute(conn)
}

fn write_items(conn: &mut PgConnection, id: &CartId, items: &[CartItem]) -> Result<(), DomainError> {
    let value = encode_items(items)?;
    diesel::update(carts::table.find(id.as_str()))
        .set((carts::items.eq(value), carts::updated_at.eq(Utc::now())))
        .execute(conn)?;
    Ok(())
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Cart documents stored as JSONB rows in the `carts` table, keyed by cart id.
pub struct DieselCartRepository {
    pool: DbPool,
}

impl DieselCartRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CartRepository for DieselCartRepository {
    fn load_or_create(&self, id: &CartId) -> Result<Cart, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            ensure_cart(conn, id)?;

            let row = carts::table
                .find(id.as_str())
                .select(CartRow::as_select())
                .get_result(conn)?;

            let (items, repaired) = decode_items(row.items)?;
            if repaired {
                log::warn!("Cart '{}' had no items field, resetting it", id);
                write_items(conn, id, &items)?;
            }

            Ok(Cart {
                id: id.clone(),
                items,
            })
        })
    }

    fn update(&self, id: &CartId, mutation: &mut CartMutation<'_>) -> Result<Cart, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            ensure_cart(conn, id)?;

            // Row lock serializes concurrent read-modify-write cycles on the
            // same cart; it is released on commit or rollback.
            let row = carts::table
                .find(id.as_str())
                .select(CartRow::as_select())
                .for_update()
                .get_result(conn)?;

            let (items, repaired) = decode_items(row.items)?;
            let mut cart = Cart {
                id: id.clone(),
                items,
            };

            let changed = mutation(&mut cart)?;
            if changed || repaired {
                write_items(conn, id, &cart.items)?;
            }

            Ok(cart)
        })
    }
}
