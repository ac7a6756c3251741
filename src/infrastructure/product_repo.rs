use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::db::DbPool;
use crate::domain::cart::Product;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductCatalog;
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

pub struct DieselProductCatalog {
    pool: DbPool,
}

impl DieselProductCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert `product`, or update its price if the name is already listed.
    pub fn upsert(&self, product: &Product) -> Result<(), DomainError> {
        product.validate()?;
        let mut conn = self.pool.get()?;

        diesel::insert_into(products::table)
            .values(&NewProductRow {
                name: product.name.clone(),
                price: product.price.clone(),
            })
            .on_conflict(products::name)
            .do_update()
            .set(products::price.eq(excluded(products::price)))
            .execute(&mut conn)?;
        Ok(())
    }
}

impl ProductCatalog for DieselProductCatalog {
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .find(name)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(|r| Product::new(r.name, r.price)))
    }
}
