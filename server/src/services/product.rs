//! Product service — validation and CRUD against the `products` table.
//!
//! DESIGN
//! ======
//! Input is checked before any query runs, so malformed requests never touch
//! the pool. Names are stored trimmed.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product not found: {0}")]
    NotFound(i64),
    #[error("invalid product: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from product queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<(i64, String, f64)> for ProductRow {
    fn from((id, name, price): (i64, String, f64)) -> Self {
        Self { id, name, price }
    }
}

/// Fields accepted on create and update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductInput {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "preco")]
    pub price: f64,
}

impl ProductInput {
    /// Check the input and return it with the name trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::Invalid` for a blank name or a price that is
    /// not a positive finite number.
    pub fn validated(&self) -> Result<Self, ProductError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductError::Invalid("name must not be blank"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ProductError::Invalid("price must be a positive number"));
        }
        Ok(Self { name: name.to_owned(), price: self.price })
    }
}

// =============================================================================
// CRUD
// =============================================================================

/// List every product in id order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_products(pool: &PgPool) -> Result<Vec<ProductRow>, ProductError> {
    let rows = sqlx::query_as::<_, (i64, String, f64)>("SELECT id, name, price FROM products ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(ProductRow::from).collect())
}

/// Fetch one product.
///
/// # Errors
///
/// Returns `NotFound` if no row has `id`, or a database error.
pub async fn get_product(pool: &PgPool, id: i64) -> Result<ProductRow, ProductError> {
    sqlx::query_as::<_, (i64, String, f64)>("SELECT id, name, price FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(ProductRow::from)
        .ok_or(ProductError::NotFound(id))
}

/// Create a product.
///
/// # Errors
///
/// Returns `Invalid` for bad input, or a database error if the insert fails.
pub async fn create_product(pool: &PgPool, input: &ProductInput) -> Result<ProductRow, ProductError> {
    let input = input.validated()?;
    let row = sqlx::query_as::<_, (i64, String, f64)>(
        "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
    )
    .bind(&input.name)
    .bind(input.price)
    .fetch_one(pool)
    .await?;

    let row = ProductRow::from(row);
    info!(product_id = row.id, name = %row.name, "product created");
    Ok(row)
}

/// Replace a product's name and price.
///
/// # Errors
///
/// Returns `Invalid` for bad input, `NotFound` if the row is missing, or a
/// database error.
pub async fn update_product(pool: &PgPool, id: i64, input: &ProductInput) -> Result<ProductRow, ProductError> {
    let input = input.validated()?;
    let row = sqlx::query_as::<_, (i64, String, f64)>(
        "UPDATE products SET name = $2, price = $3 WHERE id = $1 RETURNING id, name, price",
    )
    .bind(id)
    .bind(&input.name)
    .bind(input.price)
    .fetch_optional(pool)
    .await?
    .map(ProductRow::from)
    .ok_or(ProductError::NotFound(id))?;

    info!(product_id = id, "product updated");
    Ok(row)
}

/// Delete a product.
///
/// # Errors
///
/// Returns `NotFound` if the row is missing, or a database error.
pub async fn delete_product(pool: &PgPool, id: i64) -> Result<(), ProductError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ProductError::NotFound(id));
    }

    info!(product_id = id, "product deleted");
    Ok(())
}
