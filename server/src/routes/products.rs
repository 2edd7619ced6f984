//! `/produtos` collection routes.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::warn;

use crate::services::product::{self, ProductError, ProductInput, ProductRow};
use crate::state::AppState;

pub(crate) fn product_error_to_status(err: ProductError) -> StatusCode {
    match err {
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::Invalid(_) => StatusCode::BAD_REQUEST,
        ProductError::Database(e) => {
            warn!(error = %e, "product query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /produtos` — list all products.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductRow>>, StatusCode> {
    let rows = product::list_products(&state.pool)
        .await
        .map_err(product_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /produtos/:id` — fetch one product.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductRow>, StatusCode> {
    let row = product::get_product(&state.pool, id)
        .await
        .map_err(product_error_to_status)?;
    Ok(Json(row))
}

/// `POST /produtos` — create a product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductInput>,
) -> Result<(StatusCode, Json<ProductRow>), StatusCode> {
    let row = product::create_product(&state.pool, &body)
        .await
        .map_err(product_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PUT /produtos/:id` — replace a product's name and price.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ProductInput>,
) -> Result<Json<ProductRow>, StatusCode> {
    let row = product::update_product(&state.pool, id, &body)
        .await
        .map_err(product_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /produtos/:id` — delete a product.
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    product::delete_product(&state.pool, id)
        .await
        .map_err(product_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}
