//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog keeps no in-memory copy of products, so the pool is all it holds.

use sqlx::PgPool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `PgPool` is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
