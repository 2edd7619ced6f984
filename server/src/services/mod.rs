//! Domain services backing the REST routes.

pub mod product;
