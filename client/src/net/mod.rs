//! Networking modules for the product REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the gateway seam and its HTTP implementation, `types` the
//! wire schema, and `error` the failure kinds shown to the user.

pub mod api;
pub mod error;
pub mod types;
