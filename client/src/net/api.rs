//! REST gateway for the product collection endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the catalog is only
//! fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures carry the underlying error text. Non-success statuses
//! carry the status text, falling back to the numeric code when the server
//! (or HTTP/2) sends no reason phrase.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::CatalogError;
use super::types::{NewProduct, Product};

/// Same-origin path served by `catalog-server`.
pub const DEFAULT_PRODUCTS_ENDPOINT: &str = "/produtos";

/// Products URL, overridable at build time with `CATALOG_API_URL`.
pub fn products_endpoint() -> &'static str {
    option_env!("CATALOG_API_URL").unwrap_or(DEFAULT_PRODUCTS_ENDPOINT)
}

/// The two operations the catalog page performs against the API.
#[allow(async_fn_in_trait)]
pub trait ProductGateway {
    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] on transport failure, non-OK status,
    /// or an undecodable body.
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;

    /// Submit a new product. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] on transport failure or non-2xx status.
    async fn create(&self, product: &NewProduct) -> Result<(), CatalogError>;
}

/// `gloo-net` backed gateway used in the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpGateway {
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(products_endpoint())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_detail(status: u16, status_text: &str) -> String {
    let text = status_text.trim();
    if text.is_empty() { status.to_string() } else { text.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16, status_text: &str) -> String {
    format!("Network error: {}", status_detail(status, status_text))
}

#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16, status_text: &str) -> String {
    format!("Server error: {}", status_detail(status, status_text))
}

impl ProductGateway for HttpGateway {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| CatalogError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(CatalogError::Network(list_failed_message(resp.status(), &resp.status_text())));
            }
            resp.json::<Vec<Product>>()
                .await
                .map_err(|e| CatalogError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(CatalogError::Network("not available on server".to_owned()))
        }
    }

    async fn create(&self, product: &NewProduct) -> Result<(), CatalogError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(product)
                .map_err(|e| CatalogError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| CatalogError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(CatalogError::Network(create_failed_message(resp.status(), &resp.status_text())));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product;
            Err(CatalogError::Network("not available on server".to_owned()))
        }
    }
}
