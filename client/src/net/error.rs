//! Client-side failure kinds.

/// Failures surfaced to the user in a message region.
///
/// `Validation` never reaches the network; `Network` covers both transport
/// failures and non-success HTTP statuses.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Network(String),
}
