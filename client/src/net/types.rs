//! Wire DTOs for the `/produtos` endpoint.
//!
//! DESIGN
//! ======
//! Identifiers are server-assigned and opaque to the client. The server emits
//! them as JSON numbers, but the client carries them as text so that any
//! backend (numeric or string keys) renders unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A product as returned by the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, kept verbatim.
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "preco")]
    pub price: f64,
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
