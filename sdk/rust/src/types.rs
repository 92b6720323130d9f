//! Wire types shared by the product API server and its clients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Server-assigned product identifier.
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A product record as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned on creation.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Free-form description, absent when never provided.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Description to display, `None` when absent or blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// Error body returned by the API on failure: `{"error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_without_description() {
        let product: Product =
            serde_json::from_str(r#"{"id": 3, "name": "Mug", "price": 4}"#).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.price, 4.0);
        assert!(product.description_text().is_none());

        let blank: Product =
            serde_json::from_str(r#"{"id": 4, "name": "Cup", "price": 2.5, "description": ""}"#)
                .unwrap();
        assert!(blank.description_text().is_none());
    }

    #[test]
    fn test_product_id_is_plain_integer() {
        let json = serde_json::to_string(&ProductId(42)).unwrap();
        assert_eq!(json, "42");
        assert_eq!(" 17 ".parse::<ProductId>().unwrap(), ProductId(17));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
