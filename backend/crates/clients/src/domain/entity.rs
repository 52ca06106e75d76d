//! Client Entity

use kernel::document::Document;
use serde::{Deserialize, Serialize};

/// Client entity
///
/// Keyed by document. Built only by the create use case and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Tax document (primary key)
    pub document: Document,
    /// Display name, trimmed
    pub name: String,
    /// Contact email, trimmed
    pub email: String,
}

impl Client {
    /// Create a new client
    pub fn new(document: Document, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            document,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_item_shape() {
        let client = Client::new(
            Document::parse("12345678901").unwrap(),
            "Maria Silva",
            "maria@example.com",
        );

        let item = serde_json::to_value(&client).unwrap();
        assert_eq!(
            item,
            serde_json::json!({
                "document": "12345678901",
                "name": "Maria Silva",
                "email": "maria@example.com",
            })
        );
    }

    #[test]
    fn test_stored_item_with_bad_document_is_rejected() {
        let item = serde_json::json!({
            "document": "123",
            "name": "Maria Silva",
            "email": "maria@example.com",
        });
        assert!(serde_json::from_value::<Client>(item).is_err());
    }
}
