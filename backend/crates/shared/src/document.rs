//! Tax Document Value Object
//!
//! National tax identifier used as the primary key of clients and users.
//! Individuals carry an 11-character CPF, organizations a 14-character CNPJ.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of an individual's document (CPF)
pub const CPF_LENGTH: usize = 11;

/// Length of an organization's document (CNPJ)
pub const CNPJ_LENGTH: usize = 14;

/// Error returned when a document cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Document is blank after trimming
    #[error("The document cannot be empty.")]
    Empty,

    /// Trimmed length is neither CPF_LENGTH nor CNPJ_LENGTH
    #[error("The document must have 11 or 14 characters (got {length}).")]
    InvalidLength { length: usize },
}

/// Kind of taxpayer a document identifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Individual,
    Organization,
}

/// Trimmed tax document
///
/// # Invariants
/// - No leading or trailing whitespace
/// - Length is CPF_LENGTH or CNPJ_LENGTH characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document(String);

impl Document {
    /// Trim and validate a raw document
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DocumentError::Empty);
        }

        let length = trimmed.chars().count();
        if !Self::is_valid_length(length) {
            return Err(DocumentError::InvalidLength { length });
        }

        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn is_valid_length(length: usize) -> bool {
        length == CPF_LENGTH || length == CNPJ_LENGTH
    }

    pub fn kind(&self) -> DocumentKind {
        if self.0.chars().count() == CPF_LENGTH {
            DocumentKind::Individual
        } else {
            DocumentKind::Organization
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, safe inside a URL path or a `Location` header
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, NON_ALPHANUMERIC).to_string()
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Document> for String {
    fn from(document: Document) -> Self {
        document.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpf() {
        let document = Document::parse("12345678901").unwrap();
        assert_eq!(document.as_str(), "12345678901");
        assert_eq!(document.kind(), DocumentKind::Individual);
    }

    #[test]
    fn test_parse_cnpj_trims() {
        let document = Document::parse("  12345678000190 ").unwrap();
        assert_eq!(document.as_str(), "12345678000190");
        assert_eq!(document.kind(), DocumentKind::Organization);
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Document::parse(""), Err(DocumentError::Empty));
        assert_eq!(Document::parse("   "), Err(DocumentError::Empty));
    }

    #[test]
    fn test_parse_invalid_length() {
        for raw in ["1", "123", "1234567890", "123456789012", "1234567890123", "123456789012345"] {
            assert!(matches!(
                Document::parse(raw),
                Err(DocumentError::InvalidLength { .. })
            ));
        }
    }

    #[test]
    fn test_path_segment_escapes_control_characters() {
        let document = Document::parse("1234567890\u{1}").unwrap();
        assert_eq!(document.as_str().chars().count(), 11);
        assert_eq!(document.path_segment(), "1234567890%01");

        let plain = Document::parse("12345678901").unwrap();
        assert_eq!(plain.path_segment(), "12345678901");
    }

    #[test]
    fn test_serde_round_trip_revalidates() {
        let document = Document::parse("12345678901").unwrap();
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, "\"12345678901\"");

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);

        let invalid: Result<Document, _> = serde_json::from_str("\"123\"");
        assert!(invalid.is_err());
    }
}
