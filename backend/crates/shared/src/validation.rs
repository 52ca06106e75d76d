//! Cross-cutting validation rules
//!
//! Field rules shared by every registration request. Each rule group
//! evaluates all of its checks and records every violation in declaration
//! order; nothing short-circuits.

use crate::document::Document;
use crate::error::app_error::AppError;

/// Minimum name length (trimmed, in characters)
pub const NAME_MIN_LENGTH: usize = 7;

/// Maximum name length (trimmed, in characters)
pub const NAME_MAX_LENGTH: usize = 100;

/// Maximum email local part length (per RFC 5321)
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

/// Validation error codes shared across bounded contexts
pub mod codes {
    pub const EMPTY_DOCUMENT: &str = "EMPTY_DOCUMENT";
    pub const DOCUMENT_LENGTH: &str = "DOCUMENT_LENGTH";
    pub const EMPTY_NAME: &str = "EMPTY_NAME";
    pub const NAME_MIN_LENGTH: &str = "NAME_MIN_LENGTH";
    pub const NAME_MAX_LENGTH: &str = "NAME_MAX_LENGTH";
    pub const EMPTY_EMAIL: &str = "EMPTY_EMAIL";
    pub const INVALID_EMAIL_ADDRESS: &str = "INVALID_EMAIL_ADDRESS";
}

/// Ordered collector of field violations
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<AppError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation error when `violated` holds
    pub fn check(&mut self, violated: bool, code: &'static str, description: &'static str) -> &mut Self {
        if violated {
            self.errors.push(AppError::validation(code, description));
        }
        self
    }

    /// Fails when the trimmed value is empty
    pub fn require(&mut self, value: &str, code: &'static str, description: &'static str) -> &mut Self {
        self.check(is_blank(value), code, description)
    }

    pub fn min_length(
        &mut self,
        value: &str,
        min: usize,
        code: &'static str,
        description: &'static str,
    ) -> &mut Self {
        self.check(trimmed_len(value) < min, code, description)
    }

    pub fn max_length(
        &mut self,
        value: &str,
        max: usize,
        code: &'static str,
        description: &'static str,
    ) -> &mut Self {
        self.check(trimmed_len(value) > max, code, description)
    }

    pub fn exact_length(
        &mut self,
        value: &str,
        length: usize,
        code: &'static str,
        description: &'static str,
    ) -> &mut Self {
        self.check(trimmed_len(value) != length, code, description)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<AppError> {
        self.errors
    }
}

// ============================================================================
// Rule groups
// ============================================================================

/// Document: blank check and 11/14 length check, independently
pub fn check_document(violations: &mut Violations, document: &str) {
    violations
        .require(document, codes::EMPTY_DOCUMENT, "The document cannot be empty.")
        .check(
            !Document::is_valid_length(trimmed_len(document)),
            codes::DOCUMENT_LENGTH,
            "The document must have 11 or 14 characters.",
        );
}

/// Name: blank check plus both length bounds
pub fn check_name(violations: &mut Violations, name: &str) {
    violations
        .require(name, codes::EMPTY_NAME, "The name cannot be empty.")
        .min_length(
            name,
            NAME_MIN_LENGTH,
            codes::NAME_MIN_LENGTH,
            "The name must have at least 7 characters.",
        )
        .max_length(
            name,
            NAME_MAX_LENGTH,
            codes::NAME_MAX_LENGTH,
            "The name must have at most 100 characters.",
        );
}

/// Email: blank check plus address grammar
pub fn check_email(violations: &mut Violations, email: &str) {
    violations
        .require(email, codes::EMPTY_EMAIL, "The email cannot be empty.")
        .check(
            !is_email_address(email.trim()),
            codes::INVALID_EMAIL_ADDRESS,
            "The email address is invalid.",
        );
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Character count after trimming
#[inline]
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// `local@domain.tld` shape check
pub fn is_email_address(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty()
        || local.len() > EMAIL_LOCAL_MAX_LENGTH
        || local.chars().any(char::is_whitespace)
    {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}
