//! Address Value Object
//!
//! ユーザーの住所。登録時に必須で、構築後は変更されない。
//!
//! ## 設計方針
//! - 構築は [`AddressBuilder`] 経由のみ
//! - すべてのフィールドは前後の空白を除去して保持
//! - 空の complement は `None` として保持
//! - ストアからのデシリアライズもビルダーを通す
//!
//! ## 不変条件
//! - street, number, neighborhood, city, state, zip_code は空でない
//! - 検査順: Street → Number → Neighborhood → City → State → ZipCode（最初の違反のみ報告）

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Address invariant violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("The street cannot be empty.")]
    EmptyStreet,

    #[error("The number cannot be empty.")]
    EmptyNumber,

    #[error("The neighborhood cannot be empty.")]
    EmptyNeighborhood,

    #[error("The city cannot be empty.")]
    EmptyCity,

    #[error("The state cannot be empty.")]
    EmptyState,

    #[error("The zip code cannot be empty.")]
    EmptyZipCode,
}

impl AddressError {
    /// Validation code shared with the request validator
    pub fn code(&self) -> &'static str {
        match self {
            AddressError::EmptyStreet => "EMPTY_STREET",
            AddressError::EmptyNumber => "EMPTY_NUMBER",
            AddressError::EmptyNeighborhood => "EMPTY_NEIGHBORHOOD",
            AddressError::EmptyCity => "EMPTY_CITY",
            AddressError::EmptyState => "EMPTY_STATE",
            AddressError::EmptyZipCode => "EMPTY_ZIPCODE",
        }
    }
}

// ============================================================================
// Address
// ============================================================================

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AddressRecord")]
pub struct Address {
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    complement: Option<String>,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Two-letter state abbreviation
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street, self.number)?;
        if let Some(complement) = &self.complement {
            write!(f, " ({complement})")?;
        }
        write!(
            f,
            " - {}, {}/{} {}",
            self.neighborhood, self.city, self.state, self.zip_code
        )
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Step-wise constructor for [`Address`]
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    zip_code: String,
    complement: Option<String>,
}

impl AddressBuilder {
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = neighborhood.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = zip_code.into();
        self
    }

    pub fn complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    /// Trim every field and enforce the invariants in declared order
    pub fn build(self) -> Result<Address, AddressError> {
        let street = required(self.street, AddressError::EmptyStreet)?;
        let number = required(self.number, AddressError::EmptyNumber)?;
        let neighborhood = required(self.neighborhood, AddressError::EmptyNeighborhood)?;
        let city = required(self.city, AddressError::EmptyCity)?;
        let state = required(self.state, AddressError::EmptyState)?;
        let zip_code = required(self.zip_code, AddressError::EmptyZipCode)?;

        let complement = self
            .complement
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Address {
            street,
            number,
            neighborhood,
            city,
            state,
            zip_code,
            complement,
        })
    }
}

fn required(value: String, err: AddressError) -> Result<String, AddressError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

// ============================================================================
// Store representation
// ============================================================================

/// Raw stored shape, re-validated through the builder
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AddressRecord {
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    zip_code: String,
    complement: Option<String>,
}

impl TryFrom<AddressRecord> for Address {
    type Error = AddressError;

    fn try_from(record: AddressRecord) -> Result<Self, Self::Error> {
        let builder = Address::builder()
            .street(record.street)
            .number(record.number)
            .neighborhood(record.neighborhood)
            .city(record.city)
            .state(record.state)
            .zip_code(record.zip_code);

        match record.complement {
            Some(complement) => builder.complement(complement).build(),
            None => builder.build(),
        }
    }
}
