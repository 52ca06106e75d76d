//! User Entity

use kernel::document::Document;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{address::Address, profile_image::ProfileImage};

/// User entity
///
/// Keyed by document. Built only by the create use case and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Tax document (primary key)
    pub document: Document,
    pub name: String,
    pub email: String,
    pub address: Address,
    /// Absent when no picture was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ProfileImage>,
}

impl User {
    /// Create a new user
    pub fn new(
        document: Document,
        name: impl Into<String>,
        email: impl Into<String>,
        address: Address,
        profile_image: Option<ProfileImage>,
    ) -> Self {
        Self {
            document,
            name: name.into(),
            email: email.into(),
            address,
            profile_image,
        }
    }
}
