//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{AddressInput, CreateUserInput};
use crate::domain::entity::User;
use crate::domain::value_object::{address::Address, profile_image::ProfileImage};

// ============================================================================
// Create User
// ============================================================================

/// Address payload
///
/// Missing fields default to empty so the validator reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressRequest {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}

/// Create user request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub document: String,
    pub name: String,
    pub email: String,
    pub address: Option<AddressRequest>,
    /// File name of an already uploaded picture
    pub profile_image_file_name: Option<String>,
}

impl From<AddressRequest> for AddressInput {
    fn from(req: AddressRequest) -> Self {
        Self {
            street: req.street,
            number: req.number,
            neighborhood: req.neighborhood,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            complement: req.complement,
        }
    }
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            document: req.document,
            name: req.name,
            email: req.email,
            address: req.address.map(Into::into),
            profile_image_file_name: req.profile_image_file_name,
        }
    }
}

/// Create user response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    /// Document of the stored user
    pub id: String,
    pub message: String,
}

// ============================================================================
// Get User
// ============================================================================

/// Profile image reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageResponse {
    pub key: String,
    pub full_path: String,
    pub bucket_path: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&ProfileImage> for ProfileImageResponse {
    fn from(image: &ProfileImage) -> Self {
        Self {
            key: image.key().to_string(),
            full_path: image.full_path(),
            bucket_path: image.bucket_path().to_string(),
            uploaded_at: image.uploaded_at(),
        }
    }
}

/// User response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub document: String,
    pub name: String,
    pub email: String,
    pub address: Address,
    pub profile_image: Option<ProfileImageResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            profile_image: user.profile_image.as_ref().map(Into::into),
            document: user.document.into_inner(),
            name: user.name,
            email: user.email,
            address: user.address,
        }
    }
}
