//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::CreateClientInput;

// ============================================================================
// Create Client
// ============================================================================

/// Create client request
///
/// Missing fields default to empty so the validator reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClientRequest {
    pub document: String,
    pub name: String,
    pub email: String,
}

impl From<CreateClientRequest> for CreateClientInput {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            document: req.document,
            name: req.name,
            email: req.email,
        }
    }
}

/// Create client response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientResponse {
    /// Document of the stored client
    pub id: String,
    pub message: String,
}
