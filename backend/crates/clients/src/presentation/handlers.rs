//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use kernel::error::errors::AppResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::CreateClientUseCase;
use crate::domain::repository::ClientRepository;
use crate::presentation::dto::{CreateClientRequest, CreateClientResponse};

/// Base path of the clients resource
pub const CLIENTS_PATH: &str = "/api/v1/clients";

/// Shared state for client handlers
#[derive(Clone)]
pub struct ClientsAppState<R>
where
    R: ClientRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create Client
// ============================================================================

/// POST /api/v1/clients
pub async fn create_client<R>(
    State(state): State<ClientsAppState<R>>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse>
where
    R: ClientRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    // Dropping the request future cancels the store call
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let use_case = CreateClientUseCase::new(state.repo.clone());
    let client = use_case.execute(req.into(), &cancel).await?;

    let location = format!("{CLIENTS_PATH}/{}", client.document.path_segment());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreateClientResponse {
            id: client.document.into_inner(),
            message: "Client created successfully.".to_string(),
        }),
    ))
}
