//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use kernel::error::errors::AppResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::config::UsersConfig;
use crate::application::{CreateUserUseCase, GetUserByDocumentUseCase};
use crate::domain::repository::UserRepository;
use crate::presentation::dto::{CreateUserRequest, CreateUserResponse, UserResponse};

/// Base path of the users resource
pub const USERS_PATH: &str = "/api/v1/users";

pub const USER_BY_DOCUMENT_PATH: &str = "/api/v1/users/{document}";

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

// ============================================================================
// Create User
// ============================================================================

/// POST /api/v1/users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    // Dropping the request future cancels the store call
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(req.into(), &cancel).await?;

    let location = format!("{USERS_PATH}/{}", user.document.path_segment());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreateUserResponse {
            id: user.document.into_inner(),
            message: "User created successfully.".to_string(),
        }),
    ))
}

// ============================================================================
// Get User By Document
// ============================================================================

/// GET /api/v1/users/{document}
pub async fn get_user_by_document<R>(
    State(state): State<UsersAppState<R>>,
    Path(document): Path<String>,
) -> AppResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let use_case = GetUserByDocumentUseCase::new(state.repo.clone());
    let user = use_case.execute(&document, &cancel).await?;

    Ok(Json(user.into()))
}
