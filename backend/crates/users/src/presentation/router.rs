//! Users Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, USER_BY_DOCUMENT_PATH, USERS_PATH, UsersAppState};

/// Create the Users router with PostgreSQL repository
pub fn users_router(repo: PgUserRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic Users router for any repository implementation
pub fn users_router_generic<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(USERS_PATH, post(handlers::create_user::<R>))
        .route(USER_BY_DOCUMENT_PATH, get(handlers::get_user_by_document::<R>))
        .with_state(state)
}
