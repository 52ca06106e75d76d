//! Clients Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::domain::repository::ClientRepository;
use crate::infra::postgres::PgClientRepository;
use crate::presentation::handlers::{self, CLIENTS_PATH, ClientsAppState};

/// Create the Clients router with PostgreSQL repository
pub fn clients_router(repo: PgClientRepository) -> Router {
    clients_router_generic(repo)
}

/// Create a generic Clients router for any repository implementation
pub fn clients_router_generic<R>(repo: R) -> Router
where
    R: ClientRepository + Clone + Send + Sync + 'static,
{
    let state = ClientsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(CLIENTS_PATH, post(handlers::create_client::<R>))
        .with_state(state)
}
