use crate::state::AppState;
use axum::Router;

pub(crate) mod dto;
pub mod filter;
pub mod handlers;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
