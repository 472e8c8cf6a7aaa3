use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{session::extractors::CurrentUser, state::AppState};

use super::dto::{PoapsResponse, TicketsResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/my-tickets", get(my_tickets))
        .route("/my-poaps", get(my_poaps))
}

/// NFT tickets held by the signed-in user.
#[instrument(skip(state, user))]
pub async fn my_tickets(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<TicketsResponse> {
    let tickets: Vec<_> = state
        .catalog
        .tickets_for(user.id)
        .into_iter()
        .cloned()
        .collect();
    Json(TicketsResponse {
        total: tickets.len(),
        tickets,
    })
}

/// Soulbound attendance badges held by the signed-in user.
#[instrument(skip(state, user))]
pub async fn my_poaps(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<PoapsResponse> {
    let poaps: Vec<_> = state
        .catalog
        .poaps_for(user.id)
        .into_iter()
        .cloned()
        .collect();
    Json(PoapsResponse {
        total: poaps.len(),
        poaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_attendee_sees_their_wallet() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "ava@mintgate.xyz");

        let tickets = my_tickets(State(state.clone()), CurrentUser(user.clone())).await;
        assert_eq!(tickets.0.total, 2);
        assert!(tickets.0.tickets.iter().all(|t| t.owner_id == user.id));

        let poaps = my_poaps(State(state), CurrentUser(user)).await;
        assert_eq!(poaps.0.total, 2);
    }

    #[tokio::test]
    async fn synthesized_user_starts_empty() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "new@x.com");

        let tickets = my_tickets(State(state.clone()), CurrentUser(user.clone())).await;
        assert_eq!(tickets.0.total, 0);
        let poaps = my_poaps(State(state), CurrentUser(user)).await;
        assert_eq!(poaps.0.total, 0);
    }
}
