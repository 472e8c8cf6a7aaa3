use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{session::extractors::CurrentUser, state::AppState};

use super::dto::{
    EventDetails, EventFilterParams, EventListItem, EventListResponse, RegisterResponse,
};
use super::filter::filter_events;
use super::services::{self, RegisterError};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/events/:id/register", post(register))
}

#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventFilterParams>,
) -> Json<EventListResponse> {
    let filtered = filter_events(
        &state.catalog.events,
        &params.q,
        &params.category,
        &params.registration_type,
    );
    let events: Vec<EventListItem> = filtered.into_iter().map(EventListItem::from).collect();
    Json(EventListResponse {
        total: events.len(),
        events,
        categories: crate::catalog::EVENT_CATEGORIES,
    })
}

#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDetails>, (StatusCode, String)> {
    let Some(event) = state.catalog.event(id) else {
        warn!(%id, "event lookup failed");
        return Err((StatusCode::NOT_FOUND, "Event not found".into()));
    };

    let has_ticket = state
        .sessions
        .current()
        .map(|user| state.catalog.has_ticket(user.id, event.id))
        .unwrap_or(false);

    Ok(Json(EventDetails {
        spots_left: event.spots_left(),
        sold_out: event.is_sold_out(),
        has_ticket,
        event: event.clone(),
    }))
}

#[instrument(skip(state, user))]
pub async fn register(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, HeaderMap, Json<RegisterResponse>), (StatusCode, String)> {
    let ticket = services::mint_ticket(&state, &user, id)
        .await
        .map_err(|e| {
            warn!(user_id = %user.id, event_id = %id, error = %e, "registration rejected");
            let status = match e {
                RegisterError::EventNotFound => StatusCode::NOT_FOUND,
                RegisterError::AlreadyRegistered | RegisterError::SoldOut => StatusCode::CONFLICT,
            };
            (status, e.to_string())
        })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        "/my-tickets".parse().expect("static header"),
    );

    Ok((
        StatusCode::CREATED,
        headers,
        Json(RegisterResponse {
            message: "Your NFT ticket has been minted and added to your wallet.".into(),
            ticket,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_applies_all_three_facets() {
        let state = AppState::fake();
        let response = list_events(
            State(state),
            Query(EventFilterParams {
                q: "".into(),
                category: "Music".into(),
                registration_type: "free".into(),
            }),
        )
        .await;
        assert_eq!(response.0.total, 1);
        assert_eq!(response.0.events[0].title, "NFT Art & Music Night");
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        let state = AppState::fake();
        let err = get_event(State(state), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1, "Event not found");
    }

    #[tokio::test]
    async fn detail_reports_spots_and_held_ticket() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "ava@mintgate.xyz");
        let held = state.catalog.tickets_for(user.id)[0].event_id;

        let details = get_event(State(state), Path(held)).await.expect("found").0;
        assert!(details.has_ticket);
        assert_eq!(
            details.spots_left,
            i64::from(details.event.max_attendees) - i64::from(details.event.registered_count)
        );
    }

    #[tokio::test]
    async fn register_returns_created_with_location() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "fresh@x.com");
        let event_id = state.catalog.events[0].id;

        let (status, headers, body) = register(State(state), CurrentUser(user), Path(event_id))
            .await
            .expect("registers");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(headers[axum::http::header::LOCATION], "/my-tickets");
        assert_eq!(body.0.ticket.event_id, event_id);
    }

    #[tokio::test]
    async fn register_conflicts_when_sold_out() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "fresh@x.com");
        let sold_out = state
            .catalog
            .events
            .iter()
            .find(|e| e.is_sold_out())
            .expect("seed has one")
            .id;

        let err = register(State(state), CurrentUser(user), Path(sold_out))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
        assert_eq!(err.1, "Sold out");
    }
}
