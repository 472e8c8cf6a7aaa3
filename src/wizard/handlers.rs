use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{notify::Toast, session::extractors::CurrentUser, state::AppState};

use super::dto::{DeployResponse, DraftPatch, ValidationErrors, WizardView};
use super::machine::{synthesize_contract_address, DeployError, FieldError};

type Rejection = (StatusCode, Json<ValidationErrors>);

fn reject(status: StatusCode, message: &'static str, errors: Vec<FieldError>) -> Rejection {
    (status, Json(ValidationErrors { message, errors }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-event", get(get_wizard).patch(update_draft))
        .route("/create-event/next", post(next_step))
        .route("/create-event/previous", post(previous_step))
        .route("/create-event/deploy", post(deploy))
}

#[instrument(skip(state))]
pub async fn get_wizard(State(state): State<AppState>) -> Json<WizardView> {
    let wizard = state.wizard.read().await;
    Json(WizardView::of(&wizard))
}

#[instrument(skip(state, patch))]
pub async fn update_draft(
    State(state): State<AppState>,
    Json(patch): Json<DraftPatch>,
) -> Json<WizardView> {
    let mut wizard = state.wizard.write().await;
    wizard.apply(patch);
    Json(WizardView::of(&wizard))
}

#[instrument(skip(state))]
pub async fn next_step(State(state): State<AppState>) -> Result<Json<WizardView>, Rejection> {
    let mut wizard = state.wizard.write().await;
    match wizard.next() {
        Ok(step) => {
            info!(step = step.index(), "wizard advanced");
            Ok(Json(WizardView::of(&wizard)))
        }
        Err(errors) => {
            warn!(step = wizard.step.index(), count = errors.len(), "step validation failed");
            Err(reject(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Fix the highlighted fields to continue",
                errors,
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn previous_step(State(state): State<AppState>) -> Json<WizardView> {
    let mut wizard = state.wizard.write().await;
    let step = wizard.previous();
    info!(step = step.index(), "wizard stepped back");
    Json(WizardView::of(&wizard))
}

/// Terminal action: simulated contract deployment. Requires an open session;
/// the draft is discarded once the fake deployment completes.
#[instrument(skip(state, user))]
pub async fn deploy(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<(StatusCode, HeaderMap, Json<DeployResponse>), Rejection> {
    let event = {
        let mut wizard = state.wizard.write().await;
        wizard.begin_deploy().map_err(|e| {
            warn!(user_id = %user.id, error = %e, "deploy rejected");
            match e {
                DeployError::Invalid(errors) => reject(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Event draft has missing or invalid fields",
                    errors,
                ),
                DeployError::NotAtReview => reject(
                    StatusCode::CONFLICT,
                    "Complete the review step before deploying",
                    Vec::new(),
                ),
                DeployError::InProgress => reject(
                    StatusCode::CONFLICT,
                    "Deployment already in progress",
                    Vec::new(),
                ),
            }
        })?;

        match wizard.draft.build_event(&user, synthesize_contract_address()) {
            Ok(event) => event,
            Err(e) => {
                wizard.abort_deploy();
                error!(error = %e, "building event payload failed");
                return Err(reject(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Deployment failed",
                    Vec::new(),
                ));
            }
        }
    };

    // Stand-in for the contract deployment; fixed duration, no error path.
    tokio::time::sleep(Duration::from_millis(state.config.chain.deploy_ms)).await;

    info!(
        user_id = %user.id,
        event_id = %event.id,
        network = %state.config.chain.network,
        "event contract deployed"
    );
    state
        .notifier
        .notify(Toast::new(
            "Event Created Successfully!",
            "Your Move smart contract has been deployed on Endless Protocol.",
        ))
        .await;

    state.wizard.write().await.reset();

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        "/dashboard".parse().expect("static header"),
    );

    Ok((
        StatusCode::CREATED,
        headers,
        Json(DeployResponse {
            message: "Event Created Successfully!".into(),
            description: "Your Move smart contract has been deployed on Endless Protocol.".into(),
            event,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fill_and_advance_to_review(state: &AppState) {
        update_draft(
            State(state.clone()),
            Json(DraftPatch {
                title: Some("Endless Meetup".into()),
                description: Some("Monthly builders meetup".into()),
                category: Some("Meetup".into()),
                date: Some("2026-11-20".into()),
                time: Some("18:00".into()),
                location: Some("Berlin".into()),
                ..DraftPatch::default()
            }),
        )
        .await;
        for _ in 0..3 {
            next_step(State(state.clone())).await.expect("valid draft");
        }
    }

    #[tokio::test]
    async fn next_rejects_empty_draft_with_field_errors() {
        let state = AppState::fake();
        let (status, body) = next_step(State(state.clone())).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.0.errors.iter().any(|e| e.field == "title"));

        // Still on step 1.
        let view = get_wizard(State(state)).await;
        assert_eq!(view.0.current_step, 1);
    }

    #[tokio::test]
    async fn draft_survives_round_trips() {
        let state = AppState::fake();
        fill_and_advance_to_review(&state).await;
        previous_step(State(state.clone())).await;
        previous_step(State(state.clone())).await;
        previous_step(State(state.clone())).await;

        let view = get_wizard(State(state)).await;
        assert_eq!(view.0.current_step, 1);
        assert_eq!(view.0.draft.title, "Endless Meetup");
        assert_eq!(view.0.draft.date, "2026-11-20");
    }

    #[tokio::test]
    async fn deploy_off_review_conflicts() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "leo@endlesslabs.io");
        let (status, _body) = deploy(State(state), CurrentUser(user)).await.unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn deploy_from_review_resets_the_wizard() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "leo@endlesslabs.io");
        fill_and_advance_to_review(&state).await;

        let (status, headers, body) = deploy(State(state.clone()), CurrentUser(user))
            .await
            .expect("deploys");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(headers[axum::http::header::LOCATION], "/dashboard");
        assert_eq!(body.0.event.title, "Endless Meetup");
        assert_eq!(body.0.event.registered_count, 0);

        let view = get_wizard(State(state)).await;
        assert_eq!(view.0.current_step, 1);
        assert!(view.0.draft.title.is_empty());
        assert!(!view.0.deploying);
    }
}
