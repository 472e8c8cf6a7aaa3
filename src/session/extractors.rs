use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use tracing::warn;

use crate::catalog::User;
use crate::session::store::SessionStore;

/// Rejects with 401 unless a session is open. The message doubles as the
/// UI's redirect-to-login affordance.
#[derive(Debug)]
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = SessionStore::from_ref(state);
        match sessions.current() {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                warn!("request requires an open session");
                Err((StatusCode::UNAUTHORIZED, "Sign in to continue".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn parts() -> Parts {
        axum::http::Request::builder()
            .uri("/api/v1/create-event/deploy")
            .body(())
            .expect("request builds")
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn rejects_without_an_open_session() {
        let state = AppState::fake();
        let err = CurrentUser::from_request_parts(&mut parts(), &state)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
        assert_eq!(err.1, "Sign in to continue");
    }

    #[tokio::test]
    async fn extracts_the_signed_in_user() {
        let state = AppState::fake();
        let signed_in = state.sessions.login(&state.catalog, "ava@mintgate.xyz");

        let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts(), &state)
            .await
            .expect("session open");
        assert_eq!(user.id, signed_in.id);
    }

    #[tokio::test]
    async fn rejects_again_after_logout() {
        let state = AppState::fake();
        state.sessions.login(&state.catalog, "ava@mintgate.xyz");
        state.sessions.logout();

        let err = CurrentUser::from_request_parts(&mut parts(), &state)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }
}
