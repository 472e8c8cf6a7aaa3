mod app;
mod catalog;
mod config;
mod events;
mod home;
mod notify;
mod session;
mod state;
mod wallet;
mod wizard;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "mintgate=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init()?;
    tracing::info!(
        network = %state.config.chain.network,
        events = state.catalog.events.len(),
        "catalog seeded"
    );

    // Session mutations are published on a watch channel; log them as they
    // happen instead of polling.
    let mut sessions = state.sessions.subscribe();
    tokio::spawn(async move {
        while sessions.changed().await.is_ok() {
            match sessions.borrow_and_update().as_ref() {
                Some(user) => tracing::debug!(email = %user.email, role = ?user.role, "session changed"),
                None => tracing::debug!("session cleared"),
            }
        }
    });

    let config = state.config.clone();
    let app = app::build_app(state);
    app::serve(app, &config).await
}
