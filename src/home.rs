use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::instrument;

use crate::events::dto::EventListItem;
use crate::session::extractors::CurrentUser;
use crate::state::AppState;

/// Marketing blurbs rendered on the landing page.
const FEATURES: &[Feature] = &[
    Feature {
        title: "NFT Tickets",
        description: "Secure, verifiable tickets as NFTs on the blockchain.",
    },
    Feature {
        title: "Fraud-Proof",
        description: "Eliminate counterfeits with on-chain verification.",
    },
    Feature {
        title: "POAP Badges",
        description: "Earn soulbound proof of attendance NFTs.",
    },
    Feature {
        title: "Gasless",
        description: "No gas fees for attendees. Ever.",
    },
    Feature {
        title: "Social Login",
        description: "Sign in with email or Google. No crypto experience needed.",
    },
    Feature {
        title: "Move Protocol",
        description: "Built on Endless Protocol using Move smart contracts.",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlatformStats {
    pub events: usize,
    pub tickets_minted: usize,
    pub poaps_awarded: usize,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub network: String,
    pub authenticated: bool,
    pub featured: Vec<EventListItem>,
    pub features: &'static [Feature],
    pub stats: PlatformStats,
}

#[derive(Debug, Serialize)]
pub struct HostStats {
    pub events_hosted: usize,
    pub total_registered: u32,
    pub poap_enabled_events: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub hosting: Vec<EventListItem>,
    pub stats: HostStats,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
}

#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Json<HomeView> {
    let featured = state
        .catalog
        .events
        .iter()
        .take(3)
        .map(EventListItem::from)
        .collect();
    Json(HomeView {
        network: state.config.chain.network.clone(),
        authenticated: state.sessions.is_authenticated(),
        featured,
        features: FEATURES,
        stats: PlatformStats {
            events: state.catalog.events.len(),
            tickets_minted: state.catalog.tickets.len(),
            poaps_awarded: state.catalog.poaps.len(),
        },
    })
}

#[instrument(skip(state, user))]
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<DashboardView> {
    let hosting = state.catalog.events_hosted_by(user.id);
    let stats = HostStats {
        events_hosted: hosting.len(),
        total_registered: hosting.iter().map(|e| e.registered_count).sum(),
        poap_enabled_events: hosting.iter().filter(|e| e.poap_enabled).count(),
    };
    Json(DashboardView {
        hosting: hosting.into_iter().map(EventListItem::from).collect(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_features_the_first_three_events() {
        let state = AppState::fake();
        let view = home(State(state.clone())).await;
        assert_eq!(view.0.featured.len(), 3);
        assert_eq!(view.0.stats.events, state.catalog.events.len());
    }

    #[tokio::test]
    async fn dashboard_aggregates_hosted_events() {
        let state = AppState::fake();
        let host = state.sessions.login(&state.catalog, "leo@endlesslabs.io");
        let view = dashboard(State(state), CurrentUser(host)).await;
        assert_eq!(view.0.stats.events_hosted, 3);
        assert_eq!(view.0.stats.total_registered, 342 + 200 + 18);
        assert_eq!(view.0.stats.poap_enabled_events, 3);
    }

    #[tokio::test]
    async fn dashboard_is_empty_for_non_hosts() {
        let state = AppState::fake();
        let user = state.sessions.login(&state.catalog, "new@x.com");
        let view = dashboard(State(state), CurrentUser(user)).await;
        assert_eq!(view.0.stats.events_hosted, 0);
        assert!(view.0.hosting.is_empty());
    }
}
