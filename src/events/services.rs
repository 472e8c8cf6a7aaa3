use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::catalog::{Ticket, User};
use crate::notify::Toast;
use crate::state::AppState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Event not found")]
    EventNotFound,
    #[error("You already hold a ticket for this event")]
    AlreadyRegistered,
    #[error("Sold out")]
    SoldOut,
}

/// Simulated NFT ticket mint. The catalog is never mutated: the event's
/// registered count stays as seeded, only the returned payload exists.
pub async fn mint_ticket(
    state: &AppState,
    user: &User,
    event_id: Uuid,
) -> Result<Ticket, RegisterError> {
    let event = state
        .catalog
        .event(event_id)
        .ok_or(RegisterError::EventNotFound)?;

    if state.catalog.has_ticket(user.id, event.id) {
        return Err(RegisterError::AlreadyRegistered);
    }
    if event.is_sold_out() {
        return Err(RegisterError::SoldOut);
    }

    let token_id = rand::thread_rng().gen_range(1000..=9999).to_string();
    let ticket = Ticket {
        id: Uuid::new_v4(),
        event_id: event.id,
        event_title: event.title.clone(),
        event_date: event.date,
        event_location: event.location.clone(),
        event_banner: event.banner_image.clone(),
        owner_id: user.id,
        owner_wallet: user.wallet_address.clone(),
        qr_code: format!("mintgate:ticket:{token_id}:{}", event.id),
        token_id,
        is_used: false,
        minted_at: OffsetDateTime::now_utc(),
        transferable: true,
    };

    // Stand-in for the mint transaction; cannot fail, cannot be cancelled.
    tokio::time::sleep(Duration::from_millis(state.config.chain.mint_ms)).await;

    info!(
        user_id = %user.id,
        event_id = %event.id,
        token_id = %ticket.token_id,
        network = %state.config.chain.network,
        "ticket minted"
    );
    state
        .notifier
        .notify(Toast::new(
            "Registration Successful!",
            "Your NFT ticket has been minted and added to your wallet.",
        ))
        .await;

    Ok(ticket)
}
