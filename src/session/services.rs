use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::{Role, User};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// First sign-in for an unknown email: deterministic name from the local
/// part, pseudo-random wallet address and id. The "wallet" is a display
/// string, not a verified address.
pub(crate) fn synthesize_user(email: &str) -> User {
    let mut rng = rand::thread_rng();
    let name = email.split('@').next().unwrap_or(email).to_string();
    let wallet_address = format!("0x{:08x}...{:04x}", rng.gen::<u32>(), rng.gen::<u16>());

    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name,
        wallet_address,
        avatar: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={email}"
        )),
        role: Role::Attendee,
        created_at: OffsetDateTime::now_utc(),
    }
}
