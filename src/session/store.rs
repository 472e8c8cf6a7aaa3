use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::catalog::{Catalog, Role, User};
use crate::session::services::synthesize_user;

/// Process-wide session state: the signed-in user, or nothing.
///
/// Not a singleton; an instance lives in `AppState` and is handed to whoever
/// needs it. Every mutation is published on a watch channel so views can
/// subscribe and re-derive instead of polling (dropping the receiver
/// unsubscribes).
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<User>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Option<User> {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.tx.subscribe()
    }

    /// Any email signs in: a catalog user when one matches, otherwise a
    /// freshly synthesized attendee. There is no credential check. The email
    /// is trimmed and lowercased here so casing never forks a seeded user
    /// into a synthesized duplicate.
    pub fn login(&self, catalog: &Catalog, email: &str) -> User {
        let email = email.trim().to_lowercase();
        let user = match catalog.user_by_email(&email) {
            Some(found) => found.clone(),
            None => synthesize_user(&email),
        };
        info!(user_id = %user.id, email = %user.email, role = ?user.role, "session opened");
        self.tx.send_replace(Some(user.clone()));
        user
    }

    pub fn logout(&self) {
        if self.tx.send_replace(None).is_some() {
            info!("session closed");
        }
    }

    /// Replaces the signed-in user's role in place; no-op when signed out.
    pub fn switch_role(&self, role: Role) -> Option<User> {
        let mut updated = None;
        self.tx.send_if_modified(|current| match current.as_mut() {
            Some(user) => {
                user.role = role;
                updated = Some(user.clone());
                true
            }
            None => {
                debug!(?role, "switch_role with no active session");
                false
            }
        });
        updated
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
