//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The session cookie ties a
//! browser profile to its cart slot; nothing is written to a database.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "naia_session";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// Sessions expire after `NAIA_CART_TTL_DAYS` of inactivity.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(
                i64::from(config.cart.ttl_days) * SECONDS_PER_DAY,
            ),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
