//! Per-session cart channels.
//!
//! Every visitor session gets one [`CartChannel`], shared by all requests
//! carrying that session's cookie:
//!
//! - a mutex serializing cart mutations, held from session load until the
//!   session store has saved the new cart
//! - a `watch` sender the cart manager publishes snapshots on, read by the
//!   `/cart/events` stream
//!
//! Channels live in a `moka` cache and are evicted after the session's
//! inactivity window.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use naia_core::CartState;
use tokio::sync::{Mutex, OwnedMutexGuard, watch};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Mutation lock and snapshot feed for one session's cart.
pub struct CartChannel {
    lock: Arc<Mutex<()>>,
    snapshots: watch::Sender<CartState>,
}

impl CartChannel {
    fn new() -> Self {
        Self {
            lock: Arc::new(Mutex::new(())),
            snapshots: watch::Sender::new(CartState::new()),
        }
    }

    /// Sender handed to the cart manager.
    #[must_use]
    pub fn snapshots(&self) -> watch::Sender<CartState> {
        self.snapshots.clone()
    }

    /// Wait for exclusive access to this cart.
    pub async fn lock(&self) -> OwnedMutexGuard<()> {
        Arc::clone(&self.lock).lock_owned().await
    }
}

/// Registry of cart channels keyed by session id.
#[derive(Clone)]
pub struct CartHub {
    channels: Cache<String, Arc<CartChannel>>,
}

impl CartHub {
    /// Create a hub whose channels expire after `ttl_days` without use.
    #[must_use]
    pub fn new(ttl_days: u32) -> Self {
        let channels = Cache::builder()
            .time_to_idle(Duration::from_secs(u64::from(ttl_days) * SECONDS_PER_DAY))
            .build();

        Self { channels }
    }

    /// The channel for a session, created on first use.
    pub async fn channel(&self, session_id: &str) -> Arc<CartChannel> {
        self.channels
            .get_with(session_id.to_string(), async { Arc::new(CartChannel::new()) })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_session_shares_channel() {
        let hub = CartHub::new(30);

        let first = hub.channel("abc").await;
        let again = hub.channel("abc").await;
        let other = hub.channel("xyz").await;

        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[tokio::test]
    async fn test_snapshots_reach_subscribers() {
        let hub = CartHub::new(30);
        let channel = hub.channel("abc").await;
        let updates = channel.snapshots().subscribe();

        hub.channel("abc")
            .await
            .snapshots()
            .send_replace(CartState::new());

        assert!(updates.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_lock_is_exclusive_per_session() {
        let hub = CartHub::new(30);
        let channel = hub.channel("abc").await;

        let guard = channel.lock().await;

        let same = hub.channel("abc").await;
        let blocked = tokio::time::timeout(Duration::from_millis(50), same.lock()).await;
        assert!(blocked.is_err());

        // Other sessions are unaffected
        let other = hub.channel("xyz").await;
        let free = tokio::time::timeout(Duration::from_millis(50), other.lock()).await;
        assert!(free.is_ok());

        drop(guard);
        let released = tokio::time::timeout(Duration::from_millis(50), same.lock()).await;
        assert!(released.is_ok());
    }
}
