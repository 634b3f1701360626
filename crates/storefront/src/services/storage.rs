//! Durable cart storage.
//!
//! The cart is persisted as a JSON array of line items in a single named slot.
//! Loading is forgiving: a missing slot, unreadable data, or a record written
//! by an older line-item shape all come back as `None` so the visitor simply
//! starts with an empty cart. Saving is best effort; callers log failures and
//! carry on with the in-memory cart.

use std::future::Future;
use std::sync::Arc;

use naia_core::LineItem;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_sessions::Session;

/// Errors writing the cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

/// Where a cart is loaded from and saved to.
pub trait CartStorage: Send + Sync {
    /// Read the persisted line items; `None` when absent or malformed.
    fn load(&self) -> impl Future<Output = Option<Vec<LineItem>>> + Send;

    /// Overwrite the slot with `items`.
    fn save(&self, items: &[LineItem]) -> impl Future<Output = Result<(), StorageError>> + Send;
}

// =============================================================================
// Session Storage
// =============================================================================

/// Cart slot inside the visitor's session.
///
/// The session is keyed by the browser's session cookie, so the slot behaves
/// like per-profile local storage.
#[derive(Clone)]
pub struct SessionStorage {
    session: Session,
    key: String,
}

impl SessionStorage {
    #[must_use]
    pub fn new(session: Session, key: impl Into<String>) -> Self {
        Self {
            session,
            key: key.into(),
        }
    }
}

impl CartStorage for SessionStorage {
    async fn load(&self) -> Option<Vec<LineItem>> {
        match self.session.get::<Vec<LineItem>>(&self.key).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key = %self.key, "Discarding unreadable stored cart: {e}");
                None
            }
        }
    }

    async fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        self.session.insert(&self.key, items).await?;
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process slot holding the raw JSON text.
///
/// Clones share the same slot, which lets a test hand one copy to a manager
/// and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot with raw text (which need not be valid JSON).
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
            fail_writes: false,
        }
    }

    /// Make every `save` fail, as a full or disabled store would.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current raw contents of the slot.
    pub async fn raw(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }
}

impl CartStorage for MemoryStorage {
    async fn load(&self) -> Option<Vec<LineItem>> {
        let raw = self.slot.lock().await.clone()?;
        match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored cart: {e}");
                None
            }
        }
    }

    async fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable);
        }
        let raw = serde_json::to_string(items)?;
        *self.slot.lock().await = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use naia_core::{LineId, ProductId};
    use rust_decimal::Decimal;
    use tower_sessions::MemoryStore;

    use super::*;

    fn line(quantity: u32) -> LineItem {
        LineItem {
            cart_id: LineId::generate(),
            product_id: ProductId::new("celestine"),
            name: "Célestine".to_string(),
            price: Decimal::from(145),
            image: "/assets/products/celestine/celestine-1.jpg".to_string(),
            variant: None,
            quantity,
        }
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().await.is_none());

        let items = vec![line(2)];
        storage.save(&items).await.unwrap();
        assert_eq!(storage.load().await, Some(items));
    }

    #[tokio::test]
    async fn test_memory_malformed_is_absent() {
        for raw in ["{not json", "{\"items\": []}", "[{\"id\": 1}]"] {
            let storage = MemoryStorage::with_raw(raw);
            assert!(storage.load().await.is_none(), "{raw} should be treated as absent");
        }
    }

    #[tokio::test]
    async fn test_memory_failing_writes() {
        let storage = MemoryStorage::new().failing_writes();
        let result = storage.save(&[line(1)]).await;
        assert!(matches!(result, Err(StorageError::Unavailable)));
        assert!(storage.raw().await.is_none());
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let storage = SessionStorage::new(session(), "naia-cart");
        assert!(storage.load().await.is_none());

        let items = vec![line(1), line(3)];
        storage.save(&items).await.unwrap();
        assert_eq!(storage.load().await, Some(items));
    }

    #[tokio::test]
    async fn test_session_malformed_is_absent() {
        let session = session();
        session.insert("naia-cart", "definitely not a cart").await.unwrap();

        let storage = SessionStorage::new(session, "naia-cart");
        assert!(storage.load().await.is_none());
    }
}
