//! Cart manager: the only mutation surface for a visitor's cart.
//!
//! A [`CartManager`] owns one [`CartState`], restored from storage when the
//! manager is built. Every command goes through [`CartState::apply`]; the
//! resulting [`CartEvent`] is then fanned out to three independent consumers:
//!
//! 1. storage - the new line items are saved (best effort)
//! 2. subscribers - the new snapshot is published on the session's `watch`
//!    channel (see [`super::hub`])
//! 3. the notifier - additions produce a toast message
//!
//! No-op commands (unknown line ids, clearing an empty cart) produce no event
//! and touch none of the consumers.

use naia_core::{
    CartCommand, CartEvent, CartState, CartTotals, LineId, LineItem, ProductRef, VariantRef,
    format_price,
};
use rust_decimal::Decimal;
use tokio::sync::watch;

use super::notify::Notifier;
use super::storage::CartStorage;

/// Owner of a single cart.
pub struct CartManager<S, N> {
    state: CartState,
    storage: S,
    notifier: N,
    snapshots: watch::Sender<CartState>,
}

impl<S, N> CartManager<S, N>
where
    S: CartStorage,
    N: Notifier,
{
    /// Build a manager, restoring whatever the storage slot holds.
    ///
    /// Absent or malformed data yields an empty cart. Restoring publishes
    /// nothing; only mutations reach `snapshots`.
    pub async fn restore(storage: S, notifier: N, snapshots: watch::Sender<CartState>) -> Self {
        let mut manager = Self {
            state: CartState::new(),
            snapshots,
            storage,
            notifier,
        };

        if let Some(items) = manager.storage.load().await {
            manager.dispatch(CartCommand::Restore { items }).await;
        }

        manager
    }

    /// Receive every snapshot published after a mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.snapshots.subscribe()
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Add `quantity` units of a product (and optional variant).
    pub async fn add(
        &mut self,
        product: ProductRef,
        variant: Option<VariantRef>,
        quantity: u32,
    ) -> Option<CartEvent> {
        self.dispatch(CartCommand::Add {
            line_id: LineId::generate(),
            product,
            variant,
            quantity,
        })
        .await
    }

    pub async fn remove(&mut self, line_id: LineId) -> Option<CartEvent> {
        self.dispatch(CartCommand::Remove { line_id }).await
    }

    /// Set a line's quantity; zero or negative removes the line.
    pub async fn set_quantity(&mut self, line_id: LineId, quantity: i64) -> Option<CartEvent> {
        self.dispatch(CartCommand::SetQuantity { line_id, quantity })
            .await
    }

    /// Swap the variant on a line. Never merges with another line.
    pub async fn set_variant(
        &mut self,
        line_id: LineId,
        variant: Option<VariantRef>,
    ) -> Option<CartEvent> {
        self.dispatch(CartCommand::SetVariant { line_id, variant })
            .await
    }

    pub async fn clear(&mut self) -> Option<CartEvent> {
        self.dispatch(CartCommand::Clear).await
    }

    /// Apply a command and hand the resulting event to every consumer.
    pub async fn dispatch(&mut self, command: CartCommand) -> Option<CartEvent> {
        let (next, event) = std::mem::take(&mut self.state).apply(command);
        self.state = next;

        let event = event?;
        tracing::debug!(?event, lines = self.state.items().len(), "Cart updated");

        if event.needs_persist() {
            self.persist().await;
            self.snapshots.send_replace(self.state.clone());
        }
        if let Some(message) = event.notification() {
            self.notifier.notify(&message);
        }

        Some(event)
    }

    async fn persist(&self) {
        if let Err(e) = self.storage.save(self.state.items()).await {
            tracing::warn!("Failed to persist cart, keeping in-memory state: {e}");
        }
    }

    // =========================================================================
    // Derived reads
    // =========================================================================

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.state.subtotal()
    }

    #[must_use]
    pub fn variant_total(&self) -> Decimal {
        self.state.variant_total()
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.state.total()
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.state.totals()
    }

    /// Format an amount in the store currency.
    #[must_use]
    pub fn format_price(&self, amount: Decimal) -> String {
        format_price(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::{Arc, Mutex};

    use naia_core::{ProductId, VariantId};

    use super::*;
    use crate::services::storage::MemoryStorage;

    #[derive(Clone, Default)]
    struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn solene() -> ProductRef {
        ProductRef {
            id: ProductId::new("solene"),
            name: "Solène".to_string(),
            price: Decimal::from(185),
            image: "/assets/products/solene/ikebana.jpg".to_string(),
        }
    }

    fn forest_green() -> VariantRef {
        VariantRef {
            id: VariantId::new("forest"),
            name: "Forest Green".to_string(),
            price: Decimal::from(35),
            image: "/assets/vases/forest.jpg".to_string(),
            product_image: None,
        }
    }

    async fn manager(
        storage: MemoryStorage,
    ) -> (CartManager<MemoryStorage, RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let snapshots = watch::Sender::new(CartState::new());
        (
            CartManager::restore(storage, notifier.clone(), snapshots).await,
            notifier,
        )
    }

    #[tokio::test]
    async fn test_solene_scenario() {
        let (mut cart, _) = manager(MemoryStorage::new()).await;

        cart.add(solene(), None, 1).await;
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.subtotal(), Decimal::from(185));
        assert_eq!(cart.total(), Decimal::from(185));

        cart.add(solene(), Some(forest_green()), 1).await;
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.subtotal(), Decimal::from(370));
        assert_eq!(cart.variant_total(), Decimal::from(35));
        assert_eq!(cart.total(), Decimal::from(405));
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.format_price(cart.total()), "£405.00");
    }

    #[tokio::test]
    async fn test_every_mutation_is_persisted() {
        let storage = MemoryStorage::new();
        let (mut cart, _) = manager(storage.clone()).await;

        cart.add(solene(), None, 2).await;
        let line_id = cart.items()[0].cart_id;
        let stored: Vec<LineItem> = serde_json::from_str(&storage.raw().await.unwrap()).unwrap();
        assert_eq!(stored, cart.items());

        cart.set_quantity(line_id, 5).await;
        let stored: Vec<LineItem> = serde_json::from_str(&storage.raw().await.unwrap()).unwrap();
        assert_eq!(stored[0].quantity, 5);

        cart.clear().await;
        assert_eq!(storage.raw().await.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_restore_round_trip() {
        let storage = MemoryStorage::new();
        {
            let (mut cart, _) = manager(storage.clone()).await;
            cart.add(solene(), Some(forest_green()), 2).await;
            cart.add(solene(), None, 1).await;
        }

        let (restored, _) = manager(storage.clone()).await;
        assert_eq!(restored.items().len(), 2);
        assert_eq!(restored.items()[0].quantity, 2);
        assert_eq!(restored.items()[0].variant_id(), Some(&VariantId::new("forest")));
        assert_eq!(restored.total(), Decimal::from(185 * 3 + 35 * 2));
    }

    #[tokio::test]
    async fn test_malformed_storage_starts_empty() {
        let (cart, notifier) = manager(MemoryStorage::with_raw("[{\"broken\":")).await;
        assert!(cart.items().is_empty());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let (mut cart, _) = manager(MemoryStorage::new().failing_writes()).await;

        let event = cart.add(solene(), None, 1).await;
        assert!(event.is_some());
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Decimal::from(185));
    }

    #[tokio::test]
    async fn test_only_additions_notify() {
        let (mut cart, notifier) = manager(MemoryStorage::new()).await;

        cart.add(solene(), Some(forest_green()), 1).await;
        cart.add(solene(), None, 1).await;
        let line_id = cart.items()[1].cart_id;
        cart.set_quantity(line_id, 3).await;
        cart.set_variant(line_id, None).await;
        cart.remove(line_id).await;
        cart.clear().await;

        assert_eq!(
            notifier.messages(),
            [
                "Solène with Forest Green added to cart",
                "Solène added to cart"
            ]
        );
    }

    #[tokio::test]
    async fn test_subscribers_see_snapshots() {
        let (mut cart, _) = manager(MemoryStorage::new()).await;
        let mut updates = cart.subscribe();

        cart.add(solene(), None, 1).await;
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().item_count(), 1);

        // no-op: nothing published
        cart.remove(LineId::generate()).await;
        assert!(!updates.has_changed().unwrap());

        cart.clear().await;
        assert!(updates.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn test_restore_does_not_publish() {
        let storage = MemoryStorage::new();
        let (mut cart, _) = manager(storage.clone()).await;
        cart.add(solene(), None, 1).await;

        let snapshots = watch::Sender::new(CartState::new());
        let updates = snapshots.subscribe();
        let restored = CartManager::restore(storage, RecordingNotifier::default(), snapshots).await;

        assert_eq!(restored.item_count(), 1);
        assert!(!updates.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_noop_commands_do_not_touch_storage() {
        let storage = MemoryStorage::new();
        let (mut cart, _) = manager(storage.clone()).await;

        assert!(cart.remove(LineId::generate()).await.is_none());
        assert!(cart.set_quantity(LineId::generate(), 2).await.is_none());
        assert!(cart.set_variant(LineId::generate(), None).await.is_none());
        assert!(cart.clear().await.is_none());
        assert!(storage.raw().await.is_none());
    }
}
