//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Cart manager: command dispatch, derived totals, event fan-out
//! - `storage` - Durable cart slot (session-backed, or in-memory for tests)
//! - `notify` - Toast notifications raised by cart additions
//! - `hub` - Per-session mutation lock and snapshot channel

pub mod cart;
pub mod hub;
pub mod notify;
pub mod storage;

pub use cart::CartManager;
pub use hub::{CartChannel, CartHub};
pub use notify::{Notifier, Toast, ToastQueue};
pub use storage::{CartStorage, MemoryStorage, SessionStorage, StorageError};

/// The cart manager used by HTTP handlers.
pub type SessionCart = CartManager<SessionStorage, ToastQueue>;
