//! Shopping cart domain: line items, the state machine, and derived totals.

pub mod item;
pub mod state;
pub mod totals;

pub use item::{LineItem, ProductRef, VariantRef};
pub use state::{CartCommand, CartEvent, CartState};
pub use totals::CartTotals;
