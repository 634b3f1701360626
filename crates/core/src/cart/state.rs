//! The cart state machine.
//!
//! [`CartState::apply`] is the only way a cart changes. It consumes the current
//! snapshot and a [`CartCommand`] and returns the next snapshot together with a
//! [`CartEvent`] describing what changed, or `None` when the command was a
//! no-op (unknown line id, clearing an empty cart, adding zero units).
//!
//! Invariants upheld by every transition:
//! - every line has `quantity >= 1`
//! - no two lines *added* through [`CartCommand::Add`] share the same
//!   product id and variant id; [`CartCommand::SetVariant`] never merges
//! - insertion order is preserved

use serde::{Deserialize, Serialize};

use super::item::{LineItem, ProductRef, VariantRef};
use crate::types::LineId;

/// A request to change the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add `quantity` units, merging into an existing matching line.
    ///
    /// `line_id` is used only if a new line has to be appended.
    Add {
        line_id: LineId,
        product: ProductRef,
        variant: Option<VariantRef>,
        quantity: u32,
    },
    /// Remove a line.
    Remove { line_id: LineId },
    /// Set a line's quantity; values `<= 0` remove the line.
    SetQuantity { line_id: LineId, quantity: i64 },
    /// Replace the selected variant of a line.
    SetVariant {
        line_id: LineId,
        variant: Option<VariantRef>,
    },
    /// Remove every line.
    Clear,
    /// Replace the cart with a previously persisted snapshot.
    Restore { items: Vec<LineItem> },
}

/// What a successful transition changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded {
        line_id: LineId,
        product_name: String,
        variant_name: Option<String>,
        quantity: u32,
        /// True when the units were merged into an existing line.
        merged: bool,
    },
    ItemRemoved {
        line_id: LineId,
    },
    QuantityChanged {
        line_id: LineId,
        quantity: u32,
    },
    VariantChanged {
        line_id: LineId,
        variant_name: Option<String>,
    },
    Cleared,
    Restored {
        lines: usize,
    },
}

impl CartEvent {
    /// User-facing message for events that warrant a notification.
    ///
    /// Only additions are announced.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        match self {
            Self::ItemAdded {
                product_name,
                variant_name,
                ..
            } => Some(variant_name.as_ref().map_or_else(
                || format!("{product_name} added to cart"),
                |variant| format!("{product_name} with {variant} added to cart"),
            )),
            _ => None,
        }
    }

    /// Whether the event should be written back to durable storage.
    ///
    /// A restore only mirrors what storage already holds.
    #[must_use]
    pub const fn needs_persist(&self) -> bool {
        !matches!(self, Self::Restored { .. })
    }
}

/// Ordered collection of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Lines in display (insertion) order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line by its cart id.
    #[must_use]
    pub fn line(&self, line_id: LineId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.cart_id == line_id)
    }

    /// Apply a command, producing the next snapshot.
    #[must_use]
    pub fn apply(mut self, command: CartCommand) -> (Self, Option<CartEvent>) {
        let event = match command {
            CartCommand::Add {
                line_id,
                product,
                variant,
                quantity,
            } => self.add(line_id, product, variant, quantity),
            CartCommand::Remove { line_id } => self.remove(line_id),
            CartCommand::SetQuantity { line_id, quantity } => {
                self.set_quantity(line_id, quantity)
            }
            CartCommand::SetVariant { line_id, variant } => self.set_variant(line_id, variant),
            CartCommand::Clear => self.clear(),
            CartCommand::Restore { items } => self.restore(items),
        };
        (self, event)
    }

    fn add(
        &mut self,
        line_id: LineId,
        product: ProductRef,
        variant: Option<VariantRef>,
        quantity: u32,
    ) -> Option<CartEvent> {
        if quantity == 0 {
            return None;
        }

        let product_name = product.name.clone();
        let variant_name = variant.as_ref().map(|v| v.name.clone());
        let variant_id = variant.as_ref().map(|v| &v.id);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, variant_id))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return Some(CartEvent::ItemAdded {
                line_id: existing.cart_id,
                product_name,
                variant_name,
                quantity,
                merged: true,
            });
        }

        self.items
            .push(LineItem::new(line_id, product, variant, quantity));
        Some(CartEvent::ItemAdded {
            line_id,
            product_name,
            variant_name,
            quantity,
            merged: false,
        })
    }

    fn remove(&mut self, line_id: LineId) -> Option<CartEvent> {
        let before = self.items.len();
        self.items.retain(|item| item.cart_id != line_id);
        (self.items.len() != before).then_some(CartEvent::ItemRemoved { line_id })
    }

    fn set_quantity(&mut self, line_id: LineId, quantity: i64) -> Option<CartEvent> {
        let clamped = quantity.max(0);
        if clamped == 0 {
            return self.remove(line_id);
        }

        let quantity = u32::try_from(clamped).unwrap_or(u32::MAX);
        let line = self.items.iter_mut().find(|item| item.cart_id == line_id)?;
        line.quantity = quantity;
        Some(CartEvent::QuantityChanged { line_id, quantity })
    }

    fn set_variant(&mut self, line_id: LineId, variant: Option<VariantRef>) -> Option<CartEvent> {
        let line = self.items.iter_mut().find(|item| item.cart_id == line_id)?;
        let variant_name = variant.as_ref().map(|v| v.name.clone());
        line.variant = variant;
        Some(CartEvent::VariantChanged {
            line_id,
            variant_name,
        })
    }

    fn clear(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }
        self.items.clear();
        Some(CartEvent::Cleared)
    }

    fn restore(&mut self, items: Vec<LineItem>) -> Option<CartEvent> {
        self.items = items.into_iter().filter(|item| item.quantity > 0).collect();
        Some(CartEvent::Restored {
            lines: self.items.len(),
        })
    }
}

impl From<Vec<LineItem>> for CartState {
    fn from(items: Vec<LineItem>) -> Self {
        Self::new().apply(CartCommand::Restore { items }).0
    }
}
