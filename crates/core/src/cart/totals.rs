//! Derived cart aggregates.
//!
//! Totals are recomputed from the line items on every call; nothing here is
//! cached alongside the cart.

use rust_decimal::Decimal;

use super::state::CartState;
use crate::types::format_price;

/// Snapshot of every derived aggregate for one cart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of product price times quantity.
    pub subtotal: Decimal,
    /// Sum of variant surcharge times quantity.
    pub variant_total: Decimal,
    /// Subtotal plus variant total.
    pub total: Decimal,
    /// Sum of quantities.
    pub item_count: u64,
}

impl CartTotals {
    /// Formatted subtotal.
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        format_price(self.subtotal)
    }

    /// Formatted variant total.
    #[must_use]
    pub fn variant_total_display(&self) -> String {
        format_price(self.variant_total)
    }

    /// Formatted grand total.
    #[must_use]
    pub fn total_display(&self) -> String {
        format_price(self.total)
    }
}

impl CartState {
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items()
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    #[must_use]
    pub fn variant_total(&self) -> Decimal {
        self.items()
            .iter()
            .map(|item| item.variant_price() * Decimal::from(item.quantity))
            .sum()
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.variant_total()
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items()
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// All aggregates at once.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let variant_total = self.variant_total();
        CartTotals {
            subtotal,
            variant_total,
            total: subtotal + variant_total,
            item_count: self.item_count(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::cart::{CartCommand, LineItem, ProductRef, VariantRef};
    use crate::types::{LineId, ProductId, VariantId};

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

    fn add(state: CartState, product: ProductRef, variant: Option<VariantRef>) -> CartState {
        state
            .apply(CartCommand::Add {
                line_id: LineId::generate(),
                product,
                variant,
                quantity: 1,
            })
            .0
    }

    fn assert_consistent(state: &CartState) {
        let expected_subtotal: Decimal = state
            .items()
            .iter()
            .map(|i: &LineItem| i.price * Decimal::from(i.quantity))
            .sum();
        assert_eq!(state.subtotal(), expected_subtotal);
        assert_eq!(state.total(), state.subtotal() + state.variant_total());
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = CartState::new().totals();
        assert_eq!(totals, CartTotals::default());
        assert_eq!(totals.total_display(), "£0.00");
    }

    #[test]
    fn test_solene_with_and_without_vase() {
        let state = add(CartState::new(), solene(), None);
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.subtotal(), Decimal::from(185));
        assert_eq!(state.total(), Decimal::from(185));

        let state = add(state, solene(), Some(forest_green()));
        let totals = state.totals();
        assert_eq!(state.items().len(), 2);
        assert_eq!(totals.subtotal, Decimal::from(370));
        assert_eq!(totals.variant_total, Decimal::from(35));
        assert_eq!(totals.total, Decimal::from(405));
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_display(), "£405.00");
    }

    #[test]
    fn test_solene_twice_merges() {
        let state = add(add(CartState::new(), solene(), None), solene(), None);
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].quantity, 2);
        assert_eq!(state.subtotal(), Decimal::from(370));
    }

    #[test]
    fn test_totals_stay_consistent_through_transitions() {
        let mut state = add(CartState::new(), solene(), Some(forest_green()));
        assert_consistent(&state);

        let line_id = state.items()[0].cart_id;
        for command in [
            CartCommand::SetQuantity { line_id, quantity: 7 },
            CartCommand::SetVariant { line_id, variant: None },
            CartCommand::SetVariant {
                line_id,
                variant: Some(forest_green()),
            },
            CartCommand::SetQuantity { line_id, quantity: -1 },
        ] {
            state = state.apply(command).0;
            assert_consistent(&state);
        }

        assert!(state.is_empty());
        assert_eq!(state.item_count(), 0);
    }

    #[test]
    fn test_fractional_prices_sum_exactly() {
        let mut product = solene();
        product.price = Decimal::new(1999, 2);
        let state = add(CartState::new(), product, None);
        let line_id = state.items()[0].cart_id;
        let (state, _) = state.apply(CartCommand::SetQuantity { line_id, quantity: 3 });

        assert_eq!(state.subtotal(), Decimal::new(5997, 2));
        assert_eq!(state.totals().subtotal_display(), "£59.97");
    }
}
