//! Cart line items and the references they are built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{LineId, ProductId, VariantId};

/// The product fields captured when an item is added to the cart.
///
/// The price is a snapshot: later catalog changes do not affect lines that are
/// already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

/// A selected product variant (a vase) with its own surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: VariantId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    /// Alternate product photo showing the arrangement in this vase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
}

/// One row in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub cart_id: LineId,
    pub product_id: ProductId,
    pub name: String,
    /// Unit price of the product, excluding any variant surcharge.
    pub price: Decimal,
    pub image: String,
    pub variant: Option<VariantRef>,
    pub quantity: u32,
}

impl LineItem {
    /// Build a fresh line from a product reference.
    #[must_use]
    pub fn new(
        cart_id: LineId,
        product: ProductRef,
        variant: Option<VariantRef>,
        quantity: u32,
    ) -> Self {
        Self {
            cart_id,
            product_id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            variant,
            quantity,
        }
    }

    /// Whether this line is the same purchasable combination.
    ///
    /// Lines match when both the product id and the variant id (or the absence
    /// of a variant) are equal.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        self.product_id == *product_id && self.variant_id() == variant_id
    }

    /// Id of the selected variant, if any.
    #[must_use]
    pub fn variant_id(&self) -> Option<&VariantId> {
        self.variant.as_ref().map(|variant| &variant.id)
    }

    /// Variant surcharge per unit (zero without a variant).
    #[must_use]
    pub fn variant_price(&self) -> Decimal {
        self.variant
            .as_ref()
            .map_or(Decimal::ZERO, |variant| variant.price)
    }

    /// Product price plus variant surcharge, per unit.
    #[must_use]
    pub fn unit_total(&self) -> Decimal {
        self.price + self.variant_price()
    }

    /// Full price of this line: unit total times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_total() * Decimal::from(self.quantity)
    }

    /// Image to show for this line, preferring the variant's product photo.
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.variant
            .as_ref()
            .and_then(|variant| variant.product_image.as_deref())
            .unwrap_or(&self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solene() -> ProductRef {
        ProductRef {
            id: ProductId::new("solene"),
            name: "Solène".to_string(),
            price: Decimal::from(185),
            image: "/assets/products/solene/ikebana.jpg".to_string(),
        }
    }

    fn forest() -> VariantRef {
        VariantRef {
            id: VariantId::new("forest"),
            name: "Forest Green".to_string(),
            price: Decimal::from(35),
            image: "/assets/vases/forest.jpg".to_string(),
            product_image: None,
        }
    }

    #[test]
    fn test_line_totals_include_variant() {
        let line = LineItem::new(LineId::generate(), solene(), Some(forest()), 2);
        assert_eq!(line.unit_total(), Decimal::from(220));
        assert_eq!(line.line_total(), Decimal::from(440));
        assert_eq!(line.variant_price(), Decimal::from(35));
    }

    #[test]
    fn test_matches_requires_same_variant() {
        let plain = LineItem::new(LineId::generate(), solene(), None, 1);
        let product_id = ProductId::new("solene");
        let forest_id = VariantId::new("forest");

        assert!(plain.matches(&product_id, None));
        assert!(!plain.matches(&product_id, Some(&forest_id)));
        assert!(!plain.matches(&ProductId::new("amea"), None));
    }

    #[test]
    fn test_display_image_prefers_variant_photo() {
        let mut vase = forest();
        let line = LineItem::new(LineId::generate(), solene(), Some(vase.clone()), 1);
        assert_eq!(line.display_image(), "/assets/products/solene/ikebana.jpg");

        vase.product_image = Some("/assets/products/solene/forest.jpg".to_string());
        let line = LineItem::new(LineId::generate(), solene(), Some(vase), 1);
        assert_eq!(line.display_image(), "/assets/products/solene/forest.jpg");
    }
}
