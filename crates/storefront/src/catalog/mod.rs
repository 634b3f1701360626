//! Static product catalog.
//!
//! The catalog is a fixed, read-only list of arrangements, the vases they can
//! be paired with, the shop categories, and the occasions featured on the home
//! page. It is built once at startup and handed to handlers through
//! [`AppState`](crate::state::AppState).

pub mod data;
pub mod images;

use std::fmt;
use std::str::FromStr;

use naia_core::{ProductId, ProductRef, VariantId, VariantRef};
use rust_decimal::Decimal;
use thiserror::Error;

pub use images::PLACEHOLDER_IMAGE;

/// Shop category of an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Minimalist,
    Romantic,
    Warm,
    Ethereal,
    Dramatic,
    Luxury,
}

impl Category {
    /// Every category, in shop filter order.
    pub const ALL: [Self; 6] = [
        Self::Minimalist,
        Self::Romantic,
        Self::Warm,
        Self::Ethereal,
        Self::Dramatic,
        Self::Luxury,
    ];

    /// URL slug (`?category=warm`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Romantic => "romantic",
            Self::Warm => "warm",
            Self::Ethereal => "ethereal",
            Self::Dramatic => "dramatic",
            Self::Luxury => "luxury",
        }
    }

    /// Filter button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalist",
            Self::Romantic => "Romantic",
            Self::Warm => "Warm Tones",
            Self::Ethereal => "Ethereal",
            Self::Dramatic => "Dramatic",
            Self::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Unknown category slug.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A vase that can be paired with an arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vase {
    pub id: VariantId,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    /// Photo of the arrangement displayed in this vase, when one exists.
    pub product_image: Option<String>,
}

impl From<&Vase> for VariantRef {
    fn from(vase: &Vase) -> Self {
        Self {
            id: vase.id.clone(),
            name: vase.name.clone(),
            price: vase.price,
            image: vase.image.clone(),
            product_image: vase.product_image.clone(),
        }
    }
}

/// An arrangement for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub featured: bool,
    pub images: Vec<String>,
    pub description: String,
    pub details: String,
    pub care: String,
    pub footnote: String,
    pub available_vases: Vec<Vase>,
    pub category: Category,
    pub tags: Vec<String>,
    pub suggested_products: Vec<ProductId>,
}

impl Product {
    /// Main photo, or the placeholder when the product has none.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or(PLACEHOLDER_IMAGE, String::as_str)
    }

    /// One of this product's vase options.
    #[must_use]
    pub fn vase(&self, vase_id: &str) -> Option<&Vase> {
        self.available_vases.iter().find(|vase| vase.id == *vase_id)
    }
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().to_string(),
        }
    }
}

/// A gifting occasion shown on the home page carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occasion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub product_id: ProductId,
    pub image: String,
}

/// Read-only catalog with lookup helpers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    vases: Vec<Vase>,
    occasions: Vec<Occasion>,
}

impl Catalog {
    /// Assemble a catalog from its parts.
    #[must_use]
    pub const fn new(products: Vec<Product>, vases: Vec<Vase>, occasions: Vec<Occasion>) -> Self {
        Self {
            products,
            vases,
            occasions,
        }
    }

    /// The store's built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let vases = data::vases();
        Self::new(data::products(&vases), vases, data::occasions())
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// Products flagged for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.featured)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    /// Resolve a product's suggestions, skipping ids that no longer exist.
    ///
    /// Returns an empty list for an unknown product.
    #[must_use]
    pub fn suggested(&self, id: &str) -> Vec<&Product> {
        self.product(id)
            .map(|product| {
                product
                    .suggested_products
                    .iter()
                    .filter_map(|suggested| self.product(suggested.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Shop categories, in filter order.
    #[must_use]
    pub const fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    #[must_use]
    pub fn vases(&self) -> &[Vase] {
        &self.vases
    }

    #[must_use]
    pub fn vase(&self, id: &str) -> Option<&Vase> {
        self.vases.iter().find(|vase| vase.id == *id)
    }

    #[must_use]
    pub fn occasions(&self) -> &[Occasion] {
        &self.occasions
    }
}
