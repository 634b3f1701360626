//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use naia_core::format_price;
use tracing::instrument;

use crate::catalog::{Product, Vase};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// Product card data for listings.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_price(product.price),
            image: product.primary_image().to_string(),
            category: product.category.label().to_string(),
        }
    }
}

/// Vase option data for the product page.
#[derive(Clone)]
pub struct VaseView {
    pub id: String,
    pub name: String,
    /// Surcharge, e.g. "+£35.00".
    pub surcharge: String,
    pub image: String,
}

impl From<&Vase> for VaseView {
    fn from(vase: &Vase) -> Self {
        Self {
            id: vase.id.to_string(),
            name: vase.name.clone(),
            surcharge: format!("+{}", format_price(vase.price)),
            image: vase.image.clone(),
        }
    }
}

/// Product detail data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub images: Vec<String>,
    pub description: String,
    pub details: String,
    pub care: String,
    pub footnote: String,
    pub vases: Vec<VaseView>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_price(product.price),
            category: product.category.label().to_string(),
            images: product.images.clone(),
            description: product.description.clone(),
            details: product.details.clone(),
            care: product.care.clone(),
            footnote: product.footnote.clone(),
            vases: product.available_vases.iter().map(VaseView::from).collect(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
    pub suggested: Vec<ProductCardView>,
    pub nonce: String,
}

/// Display a product with its vase options and suggestions.
#[instrument(skip(state, nonce))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    CspNonce(nonce): CspNonce,
) -> Result<ProductShowTemplate> {
    let catalog = state.catalog();
    let product = catalog
        .product(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        product: ProductView::from(product),
        suggested: catalog
            .suggested(&id)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        nonce,
    })
}
