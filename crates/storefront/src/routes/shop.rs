//! Shop (collection) route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use super::products::ProductCardView;
use crate::catalog::Category;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// Shop query parameters.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
}

/// Category filter button.
#[derive(Clone)]
pub struct CategoryLinkView {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<CategoryLinkView>,
    pub all_active: bool,
    pub heading: String,
    pub nonce: String,
}

/// Parse the `category` parameter; absent, empty, or "all" means no filter.
fn parse_category(raw: Option<&str>) -> Result<Option<Category>> {
    match raw.map(str::trim) {
        None | Some("" | "all") => Ok(None),
        Some(slug) => slug
            .parse()
            .map(Some)
            .map_err(|e: crate::catalog::UnknownCategory| AppError::BadRequest(e.to_string())),
    }
}

/// Display the shop, optionally filtered by category.
#[instrument(skip(state, nonce))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
    CspNonce(nonce): CspNonce,
) -> Result<ShopTemplate> {
    let selected = parse_category(query.category.as_deref())?;
    let catalog = state.catalog();

    let products: Vec<ProductCardView> = match selected {
        Some(category) => catalog
            .by_category(category)
            .map(ProductCardView::from)
            .collect(),
        None => catalog.products().iter().map(ProductCardView::from).collect(),
    };

    let categories = catalog
        .categories()
        .iter()
        .map(|&category| CategoryLinkView {
            slug: category.slug(),
            label: category.label(),
            active: selected == Some(category),
        })
        .collect();

    Ok(ShopTemplate {
        products,
        categories,
        all_active: selected.is_none(),
        heading: selected.map_or_else(|| "All Arrangements".to_string(), |c| c.label().to_string()),
        nonce,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(None).ok(), Some(None));
        assert_eq!(parse_category(Some("all")).ok(), Some(None));
        assert_eq!(parse_category(Some("")).ok(), Some(None));
        assert_eq!(parse_category(Some("warm")).ok(), Some(Some(Category::Warm)));
        assert!(matches!(
            parse_category(Some("tropical")),
            Err(AppError::BadRequest(_))
        ));
    }
}
