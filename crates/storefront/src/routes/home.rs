//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use super::products::ProductCardView;
use crate::catalog::Occasion;
use crate::filters;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// Occasion tile linking to its suggested arrangement.
#[derive(Clone)]
pub struct OccasionView {
    pub name: String,
    pub description: String,
    pub image: String,
    pub product_url: String,
}

impl From<&Occasion> for OccasionView {
    fn from(occasion: &Occasion) -> Self {
        Self {
            name: occasion.name.clone(),
            description: occasion.description.clone(),
            image: occasion.image.clone(),
            product_url: format!("/products/{}", occasion.product_id),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductCardView>,
    pub occasions: Vec<OccasionView>,
    pub nonce: String,
}

/// Display the home page.
#[instrument(skip(state, nonce))]
pub async fn home(State(state): State<AppState>, CspNonce(nonce): CspNonce) -> HomeTemplate {
    let catalog = state.catalog();

    HomeTemplate {
        featured: catalog.featured().map(ProductCardView::from).collect(),
        occasions: catalog.occasions().iter().map(OccasionView::from).collect(),
        nonce,
    }
}
