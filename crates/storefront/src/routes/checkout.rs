//! Checkout route handlers.
//!
//! The storefront collects an order summary but takes no payment; submitting
//! the checkout form answers `501 Not Implemented`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use super::cart::CartView;
use crate::filters;
use crate::middleware::{Cart, CspNonce};
use crate::state::AppState;

/// Body returned by the payment stub.
pub const PAYMENT_UNAVAILABLE: &str = "payment processing is not available";

/// Checkout summary template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub nonce: String,
}

/// Display the order summary, or send an empty cart back to `/cart`.
#[instrument(skip(state, cart, nonce))]
pub async fn show(
    State(state): State<AppState>,
    Cart(cart): Cart,
    CspNonce(nonce): CspNonce,
) -> Response {
    if cart.state().is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutTemplate {
        cart: CartView::new(cart.state(), state.catalog()),
        nonce,
    }
    .into_response()
}

/// Payment stub.
#[instrument(skip(cart))]
pub async fn submit(Cart(cart): Cart) -> impl IntoResponse {
    tracing::info!(
        lines = cart.items().len(),
        total = %cart.format_price(cart.total()),
        "Checkout submitted without a payment provider"
    );
    (StatusCode::NOT_IMPLEMENTED, PAYMENT_UNAVAILABLE)
}
