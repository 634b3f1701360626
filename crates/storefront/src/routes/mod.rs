//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured arrangements, occasions)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /shop?category=<slug>   - All arrangements, optionally by category
//! GET  /products/{id}          - Product detail with vase options
//!
//! # Pages
//! GET  /our-story              - Brand story
//! GET  /services               - Bespoke services
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /cart/dropdown          - Mini-cart (fragment)
//! GET  /cart/events            - Count badge updates (SSE, event `cart-count`)
//! POST /cart/add               - Add to cart (count fragment, triggers cart-updated + show-toast)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/variant           - Change vase (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//!
//! # Checkout
//! GET  /checkout               - Order summary (redirects to /cart when empty)
//! POST /checkout               - Payment stub (501)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod pages;
pub mod products;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/dropdown", get(cart::dropdown))
        .route("/events", get(cart::events))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/variant", post(cart::change_variant))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/shop", get(shop::index))
        .route("/products/{id}", get(products::show))
        .route("/our-story", get(pages::our_story))
        .route("/services", get(pages::services))
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::show).post(checkout::submit))
}
