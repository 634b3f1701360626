//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation answers with a fragment plus an `HX-Trigger` header so the
//! count badge and mini-cart refresh themselves, and additions raise a toast.

use std::convert::Infallible;
use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::response::sse::{Event, KeepAlive};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response, Sse},
};
use naia_core::{CartState, LineId, LineItem, VariantRef, format_price};
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt, wrappers::WatchStream};
use tracing::instrument;

use crate::catalog::{Catalog, Product, Vase};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::htmx::HxTrigger;
use crate::middleware::{Cart, CspNonce};
use crate::services::SessionCart;
use crate::state::AppState;

/// Vase choice offered on a cart line.
#[derive(Clone)]
pub struct VaseOptionView {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub line_id: String,
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub variant_name: Option<String>,
    /// Vase surcharge per unit, e.g. "+£35.00".
    pub variant_price: Option<String>,
    pub price: String,
    pub line_price: String,
    pub quantity: u32,
    pub vase_options: Vec<VaseOptionView>,
}

impl CartItemView {
    fn new(item: &LineItem, catalog: &Catalog) -> Self {
        let selected = item.variant_id().map(|id| id.as_str());
        let vase_options = catalog
            .product(item.product_id.as_str())
            .map(|product| {
                product
                    .available_vases
                    .iter()
                    .map(|vase| VaseOptionView {
                        id: vase.id.to_string(),
                        label: format!("{} (+{})", vase.name, format_price(vase.price)),
                        selected: selected == Some(vase.id.as_str()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            line_id: item.cart_id.to_string(),
            product_id: item.product_id.to_string(),
            name: item.name.clone(),
            image: item.display_image().to_string(),
            variant_name: item.variant.as_ref().map(|variant| variant.name.clone()),
            variant_price: item
                .variant
                .as_ref()
                .map(|variant| format!("+{}", format_price(variant.price))),
            price: format_price(item.price),
            line_price: format_price(item.line_total()),
            quantity: item.quantity,
            vase_options,
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub variant_total: String,
    pub total: String,
    pub item_count: u64,
    pub has_vases: bool,
}

impl CartView {
    /// Build the view with every price pre-formatted.
    #[must_use]
    pub fn new(state: &CartState, catalog: &Catalog) -> Self {
        let totals = state.totals();
        Self {
            items: state
                .items()
                .iter()
                .map(|item| CartItemView::new(item, catalog))
                .collect(),
            subtotal: totals.subtotal_display(),
            variant_total: totals.variant_total_display(),
            total: totals.total_display(),
            item_count: totals.item_count,
            has_vases: !totals.variant_total.is_zero(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: Option<u32>,
}

/// Update cart form data. Zero or negative quantities remove the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: String,
    pub quantity: i64,
}

/// Change vase form data; an empty `variant_id` removes the vase.
#[derive(Debug, Deserialize)]
pub struct ChangeVariantForm {
    pub line_id: String,
    #[serde(default)]
    pub variant_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

fn parse_line_id(raw: &str) -> Result<LineId> {
    LineId::from_str(raw.trim()).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Look up a vase and check the product offers it.
fn offered_vase<'a>(catalog: &'a Catalog, product: &Product, vase_id: &str) -> Result<&'a Vase> {
    let vase = catalog
        .vase(vase_id)
        .ok_or_else(|| AppError::BadRequest(format!("unknown vase {vase_id}")))?;

    if product.vase(vase_id).is_none() {
        return Err(AppError::BadRequest(format!(
            "vase {vase_id} is not offered for {}",
            product.id
        )));
    }
    Ok(vase)
}

/// Treat an absent or blank form field as "no vase".
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub nonce: String,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Mini-cart dropdown fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_dropdown.html")]
pub struct CartDropdownTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// SSE event carrying a freshly rendered count badge.
fn count_event(count: u64) -> Event {
    let html = CartCountTemplate { count }.render().unwrap_or_else(|e| {
        tracing::warn!("Failed to render cart count: {e}");
        String::new()
    });
    Event::default().event("cart-count").data(html)
}

/// Re-render the line items after a mutation.
fn items_response(state: &AppState, cart: &SessionCart) -> Response {
    (
        HxTrigger::cart_updated(cart.notifier().drain()),
        CartItemsTemplate {
            cart: CartView::new(cart.state(), state.catalog()),
        },
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, cart, nonce))]
pub async fn show(
    State(state): State<AppState>,
    Cart(cart): Cart,
    CspNonce(nonce): CspNonce,
) -> CartShowTemplate {
    CartShowTemplate {
        cart: CartView::new(cart.state(), state.catalog()),
        nonce,
    }
}

/// Add item to cart (HTMX).
///
/// Returns the new count badge with `cart-updated` and `show-toast` triggers.
#[instrument(skip(state, cart))]
pub async fn add(
    State(state): State<AppState>,
    Cart(mut cart): Cart,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .product(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let vase = match non_blank(form.variant_id.as_deref()) {
        Some(vase_id) => Some(offered_vase(state.catalog(), product, vase_id)?),
        None => None,
    };

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[
            ("product_id", product.id.as_str()),
            ("vase_id", vase.map_or("", |vase| vase.id.as_str())),
        ]),
    );

    cart.add(
        product.into(),
        vase.map(Into::into),
        form.quantity.unwrap_or(1),
    )
    .await;

    Ok((
        HxTrigger::cart_updated(cart.notifier().drain()),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Update cart item quantity (HTMX).
#[instrument(skip(state, cart))]
pub async fn update(
    State(state): State<AppState>,
    Cart(mut cart): Cart,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let line_id = parse_line_id(&form.line_id)?;
    cart.set_quantity(line_id, form.quantity).await;
    Ok(items_response(&state, &cart))
}

/// Swap the vase on a cart line (HTMX).
#[instrument(skip(state, cart))]
pub async fn change_variant(
    State(state): State<AppState>,
    Cart(mut cart): Cart,
    Form(form): Form<ChangeVariantForm>,
) -> Result<Response> {
    let line_id = parse_line_id(&form.line_id)?;

    // Unknown lines are a no-op, like every other cart command.
    let Some(line) = cart.state().line(line_id) else {
        return Ok(items_response(&state, &cart));
    };

    let variant: Option<VariantRef> = match non_blank(Some(&form.variant_id)) {
        Some(vase_id) => {
            let catalog = state.catalog();
            let product = catalog.product(line.product_id.as_str()).ok_or_else(|| {
                AppError::BadRequest(format!("product {} is no longer sold", line.product_id))
            })?;
            Some(offered_vase(catalog, product, vase_id)?.into())
        }
        None => None,
    };

    cart.set_variant(line_id, variant).await;
    Ok(items_response(&state, &cart))
}

/// Remove item from cart (HTMX).
#[instrument(skip(state, cart))]
pub async fn remove(
    State(state): State<AppState>,
    Cart(mut cart): Cart,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let line_id = parse_line_id(&form.line_id)?;
    cart.remove(line_id).await;
    Ok(items_response(&state, &cart))
}

/// Empty the cart (HTMX).
#[instrument(skip(state, cart))]
pub async fn clear(State(state): State<AppState>, Cart(mut cart): Cart) -> Response {
    cart.clear().await;
    items_response(&state, &cart)
}

/// Get cart count badge (HTMX).
#[instrument(skip(cart))]
pub async fn count(Cart(cart): Cart) -> CartCountTemplate {
    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Stream the count badge to every open tab of this browser (SSE).
///
/// Sends the current count first, then one event per cart mutation made by
/// any request in the same session.
#[instrument(skip(cart))]
pub async fn events(Cart(cart): Cart) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let current = count_event(cart.item_count());
    let updates = WatchStream::from_changes(cart.subscribe())
        .map(|snapshot| count_event(snapshot.item_count()));

    let stream = tokio_stream::once(current).chain(updates).map(Ok);
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Get the mini-cart dropdown (HTMX).
#[instrument(skip(state, cart))]
pub async fn dropdown(State(state): State<AppState>, Cart(cart): Cart) -> CartDropdownTemplate {
    CartDropdownTemplate {
        cart: CartView::new(cart.state(), state.catalog()),
    }
}
