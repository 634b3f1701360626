//! Cart extractor and per-session mutation lock.
//!
//! Builds a [`SessionCart`] for the current visitor: the manager is restored
//! from the cart slot in the visitor's session and saves back to it after
//! every mutation.
//!
//! Two requests from the same browser must not interleave their
//! load-modify-save cycles, or one addition overwrites the other.
//! [`cart_lock_middleware`] sits outside the session layer and holds the
//! session's [`CartChannel`](crate::services::CartChannel) lock for the whole
//! of every state-changing request.

use std::time::Duration;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Method, header::COOKIE, request::Parts},
    middleware::Next,
    response::Response,
};
use naia_core::CartState;
use tokio::sync::watch;
use tower_sessions::{Session, cookie::Cookie};

use super::session::SESSION_COOKIE_NAME;

use crate::error::AppError;
use crate::services::{CartManager, SessionCart, SessionStorage, ToastQueue};
use crate::state::AppState;

/// Extractor yielding the visitor's cart manager.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Cart(cart): Cart) -> impl IntoResponse {
///     format!("{} items", cart.item_count())
/// }
/// ```
pub struct Cart(pub SessionCart);

impl FromRequestParts<AppState> for Cart {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Session("session layer not installed".to_string()))?;

        // Fresh visitors have no session id until the response is sent, and
        // nobody can be listening on their channel yet.
        let snapshots = match session.id() {
            Some(id) => state.carts().channel(&id.to_string()).await.snapshots(),
            None => watch::Sender::new(CartState::new()),
        };

        let cart_config = &state.config().cart;
        let storage = SessionStorage::new(session, cart_config.storage_key.clone());
        let toasts = ToastQueue::new(Duration::from_millis(cart_config.toast_duration_ms));

        Ok(Self(CartManager::restore(storage, toasts, snapshots).await))
    }
}

/// Serialize state-changing requests per session.
///
/// Must be layered outside the session layer so the lock also covers the
/// session store save. Requests without a session cookie run unlocked.
pub async fn cart_lock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::GET || request.method() == Method::HEAD {
        return next.run(request).await;
    }

    let Some(session_id) = session_cookie(&request) else {
        return next.run(request).await;
    };

    let channel = state.carts().channel(&session_id).await;
    let _guard = channel.lock().await;
    next.run(request).await
}

/// Value of the session cookie sent with a request.
fn session_cookie(request: &Request) -> Option<String> {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{body::Body, http};

    use super::*;

    #[test]
    fn test_session_cookie_found_among_others() {
        let request = http::Request::builder()
            .header(COOKIE, "theme=dark; naia_session=abc123; lang=en")
            .body(Body::empty())
            .unwrap();
        assert_eq!(session_cookie(&request).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_cookie_missing() {
        let request = http::Request::builder()
            .header(COOKIE, "theme=dark")
            .body(Body::empty())
            .unwrap();
        assert_eq!(session_cookie(&request), None);

        let request = http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(session_cookie(&request), None);
    }
}
