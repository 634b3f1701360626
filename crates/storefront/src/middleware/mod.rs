//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction per route)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID
//! 4. CSP nonce
//! 5. Security headers
//! 6. Cart lock (serializes mutations per session, see [`cart`])
//! 7. Session layer (in-memory store holding the cart slot)
//!
//! The [`Cart`] extractor sits on top of the session layer.

pub mod cart;
pub mod csp;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use cart::{Cart, cart_lock_middleware};
pub use csp::{CspNonce, csp_nonce_middleware};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
