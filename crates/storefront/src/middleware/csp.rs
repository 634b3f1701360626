//! Per-request CSP nonce.
//!
//! The storefront ships one inline script (the toast listener in `base.html`);
//! it carries this nonce and the CSP header allows nothing else inline.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// Random 128-bit nonce, base64 encoded.
#[derive(Clone, Debug, Default)]
pub struct CspNonce(pub String);

impl CspNonce {
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Stores a fresh [`CspNonce`] in the request extensions.
///
/// Runs before `security_headers_middleware` so the header and the page
/// render with the same value.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(nonce) = parts.extensions.get::<Self>() {
            return Ok(nonce.clone());
        }
        tracing::warn!("CSP nonce missing; inline scripts will be blocked");
        Ok(Self::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_base64_of_16_bytes() {
        let nonce = CspNonce::generate();
        let decoded = STANDARD.decode(nonce.value()).unwrap();
        assert_eq!(decoded.len(), 16);
    }

    #[test]
    fn test_nonces_differ() {
        assert_ne!(CspNonce::generate().0, CspNonce::generate().0);
    }
}
