//! Integration tests for the Naia storefront.
//!
//! The assembled router is driven in-process with `tower::ServiceExt::oneshot`;
//! no server or network is involved. [`TestClient`] plays the browser: it
//! keeps the session cookie between requests so the cart survives from one
//! call to the next.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p naia-integration-tests
//! ```

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
    response::Response,
};
use naia_storefront::{catalog::Catalog, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;
use tower_sessions::cookie::Cookie;

/// Largest response body the helpers will buffer.
const BODY_LIMIT: usize = 1024 * 1024;

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of a response header, if present and readable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Parsed `HX-Trigger` header.
    #[must_use]
    pub fn hx_trigger(&self) -> Option<serde_json::Value> {
        self.header("hx-trigger")
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

/// In-process client with a one-cookie jar.
///
/// Cloning yields another tab of the same browser: same server, same cookie.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A client against the built-in catalog with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        Self {
            app: naia_storefront::app(AppState::new(config, Catalog::builtin())),
            cookie: None,
        }
    }

    /// A second browser sharing this client's server but not its cookie.
    #[must_use]
    pub fn fresh_browser(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::get(uri), Body::empty()).await
    }

    /// POST an urlencoded form.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        self.send(
            Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
            Body::from(body),
        )
        .await
    }

    /// GET without buffering the body, for streaming endpoints.
    pub async fn open(&mut self, uri: &str) -> Response {
        self.dispatch(Request::get(uri), Body::empty()).await
    }

    async fn dispatch(&mut self, mut builder: axum::http::request::Builder, body: Body) -> Response {
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(body).expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| Cookie::parse(value).ok())
        {
            self.cookie = Some(format!("{}={}", cookie.name(), cookie.value()));
        }

        response
    }

    async fn send(&mut self, builder: axum::http::request::Builder, body: Body) -> TestResponse {
        let response = self.dispatch(builder, body).await;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Every `line_id` hidden input value in a rendered cart fragment.
#[must_use]
pub fn line_ids(html: &str) -> Vec<String> {
    const MARKER: &str = r#"name="line_id" value=""#;

    let mut ids: Vec<String> = Vec::new();
    for id in html
        .split(MARKER)
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
    {
        if !ids.iter().any(|known| known == id) {
            ids.push(id.to_string());
        }
    }
    ids
}
