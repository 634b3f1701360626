//! HTMX response helpers.
//!
//! Client-side events are raised through the `HX-Trigger` response header,
//! whose value is a JSON object mapping event names to their detail.

use std::fmt::Write;

use axum::{
    http::HeaderValue,
    response::{IntoResponseParts, ResponseParts},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::services::Toast;

/// Event fired whenever the cart contents change.
pub const CART_UPDATED: &str = "cart-updated";

/// Event carrying a toast to display.
pub const SHOW_TOAST: &str = "show-toast";

/// Builder for the `HX-Trigger` header.
#[derive(Debug, Default, Clone)]
pub struct HxTrigger {
    events: Map<String, Value>,
}

impl HxTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `name` with no detail.
    #[must_use]
    pub fn event(mut self, name: &str) -> Self {
        self.events.insert(name.to_string(), Value::Null);
        self
    }

    /// Fire `name` with a serialized detail payload.
    #[must_use]
    pub fn event_with(mut self, name: &str, detail: &impl Serialize) -> Self {
        match serde_json::to_value(detail) {
            Ok(value) => {
                self.events.insert(name.to_string(), value);
            }
            Err(e) => tracing::warn!(event = name, "Dropping HX-Trigger event: {e}"),
        }
        self
    }

    /// `cart-updated`, plus `show-toast` for the most recent toast.
    #[must_use]
    pub fn cart_updated(toasts: Vec<Toast>) -> Self {
        let trigger = Self::new().event(CART_UPDATED);
        match toasts.last() {
            Some(toast) => trigger.event_with(SHOW_TOAST, toast),
            None => trigger,
        }
    }

    /// The header value, with non-ASCII characters escaped.
    #[must_use]
    pub fn header_value(&self) -> HeaderValue {
        let json = Value::Object(self.events.clone()).to_string();
        HeaderValue::from_str(&escape_non_ascii(&json))
            .unwrap_or_else(|_| HeaderValue::from_static("{}"))
    }
}

impl IntoResponseParts for HxTrigger {
    type Error = std::convert::Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if !self.events.is_empty() {
            res.headers_mut().insert("hx-trigger", self.header_value());
        }
        Ok(res)
    }
}

/// Header values must be visible ASCII; product names like "Solène" are not.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() && !c.is_ascii_control() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_updated_without_toast() {
        let value = HxTrigger::cart_updated(Vec::new()).header_value();
        assert_eq!(value.to_str().unwrap(), r#"{"cart-updated":null}"#);
    }

    #[test]
    fn test_toast_detail_is_escaped() {
        let toast = Toast {
            message: "Solène added to cart".to_string(),
            duration_ms: 3000,
        };
        let value = HxTrigger::cart_updated(vec![toast]).header_value();
        let text = value.to_str().unwrap();
        assert!(text.contains(r"Sol\u00e8ne added to cart"));

        let parsed: Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed[SHOW_TOAST]["message"], "Solène added to cart");
        assert_eq!(parsed[SHOW_TOAST]["duration_ms"], 3000);
    }

    #[test]
    fn test_astral_characters_use_surrogate_pairs() {
        assert_eq!(escape_non_ascii("🌸"), r"\ud83c\udf38");
    }
}
