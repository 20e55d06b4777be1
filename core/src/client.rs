//! Request preparation and response interpretation for one REST call.
//!
//! # Design
//! `RestInvoker` is stateless. Each call is split into `prepare`, which
//! resolves a `RequestSpec` into a `WireRequest` without touching the
//! network, and `interpret`, which turns a `WireResponse` into per-item
//! results. `invoke` composes the two around `transport::execute`, so the
//! whole pipeline minus the round trip stays deterministic and unit-testable.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use tracing::debug;

use crate::envelope::{decode_body, looks_like_html, unwrap_envelope};
use crate::error::InvokeError;
use crate::http::{HttpMethod, WireRequest, WireResponse};
use crate::spec::{Body, RequestSpec};
use crate::transport;

/// Content type used when the caller does not resolve one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// One value produced by an invocation.
///
/// `type_labels` is the item's externally visible type identity for
/// downstream formatting and dispatch; it carries no data of its own and
/// never alters `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub value: Value,
    pub type_labels: Vec<String>,
}

/// Per-item outcome: a value, or the recoverable HTML-page error.
pub type ItemResult = Result<Item, InvokeError>;

/// Stateless REST invoker.
///
/// Holds nothing between calls; every invocation builds its values fresh,
/// uses them once, and discards them.
#[derive(Debug, Clone, Default)]
pub struct RestInvoker;

impl RestInvoker {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a `RequestSpec` into the wire request that will be sent.
    ///
    /// Assembles the Authorization header from a credential token,
    /// normalizes the body to text, and applies the method and content-type
    /// defaults. Serializer failures on structured bodies propagate.
    pub fn prepare(&self, spec: &RequestSpec) -> Result<WireRequest, InvokeError> {
        let mut headers = spec.headers.clone();
        if let Some(token) = &spec.credential_token {
            // Replace any caller-supplied Authorization entry rather than
            // sending two; all other headers pass through untouched.
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
            headers.push(("Authorization".to_string(), basic_auth_value(token)));
        }

        let body = match &spec.body {
            Some(Body::Text(text)) => Some(text.clone()),
            Some(Body::Structured(value)) => Some(serde_json::to_string(value)?),
            None => None,
        };

        Ok(WireRequest {
            method: spec.method.unwrap_or(HttpMethod::Get),
            url: spec.url.clone(),
            headers,
            body,
            content_type: spec
                .content_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            proxy: spec.proxy.clone(),
        })
    }

    /// Turn a wire response into per-item results.
    ///
    /// The decoded body is unwrapped from the provider's count/value
    /// envelope first; then each item is sniffed for HTML independently,
    /// so one HTML-looking item never aborts its siblings. Ok items are
    /// stamped with `labels`.
    pub fn interpret(&self, response: &WireResponse, labels: &[String]) -> Vec<ItemResult> {
        let Some(decoded) = decode_body(&response.body) else {
            return Vec::new();
        };

        let items = match unwrap_envelope(decoded) {
            Value::Array(items) => items,
            single => vec![single],
        };

        items
            .into_iter()
            .map(|item| {
                if looks_like_html(&item) {
                    // Full content goes to the diagnostic channel only; the
                    // caller sees just the fixed error message.
                    debug!(body = %response.body, "response item was HTML");
                    Err(InvokeError::HtmlResponse)
                } else {
                    Ok(Item {
                        value: item,
                        type_labels: labels.to_vec(),
                    })
                }
            })
            .collect()
    }

    /// Perform one REST call: prepare, dispatch, interpret.
    ///
    /// Blocks until the response is fully received. Transport failures
    /// (including non-2xx statuses, under ureq's defaults) fail the whole
    /// call; HTML-looking items fail only their own slot in the result.
    pub fn invoke(&self, spec: &RequestSpec) -> Result<Vec<ItemResult>, InvokeError> {
        let wire = self.prepare(spec)?;
        let response = transport::execute(&wire)?;
        let labels = spec.result_type_labels.as_deref().unwrap_or(&[]);
        Ok(self.interpret(&response, labels))
    }
}

/// `Basic` credential for a personal access token: empty username, token
/// as password. The token is opaque text and may itself contain `:`.
fn basic_auth_value(token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!(":{token}")))
}
