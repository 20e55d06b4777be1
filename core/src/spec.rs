//! Caller-facing request description.
//!
//! # Design
//! `RequestSpec` replaces the "bag of parameters splatted into an inner
//! call" shape such helpers usually grow: every knob the invoker honors is
//! an explicit typed field, and `RestInvoker::prepare` is the one mapping
//! from this type onto the wire. Only `url` is required; everything else
//! defaults off.

use serde_json::Value;

use crate::http::HttpMethod;

/// Request payload, either raw text or a structured value.
///
/// Text bodies are sent byte-for-byte; structured bodies are serialized to
/// JSON during preparation.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Structured(Value),
}

/// Everything a caller can say about one REST call.
///
/// Built with [`RequestSpec::new`] and filled in field by field; all
/// values live for a single `invoke` and are not shared or reused.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Absolute target URL. The only required field.
    pub url: String,
    /// Verb for the request; GET when omitted.
    pub method: Option<HttpMethod>,
    pub body: Option<Body>,
    /// Content type for the request body; `"application/json"` when omitted.
    pub content_type: Option<String>,
    /// Extra request headers. An Authorization entry here is replaced when
    /// `credential_token` is also set.
    pub headers: Vec<(String, String)>,
    /// Personal access token sent as HTTP Basic auth with an empty username.
    /// Treated as opaque text; it may itself contain `:`.
    pub credential_token: Option<String>,
    /// Proxy URI for this call only.
    pub proxy: Option<String>,
    /// Type labels stamped onto every produced item, replacing whatever
    /// identity the item would otherwise report. Purely a display/dispatch
    /// tag; never touches the item's data.
    pub result_type_labels: Option<Vec<String>>,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
            body: None,
            content_type: None,
            headers: Vec::new(),
            credential_token: None,
            proxy: None,
            result_type_labels: None,
        }
    }
}
