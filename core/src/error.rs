//! Error types for the REST invoker.
//!
//! # Design
//! `HtmlResponse` gets a dedicated variant because it is the one failure
//! this crate synthesizes itself, and it is recoverable per item: a batched
//! response can yield a mix of values and `HtmlResponse` errors. Everything
//! else wraps a failure from an underlying layer and propagates unchanged —
//! no retries and no translation.

use thiserror::Error;

/// Errors produced by `RestInvoker`.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Transport failure from the HTTP client: DNS, TLS, connection
    /// refused, or a non-2xx status under ureq's default behavior.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The wire request could not be assembled — malformed URL, header
    /// name/value, or method.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ureq::http::Error),

    /// The proxy URI could not be parsed. An assembly failure like
    /// `InvalidRequest`, reported before any connection is attempted.
    #[error("invalid proxy: {0}")]
    InvalidProxy(#[source] ureq::Error),

    /// The structured request body could not be serialized to JSON.
    #[error("body serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A response item looked like an HTML error page rather than data.
    /// The raw body is written to the diagnostic channel at debug level;
    /// only this fixed message reaches the caller.
    #[error("Response was HTML, Request Failed. Use -Verbose to see the full response")]
    HtmlResponse,
}
