//! Wire-level request and response types.
//!
//! # Design
//! These types describe one HTTP exchange as plain data. `RestInvoker`
//! resolves a caller's `RequestSpec` into a `WireRequest` without touching
//! the network, so everything up to dispatch stays deterministic and
//! testable; only `transport::execute` performs I/O.
//!
//! All fields are owned (`String`, `Vec`) so the values can be built,
//! inspected, and discarded per call without lifetime concerns.

/// HTTP verb for an outgoing request.
///
/// Covers the standard verbs plus MERGE, an extension verb some REST
/// providers use for partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Delete,
    Head,
    Merge,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl HttpMethod {
    /// Uppercase rendering as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Merge => "MERGE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// One fully resolved HTTP request described as plain data.
///
/// Produced by `RestInvoker::prepare`: headers already carry the
/// Authorization entry when a credential token was given, the body is
/// already text, and the content type is already defaulted.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Sent with the request only when `body` is present.
    pub content_type: String,
    pub proxy: Option<String>,
}

/// One HTTP response described as plain data.
///
/// Constructed by `transport::execute` after the round trip, then handed
/// to `RestInvoker::interpret`.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
