//! Blocking REST invoker with provider-envelope decoding.
//!
//! # Overview
//! One call per invocation: resolve a [`RequestSpec`] into a wire request
//! (Basic auth from a personal access token, JSON body normalization,
//! content-type defaulting), dispatch it synchronously, and post-process
//! the response — unwrap the provider's `{count, value}` list envelope,
//! flag HTML error pages per item, and stamp caller-chosen type labels
//! onto each produced value.
//!
//! # Design
//! - `RestInvoker` is stateless; all values are built per call.
//! - Preparation and interpretation are separate from dispatch (the
//!   `prepare` / `interpret` split), so everything but the round trip is
//!   testable without a network.
//! - No retries, pooling, or caching: transport failures propagate from
//!   ureq unchanged, and the HTML-page check is the only error this crate
//!   synthesizes — recoverable per item, never fatal to siblings.

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod spec;
pub mod transport;

pub use client::{Item, ItemResult, RestInvoker, DEFAULT_CONTENT_TYPE};
pub use error::InvokeError;
pub use http::{HttpMethod, WireRequest, WireResponse};
pub use spec::{Body, RequestSpec};
