//! Blocking HTTP executor for `WireRequest` values.
//!
//! # Design
//! One fresh ureq agent per call: the invoker's values are per-call and a
//! proxy, when given, applies to this request only, so there is nothing to
//! share between invocations. ureq's default status-as-error behavior is
//! left on — non-2xx responses surface as `InvokeError::Transport`, exactly
//! as the underlying client reports them.

use ureq::http::{Method, Request};

use crate::error::InvokeError;
use crate::http::{WireRequest, WireResponse};

/// Execute one wire request and read the response body to completion.
///
/// Blocks the calling thread until the remote response is fully received.
/// The content type is attached only when a body is sent; extension verbs
/// such as MERGE go through `http::Method::from_bytes`.
pub fn execute(request: &WireRequest) -> Result<WireResponse, InvokeError> {
    // Extension verbs like MERGE are rejected by ureq over HTTP/1.1
    // unless the agent opts in.
    let mut config = ureq::Agent::config_builder().allow_non_standard_methods(true);
    if let Some(proxy) = &request.proxy {
        let proxy = ureq::Proxy::new(proxy).map_err(InvokeError::InvalidProxy)?;
        config = config.proxy(Some(proxy));
    }
    let agent = config.build().new_agent();

    let method = Method::from_bytes(request.method.as_str().as_bytes())
        .map_err(ureq::http::Error::from)?;

    let mut builder = Request::builder().method(method).uri(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = match &request.body {
        Some(body) => {
            builder = builder.header("Content-Type", request.content_type.as_str());
            agent.run(builder.body(body.clone())?)?
        }
        None => agent.run(builder.body(())?)?,
    };

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string()?;

    Ok(WireResponse {
        status,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn malformed_proxy_is_an_assembly_error() {
        let request = WireRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1/projects".to_string(),
            headers: Vec::new(),
            body: None,
            content_type: "application/json".to_string(),
            proxy: Some("not a proxy uri".to_string()),
        };
        // Fails while assembling the agent, before any connection attempt.
        let err = execute(&request).unwrap_err();
        assert!(matches!(err, InvokeError::InvalidProxy(_)));
    }
}
