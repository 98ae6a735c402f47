//! The HTTP client capability and its ureq-backed default implementation.
//!
//! # Design
//! [`HttpClient`] is the seam between request construction and the network:
//! anything that can turn an [`HttpRequest`] into an [`HttpResponse`] fits,
//! which keeps the builder testable without sockets. [`UreqClient`] is the
//! bundled implementation; connection handling, TLS, redirects and timeouts
//! are all ureq's business, not this crate's.

use std::sync::OnceLock;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Method};

/// Capability that performs the network round-trip for a resolved request.
///
/// Implementations report transport failures (connection refused, timeout,
/// TLS) through `Err`; a non-2xx status is a successful round-trip and must
/// come back as an `Ok` response.
pub trait HttpClient {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default client capability, wrapping a [`ureq::Agent`].
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses are returned as data rather than `Err` — status interpretation
/// belongs to the caller, not the transport.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Process-wide default instance, shared by [`http_head`](crate::dsl::http_head).
    pub fn shared() -> &'static UreqClient {
        static SHARED: OnceLock<UreqClient> = OnceLock::new();
        SHARED.get_or_init(UreqClient::new)
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let headers = &request.headers;

        let mut response = match (request.method, &request.body) {
            (Method::Head, _) => with_headers(self.agent.head(url), headers).call(),
            (Method::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (Method::Delete, _) => with_headers(self.agent.delete(url), headers).call(),
            (Method::Post, Some(body)) => {
                with_headers(self.agent.post(url), headers).send(body.as_bytes())
            }
            (Method::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (Method::Put, Some(body)) => {
                with_headers(self.agent.put(url), headers).send(body.as_bytes())
            }
            (Method::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
            (Method::Patch, Some(body)) => {
                with_headers(self.agent.patch(url), headers).send(body.as_bytes())
            }
            (Method::Patch, None) => with_headers(self.agent.patch(url), headers).send_empty(),
        }
        .map_err(|e| Box::new(e) as TransportError)?;

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
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Box::new(e) as TransportError)?;

        Ok(HttpResponse { status, headers, body })
    }
}

/// Attach declared headers to a ureq request builder, order preserved.
fn with_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
