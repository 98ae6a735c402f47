//! Declarative builder for synchronous HTTP HEAD requests.
//!
//! # Overview
//! Construct and execute an HTTP HEAD request by setting fields (scheme,
//! host, port, path, query parameters, headers) inside a configuration
//! closure, instead of assembling a URL and request object by hand:
//!
//! ```no_run
//! use headreq_core::http_head;
//!
//! let response = http_head(|ctx| {
//!     ctx.host = Some("example.com".to_string());
//!     ctx.path = "index.html".to_string();
//!     ctx.param(|p| p.add("q", "1"));
//! })?;
//! assert_eq!(response.status, 200);
//! # Ok::<(), headreq_core::Error>(())
//! ```
//!
//! # Design
//! - `RequestContext` collects the declared fields and resolves them into an
//!   `HttpRequest` descriptor; resolution is pure and fails before any I/O
//!   when the configuration is invalid.
//! - All networking is delegated to an `HttpClient` capability. The bundled
//!   `UreqClient` is used by default; transport errors propagate unchanged.
//! - Each invocation builds a fresh context — no state is shared between
//!   calls apart from the process-wide default client.

pub mod client;
pub mod context;
pub mod dsl;
pub mod error;
pub mod http;

pub use client::{HttpClient, UreqClient};
pub use context::{HeaderContext, ParamContext, RequestContext, Scheme};
pub use dsl::{http_head, http_head_with};
pub use error::{BuildError, Error, TransportError};
pub use http::{HttpRequest, HttpResponse, Method};
