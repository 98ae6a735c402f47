//! Echo server used by the core integration tests.
//!
//! # Design
//! HEAD responses carry no body, so the server reflects everything a test
//! needs to assert on into response headers: the received method, path and
//! query string come back as `x-echo-method`, `x-echo-path` and
//! `x-echo-query`, and every `x-`-prefixed request header comes back with an
//! `x-echo-` prefix. A `/status/{code}` route returns an arbitrary status so
//! tests can check that non-2xx responses pass through as data.

use axum::{
    extract::Path,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::any,
    Router,
};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new()
        .route("/status/{code}", any(status))
        .fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    let mut reply = HeaderMap::new();
    reply.insert("x-echo-method", header_value(method.as_str()));
    reply.insert("x-echo-path", header_value(uri.path()));
    if let Some(query) = uri.query() {
        reply.insert("x-echo-query", header_value(query));
    }

    for (name, value) in &headers {
        if let Some(rest) = name.as_str().strip_prefix("x-") {
            if let Ok(echoed) = HeaderName::try_from(format!("x-echo-{rest}")) {
                reply.append(echoed, value.clone());
            }
        }
    }

    (StatusCode::OK, reply)
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

fn header_value(s: &str) -> HeaderValue {
    HeaderValue::from_str(s).unwrap_or_else(|_| HeaderValue::from_static("unrepresentable"))
}
