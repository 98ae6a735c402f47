//! HTTP request and response data types.
//!
//! # Design
//! `HttpRequest` is a plain-data descriptor produced by
//! [`RequestContext::make_request`](crate::context::RequestContext::make_request)
//! and consumed by an [`HttpClient`](crate::client::HttpClient). The response
//! is equally plain data: this layer never inspects or transforms it, it is
//! handed back to the caller exactly as the client capability produced it.

use url::Url;

/// HTTP method a request descriptor is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Canonical uppercase token, as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// A fully-resolved outbound request.
///
/// Headers keep declaration order, including repeated names. `body` is
/// `None` for HEAD requests; the field exists so the descriptor shape covers
/// body-carrying methods too.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executing [`HttpClient`](crate::client::HttpClient)
/// after the network round-trip. Status interpretation is the caller's
/// business — a 404 here is a successful round-trip, not an error.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_tokens_are_uppercase() {
        assert_eq!(Method::Head.as_str(), "HEAD");
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
        assert_eq!(Method::Patch.as_str(), "PATCH");
    }
}
