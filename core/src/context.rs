//! Request builder context and its nested configuration blocks.
//!
//! # Design
//! `RequestContext` is a mutable bag of request attributes. The caller's
//! configuration closure fills it in, then `make_request` resolves it into
//! an [`HttpRequest`] in a single pass: validate host, assemble and parse
//! the URL, attach the query string and headers. Resolution is pure — no
//! I/O happens until the descriptor reaches an
//! [`HttpClient`](crate::client::HttpClient).
//!
//! Parameters and headers live in `Vec<(String, String)>` rather than a map
//! so declaration order survives and duplicate keys become repeated entries,
//! the way repeated query parameters work on the wire.

use url::Url;

use crate::error::BuildError;
use crate::http::{HttpRequest, Method};

/// URL scheme of an outbound request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Mutable request attributes, populated by a configuration closure.
///
/// `host` is the only required field. `port` defaults to the scheme-standard
/// port when unset; `path` may be empty and may carry a leading `/` or not.
#[derive(Debug, Default)]
pub struct RequestContext {
    pub scheme: Scheme,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

/// Nested block collecting query parameters in declaration order.
pub struct ParamContext<'a> {
    pairs: &'a mut Vec<(String, String)>,
}

impl ParamContext<'_> {
    /// Append one `key=value` query entry. Repeated keys are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }
}

/// Nested block collecting request headers in declaration order.
pub struct HeaderContext<'a> {
    pairs: &'a mut Vec<(String, String)>,
}

impl HeaderContext<'_> {
    /// Append one header. Repeated names are kept.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare query parameters through a nested configuration block.
    pub fn param<F>(&mut self, configure: F)
    where
        F: FnOnce(&mut ParamContext),
    {
        configure(&mut ParamContext { pairs: &mut self.params });
    }

    /// Declare headers through a nested configuration block.
    pub fn header<F>(&mut self, configure: F)
    where
        F: FnOnce(&mut HeaderContext),
    {
        configure(&mut HeaderContext { pairs: &mut self.headers });
    }

    /// Append a single query parameter without opening a block.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// Append a single header without opening a block.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Resolve the declared attributes into a request descriptor bound to
    /// `method`.
    ///
    /// Fails with [`BuildError::MissingHost`] when no host was declared and
    /// with [`BuildError::InvalidUrl`] when the assembled
    /// `scheme://host[:port]/path` string does not parse. Either failure
    /// happens before any network activity.
    pub fn make_request(self, method: Method) -> Result<HttpRequest, BuildError> {
        let host = match self.host.as_deref() {
            Some(h) if !h.is_empty() => h,
            _ => return Err(BuildError::MissingHost),
        };

        let mut base = format!("{}://{}", self.scheme.as_str(), host);
        if let Some(port) = self.port {
            base.push(':');
            base.push_str(&port.to_string());
        }
        base.push('/');
        base.push_str(self.path.trim_start_matches('/'));

        // Url::parse validates the authority and drops a scheme-standard
        // port, matching what the engine would put on the wire.
        let mut url = Url::parse(&base)?;

        if !self.params.is_empty() {
            let query = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(HttpRequest {
            method,
            url,
            headers: self.headers,
            body: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(host: &str) -> RequestContext {
        let mut ctx = RequestContext::new();
        ctx.host = Some(host.to_string());
        ctx
    }

    #[test]
    fn resolves_full_url_with_port_path_and_param() {
        let mut ctx = context("example.com");
        ctx.scheme = Scheme::Https;
        ctx.port = Some(8080);
        ctx.path = "a/b".to_string();
        ctx.param(|p| p.add("q", "1"));

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.as_str(), "https://example.com:8080/a/b?q=1");
        assert_eq!(req.method, Method::Head);
        assert!(req.body.is_none());
    }

    #[test]
    fn omitted_port_omits_the_port_segment() {
        let mut ctx = context("example.com");
        ctx.path = "a/b".to_string();

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.as_str(), "http://example.com/a/b");
    }

    #[test]
    fn scheme_standard_port_is_dropped() {
        let mut ctx = context("example.com");
        ctx.scheme = Scheme::Https;
        ctx.port = Some(443);
        ctx.path = "x".to_string();

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.as_str(), "https://example.com/x");
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let ctx = context("example.com");
        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.as_str(), "http://example.com/");
    }

    #[test]
    fn leading_slash_in_path_is_not_doubled() {
        let mut ctx = context("example.com");
        ctx.path = "/a/b".to_string();

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.as_str(), "http://example.com/a/b");
    }

    #[test]
    fn missing_host_fails_construction() {
        let ctx = RequestContext::new();
        let err = ctx.make_request(Method::Head).unwrap_err();
        assert!(matches!(err, BuildError::MissingHost));
    }

    #[test]
    fn empty_host_fails_construction() {
        let ctx = context("");
        let err = ctx.make_request(Method::Head).unwrap_err();
        assert!(matches!(err, BuildError::MissingHost));
    }

    #[test]
    fn malformed_host_fails_construction() {
        let ctx = context("exa mple.com");
        let err = ctx.make_request(Method::Head).unwrap_err();
        assert!(matches!(err, BuildError::InvalidUrl(_)));
    }

    #[test]
    fn params_keep_declaration_order() {
        let mut ctx = context("example.com");
        ctx.param(|p| {
            p.add("a", "1");
            p.add("b", "2");
            p.add("c", "3");
        });

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.query(), Some("a=1&b=2&c=3"));
    }

    #[test]
    fn duplicate_param_keys_are_repeated_not_overwritten() {
        let mut ctx = context("example.com");
        ctx.param(|p| {
            p.add("x", "1");
            p.add("x", "2");
        });

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.query(), Some("x=1&x=2"));
    }

    #[test]
    fn param_keys_and_values_are_percent_encoded() {
        let mut ctx = context("example.com");
        ctx.param(|p| {
            p.add("a key", "hello world");
            p.add("amp", "a&b=c");
        });

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.query(), Some("a%20key=hello%20world&amp=a%26b%3Dc"));
    }

    #[test]
    fn no_params_means_no_query_string() {
        let ctx = context("example.com");
        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(req.url.query(), None);
    }

    #[test]
    fn headers_keep_declaration_order_and_duplicates() {
        let mut ctx = context("example.com");
        ctx.header(|h| {
            h.add("accept", "text/html");
            h.add("x-tag", "one");
            h.add("x-tag", "two");
        });

        let req = ctx.make_request(Method::Head).unwrap();
        assert_eq!(
            req.headers,
            vec![
                ("accept".to_string(), "text/html".to_string()),
                ("x-tag".to_string(), "one".to_string()),
                ("x-tag".to_string(), "two".to_string()),
            ]
        );
    }

    #[test]
    fn block_and_direct_declaration_are_equivalent() {
        let mut via_block = context("example.com");
        via_block.param(|p| p.add("q", "1"));
        via_block.header(|h| h.add("accept", "*/*"));

        let mut direct = context("example.com");
        direct.add_param("q", "1");
        direct.add_header("accept", "*/*");

        let a = via_block.make_request(Method::Head).unwrap();
        let b = direct.make_request(Method::Head).unwrap();
        assert_eq!(a.url, b.url);
        assert_eq!(a.headers, b.headers);
    }

    #[test]
    fn descriptor_can_bind_other_methods() {
        let ctx = context("example.com");
        let req = ctx.make_request(Method::Get).unwrap();
        assert_eq!(req.method, Method::Get);
    }
}
