//! Top-level entry points: configure, resolve, execute.

use crate::client::{HttpClient, UreqClient};
use crate::context::RequestContext;
use crate::error::Error;
use crate::http::{HttpResponse, Method};

/// Build and synchronously execute an HTTP HEAD request on the shared
/// default client.
///
/// The closure populates a fresh [`RequestContext`]; the resolved request is
/// then executed and the response returned as-is. Blocks the calling thread
/// until the round-trip completes or the client's own error policy triggers.
/// Construction failures (e.g. a missing host) surface before any network
/// activity.
///
/// ```no_run
/// use headreq_core::http_head;
///
/// let response = http_head(|ctx| {
///     ctx.host = Some("example.com".to_string());
///     ctx.path = "path/to/resource".to_string();
///     ctx.param(|p| p.add("q", "1"));
///     ctx.header(|h| h.add("accept", "*/*"));
/// })?;
/// # Ok::<(), headreq_core::Error>(())
/// ```
pub fn http_head<F>(configure: F) -> Result<HttpResponse, Error>
where
    F: FnOnce(&mut RequestContext),
{
    http_head_with(UreqClient::shared(), configure)
}

/// Like [`http_head`], but executes on the given client capability.
pub fn http_head_with<C, F>(client: &C, configure: F) -> Result<HttpResponse, Error>
where
    C: HttpClient + ?Sized,
    F: FnOnce(&mut RequestContext),
{
    let mut context = RequestContext::new();
    configure(&mut context);
    let request = context.make_request(Method::Head)?;
    client.execute(&request).map_err(Error::Transport)
}
