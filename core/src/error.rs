//! Error types for request construction and execution.
//!
//! # Design
//! Two error classes, kept deliberately separate: `BuildError` covers
//! everything this layer itself can get wrong (and is always raised before
//! any network activity), while transport failures belong to the executing
//! client and are carried through as an opaque boxed error — no wrapping,
//! no retry, no recovery.

use std::fmt;

/// Failure reported by an [`HttpClient`](crate::client::HttpClient) during
/// the network round-trip. Boxed so any engine's error type fits unchanged.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure detected while resolving a builder context into a request,
/// before any network I/O.
#[derive(Debug)]
pub enum BuildError {
    /// No host was declared, or the declared host is empty.
    MissingHost,

    /// The assembled URL did not parse (e.g. an invalid host name).
    InvalidUrl(url::ParseError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingHost => write!(f, "host is required but was not set"),
            BuildError::InvalidUrl(e) => write!(f, "assembled URL is invalid: {e}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::MissingHost => None,
            BuildError::InvalidUrl(e) => Some(e),
        }
    }
}

impl From<url::ParseError> for BuildError {
    fn from(e: url::ParseError) -> Self {
        BuildError::InvalidUrl(e)
    }
}

/// Errors returned by [`http_head`](crate::dsl::http_head) and
/// [`http_head_with`](crate::dsl::http_head_with).
#[derive(Debug)]
pub enum Error {
    /// The configuration could not be resolved into a request.
    Build(BuildError),

    /// The network round-trip failed inside the executing client.
    Transport(TransportError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Build(e) => write!(f, "request construction failed: {e}"),
            Error::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Build(e) => Some(e),
            Error::Transport(e) => Some(e.as_ref()),
        }
    }
}

impl From<BuildError> for Error {
    fn from(e: BuildError) -> Self {
        Error::Build(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_host_displays_a_useful_message() {
        let msg = BuildError::MissingHost.to_string();
        assert!(msg.contains("host"), "unexpected message: {msg}");
    }

    #[test]
    fn build_error_converts_into_error() {
        let err: Error = BuildError::MissingHost.into();
        assert!(matches!(err, Error::Build(BuildError::MissingHost)));
    }

    #[test]
    fn transport_error_keeps_the_source() {
        let inner: TransportError =
            Box::new(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"));
        let err = Error::Transport(inner);
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("refused"));
    }
}
