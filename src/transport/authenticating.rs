//! Header-injecting, exchange-logging transport decorator

use super::capture::{dump_request, dump_response};
use super::credentials::Credentials;
use super::sender::{DefaultTransport, Transport};
use crate::error::Result;
use async_trait::async_trait;
use bytes::BytesMut;
use futures::stream;
use reqwest::{Body, Request, Response};
use std::fmt;
use tracing::{debug, trace, Span};

/// Transport that authenticates every request with a fixed API key pair.
///
/// For each request it:
/// 1. renders the request as it was handed in (before the credentials go on),
/// 2. sets `x-mcd-id` / `x-mcd-token`, overwriting whatever was there,
/// 3. forwards to the inner transport,
/// 4. renders the response, if there is one,
/// 5. logs both renderings as one debug event under the held span,
/// 6. returns the inner result as-is.
///
/// Capturing is best-effort and never fails the call. A request body that
/// cannot be rendered is logged as an empty capture; a response body that
/// breaks while being read is logged as far as it got.
pub struct AuthTransport<T = DefaultTransport> {
    credentials: Credentials,
    span: Span,
    inner: T,
}

impl AuthTransport<DefaultTransport> {
    /// Wrap a default `reqwest::Client` transport
    pub fn with_default(credentials: Credentials, span: Span) -> Self {
        Self::new(credentials, span, DefaultTransport::new())
    }
}

impl<T: Transport> AuthTransport<T> {
    /// Create a transport that logs under `span` and delegates to `inner`
    pub fn new(credentials: Credentials, span: Span, inner: T) -> Self {
        Self {
            credentials,
            span,
            inner,
        }
    }

    /// Credentials applied to every request
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Logging context the exchange dumps are attached to
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthTransport<T> {
    async fn send(&self, mut request: Request) -> Result<Response> {
        let mut capture = dump_request(&request).unwrap_or_else(|| {
            trace!(parent: &self.span, url = %request.url(), "request body is a stream, not captured");
            Vec::new()
        });

        self.credentials.apply(request.headers_mut())?;

        let result = match self.inner.send(request).await {
            Ok(response) => Ok(buffer_response(response, &mut capture).await),
            Err(e) => Err(e),
        };

        debug!(parent: &self.span, "{}", String::from_utf8_lossy(&capture));
        result
    }
}

/// Read the body so it can be logged, then hand back an equivalent response.
///
/// A body that fails partway is not an error here: the bytes read so far are
/// logged, and the caller gets them back followed by the same read error.
async fn buffer_response(mut response: Response, capture: &mut Vec<u8>) -> Response {
    let status = response.status();
    let version = response.version();
    let headers = response.headers().clone();

    let mut body = BytesMut::new();
    let mut failure = None;
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    let body = body.freeze();

    capture.extend(dump_response(status, version, &headers, &body));

    let body = match failure {
        None => Body::from(body),
        Some(e) => Body::wrap_stream(stream::iter([Ok(body), Err(e)])),
    };

    let mut rebuilt = http::Response::new(body);
    *rebuilt.status_mut() = status;
    *rebuilt.version_mut() = version;
    *rebuilt.headers_mut() = headers;
    Response::from(rebuilt)
}

impl<T: fmt::Debug> fmt::Debug for AuthTransport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTransport")
            .field("credentials", &self.credentials)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
