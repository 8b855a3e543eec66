//! Request senders

use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::sync::Arc;

/// Something that can put one HTTP request on the wire and hand back the response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the response, or the failure of the exchange
    async fn send(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request).await
    }
}

/// Transport backed by a plain `reqwest::Client`
///
/// Timeouts, TLS and connection pooling are whatever the client was built
/// with; nothing is added here.
#[derive(Debug, Clone, Default)]
pub struct DefaultTransport {
    client: Client,
}

impl DefaultTransport {
    /// Create a transport with a default `reqwest::Client`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for DefaultTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        Ok(self.client.execute(request).await?)
    }
}
