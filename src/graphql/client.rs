//! GraphQL client over a pluggable transport

use super::options::RequestOptions;
use crate::error::{Error, Result};
use crate::transport::Transport;
use bytes::Bytes;
use graphql_client::{GraphQLQuery, Response as GraphqlResponse};
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Request, StatusCode};
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::debug;
use url::Url;

/// Wire body of a GraphQL-over-HTTP POST
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a, V: ?Sized> {
    query: &'a str,
    variables: &'a V,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
}

/// GraphQL client bound to one endpoint
#[derive(Debug, Clone)]
pub struct GraphqlClient<T> {
    endpoint: Url,
    transport: T,
}

impl<T: Transport> GraphqlClient<T> {
    /// Create a client that sends everything through `transport`
    pub fn new(endpoint: Url, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// The GraphQL endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The transport every request goes through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a typed operation and decode its data.
    ///
    /// GraphQL errors in the response come back as `Error::Graphql`.
    pub async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        options: &RequestOptions,
    ) -> Result<Q::ResponseData> {
        let payload = {
            let body = Q::build_query(variables);
            let operation_name = options
                .operation_name
                .as_deref()
                .unwrap_or(body.operation_name);
            encode(body.query, &body.variables, Some(operation_name))?
        };

        let bytes = self.post(payload, options).await?;
        let response: GraphqlResponse<Q::ResponseData> = serde_json::from_slice(&bytes)?;
        into_data(response)
    }

    /// Execute literal query text and return the `data` member undecoded
    pub async fn exec_raw<V>(
        &self,
        query: &str,
        variables: &V,
        options: &RequestOptions,
    ) -> Result<Vec<u8>>
    where
        V: Serialize + Sync + ?Sized,
    {
        let payload = encode(query, variables, options.operation_name.as_deref())?;

        let bytes = self.post(payload, options).await?;
        let response: GraphqlResponse<Box<RawValue>> = serde_json::from_slice(&bytes)?;
        Ok(into_data(response)?.get().as_bytes().to_vec())
    }

    async fn post(&self, payload: Vec<u8>, options: &RequestOptions) -> Result<Bytes> {
        let mut request = Request::new(Method::POST, self.endpoint.clone());

        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (key, value) in &options.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| Error::invalid_header(key))?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::invalid_header(key))?;
            headers.insert(name, value);
        }

        *request.timeout_mut() = options.timeout;
        *request.body_mut() = Some(payload.into());

        let response = self.transport.send(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            return Err(Error::http_status(
                status.as_u16(),
                String::from_utf8_lossy(&body),
            ));
        }

        debug!("GraphQL request succeeded: {}", self.endpoint);
        Ok(body)
    }
}

fn encode<V: Serialize + ?Sized>(
    query: &str,
    variables: &V,
    operation_name: Option<&str>,
) -> Result<Vec<u8>> {
    let body = RequestBody {
        query,
        variables,
        operation_name,
    };
    Ok(serde_json::to_vec(&body)?)
}

fn into_data<D>(response: GraphqlResponse<D>) -> Result<D> {
    if let Some(errors) = response.errors {
        if !errors.is_empty() {
            return Err(Error::Graphql(errors));
        }
    }
    response.data.ok_or(Error::MissingData)
}
