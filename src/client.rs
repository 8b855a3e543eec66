//! Monte Carlo API client
//!
//! [`MonteCarloClient`] owns one GraphQL client, which owns one
//! [`AuthTransport`]. Every call goes out with the same API key pair and is
//! dumped at debug level under the span given at construction.
//!
//! ```rust,ignore
//! use montecarlo_client::MonteCarloClient;
//! use montecarlo_client::operations::{GetWarehouse, GetWarehouseVariables};
//!
//! let span = tracing::info_span!("montecarlo");
//! let client = MonteCarloClient::new(span, "key-id", "key-token")?;
//! let data = client
//!     .query::<GetWarehouse>(GetWarehouseVariables { dw_id: "…".into() }, &Default::default())
//!     .await?;
//! ```

use crate::config::{ClientConfig, DEFAULT_ENDPOINT};
use crate::error::Result;
use crate::graphql::{GraphqlClient, RequestOptions};
use crate::operations::{
    AddConnection, AddConnectionVariables, ConnectionPayload, GetWarehouse,
    GetWarehouseVariables, RemoveConnection, RemoveConnectionVariables, SetWarehouseName,
    SetWarehouseNameVariables, TestBqCredentialsV2, TestBqCredentialsV2Variables,
    TestCredentialsPayload, UpdateCredentials, UpdateCredentialsVariables, Warehouse,
    WarehouseRef,
};
use crate::transport::{AuthTransport, Credentials, DefaultTransport, Transport};
use graphql_client::GraphQLQuery;
use reqwest::Client;
use serde::Serialize;
use tracing::Span;
use url::Url;

/// Authenticated client for the Monte Carlo GraphQL API
#[derive(Debug)]
pub struct MonteCarloClient<T = DefaultTransport> {
    graphql: GraphqlClient<AuthTransport<T>>,
}

impl MonteCarloClient<DefaultTransport> {
    /// Create a client for the public endpoint.
    ///
    /// Nothing is sent until the first call; the credentials are not checked.
    pub fn new(
        span: Span,
        api_key_id: impl Into<String>,
        api_key_token: impl Into<String>,
    ) -> Result<Self> {
        let config = ClientConfig::builder()
            .endpoint(DEFAULT_ENDPOINT)
            .credentials(api_key_id, api_key_token)
            .build();
        Self::from_config(&config, span)
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig, span: Span) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self::with_transport(
            config.endpoint_url()?,
            config.credentials(),
            span,
            DefaultTransport::with_client(http),
        ))
    }
}

impl<T: Transport> MonteCarloClient<T> {
    /// Create a client that authenticates on top of a custom transport
    pub fn with_transport(endpoint: Url, credentials: Credentials, span: Span, inner: T) -> Self {
        let transport = AuthTransport::new(credentials, span, inner);
        Self {
            graphql: GraphqlClient::new(endpoint, transport),
        }
    }

    /// The GraphQL endpoint
    pub fn endpoint(&self) -> &Url {
        self.graphql.endpoint()
    }

    /// The authenticating transport
    pub fn transport(&self) -> &AuthTransport<T> {
        self.graphql.transport()
    }

    /// Run a mutation.
    ///
    /// Same as [`query`](Self::query): the operation kind comes from `Q`'s document.
    pub async fn mutate<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        options: &RequestOptions,
    ) -> Result<Q::ResponseData> {
        self.graphql.execute::<Q>(variables, options).await
    }

    /// Run a query.
    ///
    /// Same as [`mutate`](Self::mutate): the operation kind comes from `Q`'s document.
    pub async fn query<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        options: &RequestOptions,
    ) -> Result<Q::ResponseData> {
        self.graphql.execute::<Q>(variables, options).await
    }

    /// Run literal query text and return the undecoded `data` JSON
    pub async fn exec_raw<V>(
        &self,
        query: &str,
        variables: &V,
        options: &RequestOptions,
    ) -> Result<Vec<u8>>
    where
        V: Serialize + Sync + ?Sized,
    {
        self.graphql.exec_raw(query, variables, options).await
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Validate BigQuery credentials. A failed validation is still `Ok`.
    pub async fn test_bq_credentials(
        &self,
        variables: TestBqCredentialsV2Variables,
    ) -> Result<TestCredentialsPayload> {
        let data = self
            .mutate::<TestBqCredentialsV2>(variables, &RequestOptions::default())
            .await?;
        Ok(data.test_bq_credentials_v2)
    }

    /// Add a connection using staged credentials
    pub async fn add_connection(&self, variables: AddConnectionVariables) -> Result<ConnectionPayload> {
        let data = self
            .mutate::<AddConnection>(variables, &RequestOptions::default())
            .await?;
        Ok(data.add_connection)
    }

    /// Fetch a warehouse, `None` if it does not exist
    pub async fn get_warehouse(&self, dw_id: impl Into<String>) -> Result<Option<Warehouse>> {
        let variables = GetWarehouseVariables { dw_id: dw_id.into() };
        let data = self
            .query::<GetWarehouse>(variables, &RequestOptions::default())
            .await?;
        Ok(data.get_warehouse)
    }

    /// Remove a connection
    pub async fn remove_connection(&self, connection_id: impl Into<String>) -> Result<bool> {
        let variables = RemoveConnectionVariables {
            connection_id: connection_id.into(),
        };
        let data = self
            .mutate::<RemoveConnection>(variables, &RequestOptions::default())
            .await?;
        Ok(data.remove_connection.success)
    }

    /// Rename a warehouse
    pub async fn set_warehouse_name(
        &self,
        dw_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<WarehouseRef> {
        let variables = SetWarehouseNameVariables {
            dw_id: dw_id.into(),
            name: name.into(),
        };
        let data = self
            .mutate::<SetWarehouseName>(variables, &RequestOptions::default())
            .await?;
        Ok(data.set_warehouse_name.warehouse)
    }

    /// Update the credentials of a connection
    pub async fn update_credentials(&self, variables: UpdateCredentialsVariables) -> Result<bool> {
        let data = self
            .mutate::<UpdateCredentials>(variables, &RequestOptions::default())
            .await?;
        Ok(data.update_credentials.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_public_endpoint() {
        let client = MonteCarloClient::new(Span::none(), "id-123", "tok-456").unwrap();
        assert_eq!(client.endpoint().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(client.transport().credentials().api_key_id(), "id-123");
        assert_eq!(client.transport().credentials().api_key_token(), "tok-456");
    }

    #[test]
    fn test_new_accepts_empty_credentials() {
        let client = MonteCarloClient::new(Span::none(), "", "").unwrap();
        assert_eq!(client.transport().credentials(), &Credentials::new("", ""));
    }

    #[test]
    fn test_from_config_rejects_bad_endpoint() {
        let config = ClientConfig::builder()
            .endpoint("::not-a-url")
            .credentials("id", "token")
            .build();
        assert!(MonteCarloClient::from_config(&config, Span::none()).is_err());
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MonteCarloClient>();
    }

    #[test]
    fn test_debug_hides_token() {
        let client = MonteCarloClient::new(Span::none(), "id-123", "tok-456").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("tok-456"));
    }
}
