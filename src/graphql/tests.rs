//! Tests for the GraphQL client

use super::*;
use crate::error::Error;
use crate::transport::DefaultTransport;
use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Ping;

#[derive(Debug, Serialize)]
struct PingVariables {
    name: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct PingData {
    ping: String,
}

impl GraphQLQuery for Ping {
    type Variables = PingVariables;
    type ResponseData = PingData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: "query ping($name: String!) { ping(name: $name) }",
            operation_name: "ping",
        }
    }
}

fn client_for(server: &MockServer) -> GraphqlClient<DefaultTransport> {
    let endpoint = Url::parse(&format!("{}/graphql", server.uri())).unwrap();
    GraphqlClient::new(endpoint, DefaultTransport::new())
}

fn variables(name: &str) -> PingVariables {
    PingVariables {
        name: name.to_string(),
    }
}

#[test]
fn test_request_options_builder() {
    let options = RequestOptions::new()
        .operation_name("renamed")
        .timeout(Duration::from_secs(10))
        .header("X-Request-Id", "abc123");

    assert_eq!(options.operation_name.as_deref(), Some("renamed"));
    assert_eq!(options.timeout, Some(Duration::from_secs(10)));
    assert_eq!(
        options.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
}

#[tokio::test]
async fn test_execute_typed_operation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "query": "query ping($name: String!) { ping(name: $name) }",
            "operationName": "ping",
            "variables": {"name": "monte"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"ping": "pong monte"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server)
        .execute::<Ping>(variables("monte"), &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(
        data,
        PingData {
            ping: "pong monte".to_string()
        }
    );
}

#[tokio::test]
async fn test_execute_operation_name_override() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "healthCheck"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"ping": "pong"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new().operation_name("healthCheck");
    let data = client_for(&server)
        .execute::<Ping>(variables("x"), &options)
        .await
        .unwrap();

    assert_eq!(data.ping, "pong");
}

#[tokio::test]
async fn test_execute_sends_extra_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-request-id", "req-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"ping": "pong"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new().header("X-Request-Id", "req-456");
    let result = client_for(&server).execute::<Ping>(variables("x"), &options).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_execute_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                {"message": "Not authorized", "path": ["ping"]}
            ]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute::<Ping>(variables("x"), &RequestOptions::default())
        .await
        .unwrap_err();

    let errors = err.graphql_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Not authorized");
}

#[tokio::test]
async fn test_execute_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute::<Ping>(variables("x"), &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingData));
}

#[tokio::test]
async fn test_execute_non_200_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute::<Ping>(variables("x"), &RequestOptions::default())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid token");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute::<Ping>(variables("x"), &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_caller_timeout_applies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"ping": "late"}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let options = RequestOptions::new().timeout(Duration::from_millis(100));
    let err = client_for(&server)
        .execute::<Ping>(variables("x"), &options)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_exec_raw_returns_data_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "query": "{ ping(name: \"raw\") }",
            "variables": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data": {"ping": "pong raw"}, "extensions": {"cost": 1}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .exec_raw(
            "{ ping(name: \"raw\") }",
            &serde_json::Map::new(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(raw, br#"{"ping": "pong raw"}"#.to_vec());
    let decoded: PingData = serde_json::from_slice(&raw).unwrap();
    assert_eq!(decoded.ping, "pong raw");
}

#[tokio::test]
async fn test_exec_raw_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Cannot query field \"nope\""}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .exec_raw("{ nope }", &json!({}), &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Cannot query field"));
}

#[tokio::test]
async fn test_invalid_extra_header_rejected() {
    let server = MockServer::start().await;

    let options = RequestOptions::new().header("bad header", "value");
    let err = client_for(&server)
        .execute::<Ping>(variables("x"), &options)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidHeaderValue { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
