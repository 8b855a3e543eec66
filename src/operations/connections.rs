//! Connection management: add, remove, test and update credentials

use super::diagnostics::ValidationResult;
use super::warehouse::WarehouseRef;
use crate::types::JsonValue;
use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

// ============================================================================
// testBqCredentialsV2
// ============================================================================

/// Validate BigQuery service account credentials and stage them under a key
pub struct TestBqCredentialsV2;

const TEST_BQ_CREDENTIALS_V2: &str = r"mutation testBqCredentialsV2($validationName: String!, $connectionDetails: BqConnectionDetails!) {
  testBqCredentialsV2(validationName: $validationName, connectionDetails: $connectionDetails) {
    key
    validationResult {
      success
      warnings { cause friendlyMessage resolution }
      errors { cause friendlyMessage resolution }
    }
  }
}";

/// BigQuery connection details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BqConnectionDetails {
    /// Base64 encoded service account key file
    pub service_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestBqCredentialsV2Variables {
    /// Which validation to run, e.g. `validate_cred_permissions`
    pub validation_name: String,
    pub connection_details: BqConnectionDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBqCredentialsV2Data {
    #[serde(rename = "testBqCredentialsV2")]
    pub test_bq_credentials_v2: TestCredentialsPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCredentialsPayload {
    /// Key of the staged credentials, used by `addConnection` and `updateCredentials`
    #[serde(default)]
    pub key: String,
    pub validation_result: ValidationResult,
}

impl GraphQLQuery for TestBqCredentialsV2 {
    type Variables = TestBqCredentialsV2Variables;
    type ResponseData = TestBqCredentialsV2Data;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: TEST_BQ_CREDENTIALS_V2,
            operation_name: "testBqCredentialsV2",
        }
    }
}

// ============================================================================
// addConnection
// ============================================================================

/// Attach staged credentials to a warehouse as a new connection
pub struct AddConnection;

const ADD_CONNECTION: &str = r"mutation addConnection($dcId: UUID, $dwId: UUID, $key: String!, $jobTypes: [String], $name: String, $connectionType: String!, $createWarehouseType: String) {
  addConnection(dcId: $dcId, dwId: $dwId, key: $key, jobTypes: $jobTypes, name: $name, connectionType: $connectionType, createWarehouseType: $createWarehouseType) {
    connection {
      uuid
      warehouse { name uuid }
    }
  }
}";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConnectionVariables {
    /// Data collector to attach to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc_id: Option<String>,
    /// Existing warehouse; omit to create one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dw_id: Option<String>,
    /// Key returned by a credential test
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub connection_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_warehouse_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConnectionData {
    pub add_connection: ConnectionPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPayload {
    pub connection: AddedConnection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedConnection {
    pub uuid: String,
    pub warehouse: WarehouseRef,
}

impl GraphQLQuery for AddConnection {
    type Variables = AddConnectionVariables;
    type ResponseData = AddConnectionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: ADD_CONNECTION,
            operation_name: "addConnection",
        }
    }
}

// ============================================================================
// removeConnection
// ============================================================================

/// Remove a connection from its warehouse
pub struct RemoveConnection;

const REMOVE_CONNECTION: &str = r"mutation removeConnection($connectionId: UUID!) {
  removeConnection(connectionId: $connectionId) {
    success
  }
}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveConnectionVariables {
    pub connection_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveConnectionData {
    pub remove_connection: SuccessPayload,
}

/// Bare `{ success }` selection shared by several mutations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessPayload {
    pub success: bool,
}

impl GraphQLQuery for RemoveConnection {
    type Variables = RemoveConnectionVariables;
    type ResponseData = RemoveConnectionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: REMOVE_CONNECTION,
            operation_name: "removeConnection",
        }
    }
}

// ============================================================================
// updateCredentials
// ============================================================================

/// Patch or replace the credentials of an existing connection
pub struct UpdateCredentials;

const UPDATE_CREDENTIALS: &str = r"mutation updateCredentials($changes: GenericScalar!, $connectionId: UUID!, $shouldReplace: Boolean, $shouldValidate: Boolean) {
  updateCredentials(changes: $changes, connectionId: $connectionId, shouldReplace: $shouldReplace, shouldValidate: $shouldValidate) {
    success
  }
}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialsVariables {
    /// Credential fields to change, as a JSON object
    pub changes: JsonValue,
    pub connection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_replace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_validate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialsData {
    pub update_credentials: SuccessPayload,
}

impl GraphQLQuery for UpdateCredentials {
    type Variables = UpdateCredentialsVariables;
    type ResponseData = UpdateCredentialsData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: UPDATE_CREDENTIALS,
            operation_name: "updateCredentials",
        }
    }
}
