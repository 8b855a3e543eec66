//! Warehouse reads and renames

use super::null_as_default;
use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

/// Warehouse identity as returned inside mutation payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRef {
    pub uuid: String,
    pub name: String,
}

// ============================================================================
// getWarehouse
// ============================================================================

/// Fetch a warehouse and its connections
pub struct GetWarehouse;

const GET_WAREHOUSE: &str = r"query getWarehouse($dwId: UUID) {
  getWarehouse(uuid: $dwId) {
    name
    connections { uuid type }
  }
}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWarehouseVariables {
    pub dw_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWarehouseData {
    /// `None` when no warehouse has the requested id
    pub get_warehouse: Option<Warehouse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connections: Vec<WarehouseConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConnection {
    pub uuid: String,
    #[serde(rename = "type")]
    pub connection_type: String,
}

impl GraphQLQuery for GetWarehouse {
    type Variables = GetWarehouseVariables;
    type ResponseData = GetWarehouseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_WAREHOUSE,
            operation_name: "getWarehouse",
        }
    }
}

// ============================================================================
// setWarehouseName
// ============================================================================

/// Rename a warehouse
pub struct SetWarehouseName;

const SET_WAREHOUSE_NAME: &str = r"mutation setWarehouseName($dwId: UUID!, $name: String!) {
  setWarehouseName(dwId: $dwId, name: $name) {
    warehouse { uuid name }
  }
}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWarehouseNameVariables {
    pub dw_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWarehouseNameData {
    pub set_warehouse_name: WarehousePayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehousePayload {
    pub warehouse: WarehouseRef,
}

impl GraphQLQuery for SetWarehouseName {
    type Variables = SetWarehouseNameVariables;
    type ResponseData = SetWarehouseNameData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: SET_WAREHOUSE_NAME,
            operation_name: "setWarehouseName",
        }
    }
}
