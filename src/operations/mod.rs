//! Typed Monte Carlo operations
//!
//! Each operation is a unit struct implementing `graphql_client::GraphQLQuery`
//! with a hand-written document. Variable structs serialize to the argument
//! names the API expects; response structs mirror the selection set.
//!
//! Connection management lives in [`connections`], warehouse reads and
//! renames in [`warehouse`].

mod connections;
mod diagnostics;
mod warehouse;

pub use connections::{
    AddConnection, AddConnectionData, AddConnectionVariables, AddedConnection,
    BqConnectionDetails, ConnectionPayload, RemoveConnection, RemoveConnectionData,
    RemoveConnectionVariables, SuccessPayload, TestBqCredentialsV2, TestBqCredentialsV2Data,
    TestBqCredentialsV2Variables, TestCredentialsPayload, UpdateCredentials,
    UpdateCredentialsData, UpdateCredentialsVariables,
};
pub use diagnostics::{Diagnostic, Errors, ValidationResult, Warnings};
pub use warehouse::{
    GetWarehouse, GetWarehouseData, GetWarehouseVariables, SetWarehouseName,
    SetWarehouseNameData, SetWarehouseNameVariables, Warehouse, WarehouseConnection,
    WarehousePayload, WarehouseRef,
};

use serde::{Deserialize, Deserializer};

/// Decode JSON `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
