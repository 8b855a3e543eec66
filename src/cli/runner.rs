//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::MonteCarloClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::graphql::RequestOptions;
use crate::operations::{
    AddConnectionVariables, BqConnectionDetails, TestBqCredentialsV2Variables,
    UpdateCredentialsVariables,
};
use crate::transport::Transport;
use crate::types::{JsonValue, Variables};
use base64::Engine as _;
use serde_json::json;
use std::fs;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let span = tracing::info_span!("mcd", endpoint = %config.endpoint);
        let client = MonteCarloClient::from_config(&config, span)?;

        let output = self.execute(&client).await?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Resolve configuration: file, then environment, then flags
    pub fn load_config(&self) -> Result<ClientConfig> {
        let base = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClientConfig::default(),
        };

        let mut config = base.with_env_overrides(|key| std::env::var(key).ok())?;
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        config.validate()?;
        Ok(config)
    }

    /// Execute the command with an existing client and return its data
    pub async fn execute<T: Transport>(&self, client: &MonteCarloClient<T>) -> Result<JsonValue> {
        match &self.cli.command {
            Commands::GetWarehouse { dw_id } => {
                let warehouse = client.get_warehouse(dw_id).await?;
                if warehouse.is_none() {
                    warn!("Warehouse {} not found", dw_id);
                }
                Ok(serde_json::to_value(warehouse)?)
            }

            Commands::SetWarehouseName { dw_id, name } => {
                let warehouse = client.set_warehouse_name(dw_id, name).await?;
                info!("Renamed warehouse {} to {}", warehouse.uuid, warehouse.name);
                Ok(serde_json::to_value(warehouse)?)
            }

            Commands::TestBqCredentials {
                service_json_file,
                validation_name,
            } => {
                let key_file = fs::read(service_json_file)
                    .with_context(|| format!("reading {}", service_json_file.display()))?;
                let variables = TestBqCredentialsV2Variables {
                    validation_name: validation_name.clone(),
                    connection_details: BqConnectionDetails {
                        service_json: base64::engine::general_purpose::STANDARD.encode(key_file),
                    },
                };

                let payload = client.test_bq_credentials(variables).await?;
                let result = &payload.validation_result;
                if !result.success {
                    warn!(
                        "Credential validation failed: {}",
                        result.error_causes().collect::<Vec<_>>().join(", ")
                    );
                }
                Ok(serde_json::to_value(payload)?)
            }

            Commands::AddConnection {
                key,
                connection_type,
                dw_id,
                dc_id,
                name,
                job_types,
                create_warehouse_type,
            } => {
                let variables = AddConnectionVariables {
                    dc_id: dc_id.clone(),
                    dw_id: dw_id.clone(),
                    key: key.clone(),
                    job_types: (!job_types.is_empty()).then(|| job_types.clone()),
                    name: name.clone(),
                    connection_type: connection_type.clone(),
                    create_warehouse_type: create_warehouse_type.clone(),
                };
                let payload = client.add_connection(variables).await?;
                Ok(serde_json::to_value(payload)?)
            }

            Commands::UpdateCredentials {
                connection_id,
                changes,
                replace,
                validate,
            } => {
                let changes: JsonValue =
                    serde_json::from_str(changes).context("parsing --changes")?;
                if !changes.is_object() {
                    return Err(Error::config("--changes must be a JSON object"));
                }
                let variables = UpdateCredentialsVariables {
                    changes,
                    connection_id: connection_id.clone(),
                    should_replace: Some(*replace),
                    should_validate: Some(*validate),
                };
                let success = client.update_credentials(variables).await?;
                Ok(json!({ "success": success }))
            }

            Commands::RemoveConnection { connection_id } => {
                let success = client.remove_connection(connection_id).await?;
                Ok(json!({ "success": success }))
            }

            Commands::Exec {
                query,
                variables,
                operation_name,
            } => {
                let query = match query.strip_prefix('@') {
                    Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
                    None => query.clone(),
                };
                let variables: Variables = match variables {
                    Some(raw) => serde_json::from_str(raw).context("parsing --variables")?,
                    None => Variables::new(),
                };
                let mut options = RequestOptions::new();
                if let Some(name) = operation_name {
                    options = options.operation_name(name);
                }

                let raw = client.exec_raw(&query, &variables, &options).await?;
                Ok(serde_json::from_slice(&raw)?)
            }
        }
    }
}
