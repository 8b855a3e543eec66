//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Monte Carlo API client
#[derive(Parser, Debug)]
#[command(name = "mcd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint, overrides config and environment
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log every request and response
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a warehouse and its connections
    GetWarehouse {
        /// Warehouse UUID
        #[arg(long)]
        dw_id: String,
    },

    /// Rename a warehouse
    SetWarehouseName {
        /// Warehouse UUID
        #[arg(long)]
        dw_id: String,

        /// New name
        #[arg(long)]
        name: String,
    },

    /// Validate a BigQuery service account key
    TestBqCredentials {
        /// Service account key file (JSON)
        #[arg(long)]
        service_json_file: PathBuf,

        /// Validation to run
        #[arg(long, default_value = "validate_cred_permissions")]
        validation_name: String,
    },

    /// Attach staged credentials to a warehouse
    AddConnection {
        /// Key returned by a credential test
        #[arg(long)]
        key: String,

        /// Connection type, e.g. bigquery
        #[arg(long)]
        connection_type: String,

        /// Existing warehouse UUID
        #[arg(long)]
        dw_id: Option<String>,

        /// Data collector UUID
        #[arg(long)]
        dc_id: Option<String>,

        /// Warehouse name
        #[arg(long)]
        name: Option<String>,

        /// Job types (comma-separated)
        #[arg(long, value_delimiter = ',')]
        job_types: Vec<String>,

        /// Warehouse type to create when no warehouse is given
        #[arg(long)]
        create_warehouse_type: Option<String>,
    },

    /// Change the credentials of a connection
    UpdateCredentials {
        /// Connection UUID
        #[arg(long)]
        connection_id: String,

        /// Changes as a JSON object
        #[arg(long)]
        changes: String,

        /// Replace all credentials instead of merging
        #[arg(long)]
        replace: bool,

        /// Validate the new credentials before saving
        #[arg(long)]
        validate: bool,
    },

    /// Remove a connection
    RemoveConnection {
        /// Connection UUID
        #[arg(long)]
        connection_id: String,
    },

    /// Run arbitrary GraphQL and print the data
    Exec {
        /// Query text, or @path to read it from a file
        #[arg(long)]
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Operation name
        #[arg(long)]
        operation_name: Option<String>,
    },
}
