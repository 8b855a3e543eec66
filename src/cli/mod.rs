//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `get-warehouse` - Fetch a warehouse and its connections
//! - `set-warehouse-name` - Rename a warehouse
//! - `test-bq-credentials` - Validate a BigQuery service account key
//! - `add-connection` - Attach staged credentials to a warehouse
//! - `update-credentials` - Change the credentials of a connection
//! - `remove-connection` - Remove a connection
//! - `exec` - Run arbitrary GraphQL and print the data

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
