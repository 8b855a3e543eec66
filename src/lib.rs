//! # Monte Carlo Client
//!
//! Authenticated GraphQL client for the Monte Carlo data observability API,
//! as used by an infrastructure-as-code provider to manage warehouse
//! connections.
//!
//! ## Features
//!
//! - **API key auth**: `x-mcd-id` / `x-mcd-token` on every request
//! - **Exchange dumps**: raw request and response logged at debug level
//!   under a caller-supplied `tracing` span
//! - **Typed operations**: add/remove connection, test BigQuery credentials,
//!   update credentials, rename and fetch warehouses
//! - **Raw execution**: send any query text and get the `data` JSON back
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use montecarlo_client::{MonteCarloClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let span = tracing::info_span!("montecarlo");
//!     let client = MonteCarloClient::new(span, "key-id", "key-token")?;
//!
//!     if let Some(warehouse) = client.get_warehouse("0b1c…").await? {
//!         println!("{} has {} connections", warehouse.name, warehouse.connections.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ MonteCarloClient   mutate / query / exec_raw │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────┴───────────────────────┐
//! │ GraphqlClient      encode → POST → decode    │
//! └──────────────────────┬───────────────────────┘
//!                        │ Transport
//! ┌──────────────────────┴───────────────────────┐
//! │ AuthTransport      headers + debug dump      │
//! └──────────────────────┬───────────────────────┘
//!                        │ Transport
//! ┌──────────────────────┴───────────────────────┐
//! │ DefaultTransport   reqwest::Client           │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Request senders and the authenticating decorator
pub mod transport;

/// Generic GraphQL execution
pub mod graphql;

/// Typed Monte Carlo operations
pub mod operations;

/// The Monte Carlo client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::MonteCarloClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use graphql::RequestOptions;
pub use transport::{AuthTransport, Credentials, DefaultTransport, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
