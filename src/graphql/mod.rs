//! GraphQL execution
//!
//! Marshals typed operations (anything implementing
//! `graphql_client::GraphQLQuery`) into a POST against a single endpoint and
//! decodes the response. All HTTP traffic goes through a `Transport`.

mod client;
mod options;

pub use client::GraphqlClient;
pub use options::RequestOptions;

#[cfg(test)]
mod tests;
