//! Transport module
//!
//! The `Transport` trait is the minimal "send a request, get a response"
//! capability. `DefaultTransport` performs the network call through a
//! caller-configured `reqwest::Client`; `AuthTransport` wraps any other
//! transport and adds the Monte Carlo API key headers plus a debug dump of
//! every exchange.

mod authenticating;
mod capture;
mod credentials;
mod sender;

pub use authenticating::AuthTransport;
pub use capture::{dump_request, dump_response};
pub use credentials::{Credentials, API_KEY_ID_HEADER, API_KEY_TOKEN_HEADER};
pub use sender::{DefaultTransport, Transport};
