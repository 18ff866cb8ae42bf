//! Twitter account request processing
//!
//! Turns account queries into REST requests and decodes the responses into
//! typed [`Account`](account::Account) values.
//!
//! # Module Structure
//!
//! - [`query`] - Query expressions and parameter extraction
//! - [`processor`] - The request processor contract and request descriptors
//! - [`account`] - The account processor, discriminator and payload models
//! - [`twitter`] - HTTP transport for built requests
//! - [`config`] - Persistent configuration
//! - [`error`] - Processor error taxonomy

pub mod account;
pub mod config;
pub mod error;
pub mod processor;
pub mod query;
pub mod twitter;

pub use account::{Account, AccountAction, AccountRequestProcessor, AccountType};
pub use error::ProcessorError;
pub use processor::{ActionProcessor, HttpMethod, Request, RequestProcessor};
pub use query::{ParameterMap, QueryExpression, QueryValue};

/// Version injected at compile time via TWACCOUNT_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("TWACCOUNT_VERSION") {
    Some(v) => v,
    None => "dev",
};
