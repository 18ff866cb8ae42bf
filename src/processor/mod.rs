//! Request processor contract
//!
//! A request processor owns one REST entity family. It turns a query
//! expression into parameters, parameters into a [`Request`], and response
//! bodies back into typed entities.
//!
//! # Module Structure
//!
//! - [`request`] - Request descriptors consumed by the transport
//! - [`url`] - Base URL validation and query string composition
//!
//! # Example
//!
//! ```
//! use twaccount::account::{AccountRequestProcessor, AccountType};
//! use twaccount::processor::RequestProcessor;
//! use twaccount::query::QueryExpression;
//!
//! let processor = AccountRequestProcessor::new("https://api.twitter.com/1/").unwrap();
//! let params = processor
//!     .get_parameters(&QueryExpression::eq("Type", AccountType::Totals))
//!     .unwrap();
//! let request = processor.build_url(Some(&params)).unwrap();
//! assert_eq!(request.full_url(), "https://api.twitter.com/1/account/totals.json");
//! ```

pub mod request;
pub mod url;

pub use request::{HttpMethod, Request};

use crate::error::ProcessorError;
use crate::query::{extract_parameters, ParameterMap, QueryExpression, QueryField};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Query side of a processor
pub trait RequestProcessor {
    /// Entity produced from one response
    type Entity;

    /// Fields accepted in query expressions
    fn fields(&self) -> &'static [QueryField];

    /// Normalized base URL, always ending in `/`
    fn base_url(&self) -> &str;

    /// Extract request parameters from a query expression
    fn get_parameters(&self, expr: &QueryExpression) -> Result<ParameterMap, ProcessorError> {
        extract_parameters(expr, self.fields())
    }

    /// Build the request for a parameter map.
    /// `None` is treated the same as a map without the discriminator.
    fn build_url(&self, params: Option<&ParameterMap>) -> Result<Request, ProcessorError>;

    /// Decode a response body. An empty body yields no entities.
    fn process_results(&self, body: &str) -> Result<Vec<Self::Entity>, ProcessorError>;
}

/// Side-effecting actions that always answer with a single entity
pub trait ActionProcessor: RequestProcessor {
    type Action;

    fn process_action_result(
        &self,
        body: &str,
        action: Self::Action,
    ) -> Result<Self::Entity, ProcessorError>;
}

/// Parse a response body as one JSON object.
/// Returns `Ok(None)` for an empty or whitespace-only body.
pub fn parse_json_object(body: &str) -> Result<Option<Value>, ProcessorError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body).map_err(|e| ProcessorError::ResponseParse {
        message: e.to_string(),
        body: body.to_string(),
        source: Some(e),
    })?;

    if !value.is_object() {
        return Err(ProcessorError::ResponseParse {
            message: "expected a JSON object".to_string(),
            body: body.to_string(),
            source: None,
        });
    }

    Ok(Some(value))
}

/// Decode an already-parsed object into `T`, keeping `body` for diagnostics.
pub fn decode_value<T: DeserializeOwned>(value: Value, body: &str) -> Result<T, ProcessorError> {
    serde_json::from_value(value).map_err(|e| ProcessorError::ResponseParse {
        message: e.to_string(),
        body: body.to_string(),
        source: Some(e),
    })
}
