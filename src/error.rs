//! Processor errors
//!
//! Every failure a request processor can raise is a [`ProcessorError`]
//! variant with enough structure for callers to branch on it. Transport and
//! application code wraps these in `anyhow::Error`.

use thiserror::Error;

/// Parameter name identifying the discriminator ("Type") in argument errors.
pub const TYPE_PARAM: &str = "Type";

/// Parameter name identifying the processor base URL in argument errors.
pub const BASE_URL_PARAM: &str = "BaseUrl";

/// Maximum number of body bytes rendered in a parse error message.
const MAX_DISPLAY_BODY_LENGTH: usize = 120;

/// Errors raised while building requests or decoding responses.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The query expression uses an operator or field that cannot become a
    /// query parameter.
    #[error("unsupported query expression: {node}")]
    UnsupportedExpression {
        /// Rendering of the offending expression node.
        node: String,
    },

    /// A required argument is missing or outside the accepted set.
    #[error("invalid argument '{param}': {message}")]
    Argument {
        /// Name of the offending parameter.
        param: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// The response body is not a JSON object.
    #[error("failed to parse response: {message} (body: {})", preview(.body))]
    ResponseParse {
        /// Description of the parse failure.
        message: String,
        /// The raw body, kept for diagnostics.
        body: String,
        /// Underlying JSON error, if any.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// An action code outside the closed action set.
    #[error("unknown action code {0}")]
    UnknownAction(i64),
}

impl ProcessorError {
    /// Argument error for a missing or unroutable discriminator.
    pub fn missing_type(message: impl Into<String>) -> Self {
        Self::Argument {
            param: TYPE_PARAM,
            message: message.into(),
        }
    }

    /// Name of the parameter an [`ProcessorError::Argument`] identifies.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::Argument { param, .. } => Some(*param),
            _ => None,
        }
    }

    /// Raw response body carried by a parse error.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::ResponseParse { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn preview(body: &str) -> String {
    if body.len() <= MAX_DISPLAY_BODY_LENGTH {
        return body.to_string();
    }
    let cut = (0..=MAX_DISPLAY_BODY_LENGTH)
        .rev()
        .find(|idx| body.is_char_boundary(*idx))
        .unwrap_or(0);
    format!("{}... [{} bytes total]", &body[..cut], body.len())
}
