//! URL composition helpers shared by processors

use crate::error::{ProcessorError, BASE_URL_PARAM};
use url::Url;

/// Validate a base URL and make sure relative routes append to it.
pub fn normalize_base_url(base_url: &str) -> Result<String, ProcessorError> {
    let parsed = Url::parse(base_url).map_err(|e| ProcessorError::Argument {
        param: BASE_URL_PARAM,
        message: format!("'{}' is not an absolute URL: {}", base_url, e),
    })?;

    if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ProcessorError::Argument {
            param: BASE_URL_PARAM,
            message: format!("'{}' cannot carry relative routes", base_url),
        });
    }

    if base_url.ends_with('/') {
        Ok(base_url.to_string())
    } else {
        Ok(format!("{}/", base_url))
    }
}

/// Append a relative route to a normalized base URL
pub fn route_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path.trim_start_matches('/'))
}

/// Append `key=value` pairs as a query string.
/// Keys and values are percent-encoded; an empty iterator leaves the URL untouched.
pub fn add_query_params<'a, I>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let query_parts: Vec<String> = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();

    if query_parts.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{}&{}", url, query_parts.join("&"))
    } else {
        format!("{}?{}", url, query_parts.join("&"))
    }
}
