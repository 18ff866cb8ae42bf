//! HTTP utilities for Twitter REST API calls

use crate::processor::{HttpMethod, Request};
use anyhow::{Context, Result};
use reqwest::Client;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|idx| body.is_char_boundary(*idx))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Twitter API calls
#[derive(Clone)]
pub struct TwitterHttpClient {
    client: Client,
}

impl TwitterHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("twaccount/{}", crate::VERSION))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Send a request and return the raw response body.
    /// Non-success statuses become errors; an empty body is returned as `""`.
    pub async fn execute(&self, request: &Request, token: Option<&str>) -> Result<String> {
        let url = request
            .url()
            .with_context(|| format!("Invalid request URL: {}", request.full_url()))?;

        tracing::debug!("{} {}", request.method(), url);

        let mut builder = match request.method() {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(anyhow::anyhow!("API request failed: {}", status));
        }

        Ok(body)
    }
}

/// Format a Twitter API error for display
/// Avoids echoing raw API error bodies to the user
pub fn format_api_error(error: &anyhow::Error) -> String {
    let error_str = error.to_string();

    if error_str.contains("401") {
        return "Authentication failed. Check TWITTER_BEARER_TOKEN.".to_string();
    }
    if error_str.contains("403") {
        return "Permission denied for this account endpoint.".to_string();
    }
    if error_str.contains("404") {
        return "Endpoint not found. Check the base URL.".to_string();
    }
    if error_str.contains("429") || error_str.contains("420") {
        return "Rate limit exceeded. Query rate-limit-status to see when it resets.".to_string();
    }
    if error_str.contains("400") {
        return "Invalid request. Check your parameters.".to_string();
    }
    if error_str.contains("500") || error_str.contains("502") || error_str.contains("503") {
        return "Twitter service temporarily unavailable. Please try again.".to_string();
    }

    if error_str.contains("API request failed") {
        return "Request failed. Check your network connection and try again.".to_string();
    }

    let sanitized = error_str
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(80)
        .collect::<String>();

    if sanitized.len() < error_str.len() {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
