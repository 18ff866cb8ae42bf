//! Twitter Client
//!
//! Executes account requests: builds them with an [`AccountRequestProcessor`],
//! sends them through [`TwitterHttpClient`] and decodes the body.

use super::http::TwitterHttpClient;
use crate::account::{Account, AccountAction, AccountRequestProcessor, AccountType};
use crate::processor::{ActionProcessor, Request, RequestProcessor};
use crate::query::QueryExpression;
use anyhow::{Context, Result};

/// Main Twitter client
#[derive(Clone)]
pub struct TwitterClient {
    pub http: TwitterHttpClient,
    pub base_url: String,
    token: Option<String>,
}

impl TwitterClient {
    /// Create a new client. The base URL is validated up front.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let processor = AccountRequestProcessor::new(base_url)
            .with_context(|| format!("Unusable base URL: {}", base_url))?;

        Ok(Self {
            http: TwitterHttpClient::new()?,
            base_url: processor.base_url().to_string(),
            token,
        })
    }

    /// Processor configured for this client's base URL
    pub fn processor(&self, account_type: AccountType) -> Result<AccountRequestProcessor> {
        Ok(AccountRequestProcessor::new(&self.base_url)?.with_type(account_type))
    }

    /// Build the request for a query without sending it
    pub fn prepare(&self, expr: &QueryExpression) -> Result<(AccountRequestProcessor, Request)> {
        let processor = self.processor(AccountType::default())?;
        let params = processor.get_parameters(expr)?;
        let account_type = AccountType::from_params(Some(&params))?;
        let processor = processor.with_type(account_type);
        let request = processor.build_url(Some(&params))?;
        Ok((processor, request))
    }

    /// Run an account query and decode the results
    pub async fn query(&self, expr: &QueryExpression) -> Result<Vec<Account>> {
        let (processor, request) = self.prepare(expr)?;
        tracing::info!("query {} -> {}", processor.account_type(), request);

        let body = self.http.execute(&request, self.token.as_deref()).await?;
        let accounts = processor
            .process_results(&body)
            .with_context(|| format!("Failed to decode {} response", processor.account_type()))?;

        tracing::debug!("decoded {} account(s)", accounts.len());
        Ok(accounts)
    }

    /// Perform an account action
    pub async fn perform(&self, action: AccountAction) -> Result<Account> {
        let processor = self.processor(action.account_type())?;
        let request = processor.build_action_url(action);
        tracing::info!("action {:?} -> {}", action, request);

        let body = self.http.execute(&request, self.token.as_deref()).await?;
        processor
            .process_action_result(&body, action)
            .with_context(|| format!("Failed to decode {:?} response", action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_base_url() {
        let client = TwitterClient::new("https://api.twitter.com/1", None).unwrap();
        assert_eq!(client.base_url, "https://api.twitter.com/1/");
    }

    #[test]
    fn test_new_rejects_relative_base_url() {
        assert!(TwitterClient::new("not a url", None).is_err());
    }

    #[test]
    fn test_prepare_selects_processor_type() {
        let client = TwitterClient::new("https://api.twitter.com/1/", None).unwrap();
        let expr = QueryExpression::eq("Type", AccountType::Settings);

        let (processor, request) = client.prepare(&expr).unwrap();

        assert_eq!(processor.account_type(), AccountType::Settings);
        assert_eq!(request.full_url(), "https://api.twitter.com/1/account/settings.json");
    }

    #[test]
    fn test_prepare_without_type_fails() {
        let client = TwitterClient::new("https://api.twitter.com/1/", None).unwrap();
        let expr = QueryExpression::eq("SkipStatus", true);

        let err = client.prepare(&expr).unwrap_err();
        let processor_err = err
            .downcast_ref::<crate::error::ProcessorError>()
            .expect("processor error");

        assert_eq!(processor_err.param_name(), Some("Type"));
    }
}
