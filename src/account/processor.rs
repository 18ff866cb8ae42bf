//! Account Request Processor
//!
//! Builds `account/*` requests and dispatches their responses to the decode
//! rule of the configured [`AccountType`].

use super::dto::SettingsDto;
use super::models::{EndSessionStatus, RateLimitStatus, Totals, User};
use super::{Account, AccountAction, AccountType};
use crate::error::{ProcessorError, TYPE_PARAM};
use crate::processor::url::{add_query_params, normalize_base_url, route_url};
use crate::processor::{decode_value, parse_json_object, ActionProcessor, Request, RequestProcessor};
use crate::query::{wire_name, ParameterMap, QueryField};
use serde_json::Value;

/// Fields accepted in account query expressions
pub const ACCOUNT_FIELDS: &[QueryField] = &[
    QueryField::new(TYPE_PARAM, TYPE_PARAM),
    QueryField::new("IncludeEntities", "include_entities"),
    QueryField::new("SkipStatus", "skip_status"),
];

/// Processor for the account entity family.
///
/// Holds only its base URL and the discriminator used to decode responses;
/// construct one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRequestProcessor {
    base_url: String,
    account_type: AccountType,
}

impl AccountRequestProcessor {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.twitter.com/1/";

    /// Create a processor for `base_url`, decoding as `VerifyCredentials`
    pub fn new(base_url: &str) -> Result<Self, ProcessorError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            account_type: AccountType::default(),
        })
    }

    /// Select the discriminator used by [`RequestProcessor::process_results`]
    pub fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Build the POST request for an action
    pub fn build_action_url(&self, action: AccountAction) -> Request {
        let account_type = action.account_type();
        let url = route_url(&self.base_url, account_type.path());
        tracing::debug!("account action {:?} -> {}", action, url);
        Request::new(account_type.method(), url)
    }

    /// Decode one object according to `account_type`
    fn decode(account_type: AccountType, value: Value, body: &str) -> Result<Account, ProcessorError> {
        tracing::debug!("decoding account response as {}", account_type);

        let account = match account_type {
            AccountType::VerifyCredentials => Account::User(decode_value::<User>(value, body)?),
            AccountType::RateLimitStatus => {
                let status = decode_value::<RateLimitStatus>(value, body)?;
                if status.reset_time.is_none() {
                    tracing::warn!("rate limit response has no usable reset_time");
                }
                Account::RateLimitStatus(status)
            }
            AccountType::Totals => Account::Totals(decode_value::<Totals>(value, body)?),
            AccountType::Settings => {
                Account::Settings(decode_value::<SettingsDto>(value, body)?.into_settings())
            }
            AccountType::EndSession => {
                Account::EndSessionStatus(decode_value::<EndSessionStatus>(value, body)?)
            }
        };

        Ok(account)
    }
}

impl Default for AccountRequestProcessor {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            account_type: AccountType::default(),
        }
    }
}

impl RequestProcessor for AccountRequestProcessor {
    type Entity = Account;

    fn fields(&self) -> &'static [QueryField] {
        ACCOUNT_FIELDS
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, params: Option<&ParameterMap>) -> Result<Request, ProcessorError> {
        let account_type = AccountType::from_params(params)?;
        let url = route_url(&self.base_url, account_type.path());

        let extra = params
            .into_iter()
            .flatten()
            .filter(|(key, _)| key.as_str() != TYPE_PARAM)
            .map(|(key, value)| (wire_name(ACCOUNT_FIELDS, key), value.as_str()));
        let url = add_query_params(&url, extra);

        tracing::debug!("account {} -> {}", account_type, url);
        Ok(Request::new(account_type.method(), url))
    }

    fn process_results(&self, body: &str) -> Result<Vec<Account>, ProcessorError> {
        let Some(value) = parse_json_object(body)? else {
            tracing::debug!("empty {} response, no accounts", self.account_type);
            return Ok(Vec::new());
        };

        Ok(vec![Self::decode(self.account_type, value, body)?])
    }
}

impl ActionProcessor for AccountRequestProcessor {
    type Action = AccountAction;

    /// Actions always produce one entity; an empty body decodes to defaults.
    fn process_action_result(&self, body: &str, action: AccountAction) -> Result<Account, ProcessorError> {
        let value = parse_json_object(body)?.unwrap_or_else(|| Value::Object(Default::default()));
        Self::decode(action.account_type(), value, body)
    }
}
