//! Account entity family
//!
//! Everything needed to query `account/*` endpoints: the [`AccountType`]
//! discriminator, the [`AccountAction`] set, the [`Account`] result and its
//! payload models, and [`AccountRequestProcessor`].
//!
//! # Module Structure
//!
//! - [`models`] - Typed payloads (user, rate limit, totals, settings, end session)
//! - [`processor`] - Parameter extraction, URL building and response dispatch
//! - [`timestamp`] - The `Ddd Mon DD HH:MM:SS +0000 YYYY` timestamp format
//! - `dto` - Wire shapes that differ from the models

mod dto;
pub mod models;
pub mod processor;
pub mod timestamp;

pub use models::{
    EndSessionStatus, RateLimitStatus, Settings, SleepTime, Status, TimeZone, Totals,
    TrendLocation, User,
};
pub use processor::AccountRequestProcessor;

use crate::error::ProcessorError;
use crate::processor::HttpMethod;
use crate::query::{ParameterMap, QueryValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator selecting both the route and the response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    VerifyCredentials = 0,
    RateLimitStatus = 1,
    Totals = 2,
    Settings = 3,
    EndSession = 4,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        AccountType::VerifyCredentials,
        AccountType::RateLimitStatus,
        AccountType::Totals,
        AccountType::Settings,
        AccountType::EndSession,
    ];

    /// Integer code used when the type travels as a parameter
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Route relative to the API base URL
    pub fn path(self) -> &'static str {
        match self {
            AccountType::VerifyCredentials => "account/verify_credentials.json",
            AccountType::RateLimitStatus => "account/rate_limit_status.json",
            AccountType::Totals => "account/totals.json",
            AccountType::Settings => "account/settings.json",
            AccountType::EndSession => "account/end_session.json",
        }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            AccountType::EndSession => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::VerifyCredentials => "verify_credentials",
            AccountType::RateLimitStatus => "rate_limit_status",
            AccountType::Totals => "totals",
            AccountType::Settings => "settings",
            AccountType::EndSession => "end_session",
        }
    }

    /// Parse the stringified integer code carried in a parameter map
    pub fn from_param(value: &str) -> Result<Self, ProcessorError> {
        let code: i64 = value.trim().parse().map_err(|_| {
            ProcessorError::missing_type(format!("'{}' is not an account type code", value))
        })?;
        Self::try_from(code)
    }

    /// Read the discriminator out of a parameter map
    pub fn from_params(params: Option<&ParameterMap>) -> Result<Self, ProcessorError> {
        let Some(params) = params else {
            return Err(ProcessorError::missing_type("parameters were not provided"));
        };
        let Some(value) = params.get(crate::error::TYPE_PARAM) else {
            return Err(ProcessorError::missing_type("Type is required"));
        };
        Self::from_param(value)
    }
}

impl TryFrom<i64> for AccountType {
    type Error = ProcessorError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| ProcessorError::missing_type(format!("no route for account type {}", code)))
    }
}

impl From<AccountType> for QueryValue {
    fn from(value: AccountType) -> Self {
        QueryValue::Int(value.code())
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side-effecting account actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountAction {
    EndSession = 0,
}

impl AccountAction {
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Discriminator whose route and decode rule this action uses
    pub fn account_type(self) -> AccountType {
        match self {
            AccountAction::EndSession => AccountType::EndSession,
        }
    }
}

impl TryFrom<i64> for AccountAction {
    type Error = ProcessorError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AccountAction::EndSession),
            other => Err(ProcessorError::UnknownAction(other)),
        }
    }
}

/// Result of one account call. Exactly one payload per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Account {
    User(User),
    RateLimitStatus(RateLimitStatus),
    Totals(Totals),
    Settings(Settings),
    EndSessionStatus(EndSessionStatus),
}

impl Account {
    /// Discriminator that produced this payload
    pub fn account_type(&self) -> AccountType {
        match self {
            Account::User(_) => AccountType::VerifyCredentials,
            Account::RateLimitStatus(_) => AccountType::RateLimitStatus,
            Account::Totals(_) => AccountType::Totals,
            Account::Settings(_) => AccountType::Settings,
            Account::EndSessionStatus(_) => AccountType::EndSession,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Account::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn rate_limit_status(&self) -> Option<&RateLimitStatus> {
        match self {
            Account::RateLimitStatus(status) => Some(status),
            _ => None,
        }
    }

    pub fn totals(&self) -> Option<&Totals> {
        match self {
            Account::Totals(totals) => Some(totals),
            _ => None,
        }
    }

    pub fn settings(&self) -> Option<&Settings> {
        match self {
            Account::Settings(settings) => Some(settings),
            _ => None,
        }
    }

    pub fn end_session_status(&self) -> Option<&EndSessionStatus> {
        match self {
            Account::EndSessionStatus(status) => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in AccountType::ALL {
            assert_eq!(AccountType::try_from(kind.code()).unwrap(), kind);
            assert_eq!(AccountType::from_param(&kind.code().to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_route_table() {
        assert_eq!(AccountType::VerifyCredentials.path(), "account/verify_credentials.json");
        assert_eq!(AccountType::RateLimitStatus.path(), "account/rate_limit_status.json");
        assert_eq!(AccountType::Totals.path(), "account/totals.json");
        assert_eq!(AccountType::Settings.path(), "account/settings.json");
        assert_eq!(AccountType::EndSession.path(), "account/end_session.json");
    }

    #[test]
    fn test_unknown_code_is_type_argument_error() {
        let err = AccountType::try_from(42).unwrap_err();
        assert_eq!(err.param_name(), Some("Type"));

        let err = AccountType::from_param("Totals").unwrap_err();
        assert_eq!(err.param_name(), Some("Type"));
    }

    #[test]
    fn test_from_params_requires_type() {
        assert_eq!(
            AccountType::from_params(None).unwrap_err().param_name(),
            Some("Type")
        );
        assert_eq!(
            AccountType::from_params(Some(&ParameterMap::new()))
                .unwrap_err()
                .param_name(),
            Some("Type")
        );
    }

    #[test]
    fn test_unknown_action_code() {
        assert!(matches!(
            AccountAction::try_from(3),
            Err(ProcessorError::UnknownAction(3))
        ));
        assert_eq!(
            AccountAction::try_from(0).unwrap().account_type(),
            AccountType::EndSession
        );
    }

    #[test]
    fn test_default_type_is_verify_credentials() {
        assert_eq!(AccountType::default(), AccountType::VerifyCredentials);
    }

    #[test]
    fn test_accessors_expose_only_populated_payload() {
        let acct = Account::Totals(Totals {
            updates: 1,
            friends: 2,
            favorites: 3,
            followers: 4,
        });

        assert_eq!(acct.account_type(), AccountType::Totals);
        assert!(acct.totals().is_some());
        assert!(acct.user().is_none());
        assert!(acct.rate_limit_status().is_none());
        assert!(acct.settings().is_none());
        assert!(acct.end_session_status().is_none());
    }
}
