//! Integration tests for the account client using wiremock
//!
//! These tests drive `TwitterClient` against mocked account endpoints,
//! covering each response shape, the end-session action and transport errors.

use chrono::{TimeZone, Utc};
use serde_json::json;
use twaccount::account::{AccountAction, AccountType};
use twaccount::query::QueryExpression;
use twaccount::twitter::client::TwitterClient;
use twaccount::twitter::http::format_api_error;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test module for account client integration tests
mod account_client_tests {
    use super::*;

    fn client_for(server: &MockServer, token: Option<&str>) -> TwitterClient {
        TwitterClient::new(&format!("{}/1/", server.uri()), token.map(String::from))
            .expect("Client should build")
    }

    fn query_type(account_type: AccountType) -> QueryExpression {
        QueryExpression::eq("Type", account_type)
    }

    /// Verify credentials decodes the user profile
    #[tokio::test]
    async fn test_verify_credentials_returns_user() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/verify_credentials.json"))
            .and(query_param("skip_status", "true"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 15411837,
                "id_str": "15411837",
                "name": "Joe Mayo",
                "screen_name": "JoeMayo",
                "followers_count": 875,
                "created_at": "Sun Jul 13 04:35:50 +0000 2008"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-token"));
        let expr = query_type(AccountType::VerifyCredentials)
            .and(QueryExpression::eq("SkipStatus", true));

        let accounts = client.query(&expr).await.expect("Query should succeed");

        assert_eq!(accounts.len(), 1);
        let user = accounts[0].user().expect("User payload");
        assert_eq!(user.name, "Joe Mayo");
        assert_eq!(user.followers_count, 875);
        assert!(user.status.is_none());
        assert!(accounts[0].rate_limit_status().is_none());
    }

    /// Rate limit status decodes the reset instant in UTC
    #[tokio::test]
    async fn test_rate_limit_status_parses_reset_time() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/rate_limit_status.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "remaining_hits": 343,
                "hourly_limit": 350,
                "reset_time_in_seconds": 1316397996,
                "reset_time": "Mon Sep 19 02:06:36 +0000 2011"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let accounts = client
            .query(&query_type(AccountType::RateLimitStatus))
            .await
            .expect("Query should succeed");

        let status = accounts[0].rate_limit_status().expect("Rate limit payload");
        assert_eq!(status.remaining_hits, 343);
        assert_eq!(
            status.reset_time,
            Some(Utc.with_ymd_and_hms(2011, 9, 19, 2, 6, 36).unwrap())
        );
        assert_eq!(
            status.reset_time.map(|t| t.timestamp()),
            Some(status.reset_time_in_seconds)
        );
    }

    /// Totals decodes the four counters
    #[tokio::test]
    async fn test_totals_returns_counters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/totals.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "followers": 875,
                "favorites": 65,
                "friends": 161,
                "updates": 1624
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let accounts = client
            .query(&query_type(AccountType::Totals))
            .await
            .expect("Query should succeed");

        let totals = accounts[0].totals().expect("Totals payload");
        assert_eq!(totals.updates, 1624);
        assert_eq!(totals.followers, 875);
    }

    /// Settings decodes the nested trend location and sleep time
    #[tokio::test]
    async fn test_settings_returns_trend_location() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/settings.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trend_location": [{
                    "name": "United States",
                    "countryCode": "US",
                    "placeType": {"name": "Country", "code": 12},
                    "country": "United States",
                    "url": "http://where.yahooapis.com/v1/place/23424977",
                    "woeid": 23424977
                }],
                "sleep_time": {"start_time": null, "end_time": null, "enabled": false},
                "geo_enabled": true
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let accounts = client
            .query(&query_type(AccountType::Settings))
            .await
            .expect("Query should succeed");

        let settings = accounts[0].settings().expect("Settings payload");
        let location = settings.trend_location.as_ref().expect("Trend location");
        assert_eq!(location.woe_id, "23424977");
        assert_eq!(location.place_type_name_code, 12);
        assert_eq!(settings.sleep_time.start_hour, 0);
        assert!(settings.geo_enabled);
    }

    /// An empty 200 body yields no accounts
    #[tokio::test]
    async fn test_empty_body_returns_no_accounts() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/totals.json"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let accounts = client
            .query(&query_type(AccountType::Totals))
            .await
            .expect("Query should succeed");

        assert!(accounts.is_empty());
    }

    /// End session is a POST decoded into the status payload
    #[tokio::test]
    async fn test_end_session_action() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/account/end_session.json"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "request": "/1/account/end_session.json",
                "error": "Logged out."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-token"));
        let account = client
            .perform(AccountAction::EndSession)
            .await
            .expect("Action should succeed");

        let status = account.end_session_status().expect("End session payload");
        assert_eq!(status.error, "Logged out.");
        assert_eq!(status.request, "/1/account/end_session.json");
    }

    /// Malformed JSON surfaces as a decode error
    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/totals.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"updates\":"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .query(&query_type(AccountType::Totals))
            .await
            .expect_err("Query should fail");

        let processor_err = err
            .downcast_ref::<twaccount::ProcessorError>()
            .expect("Processor error in chain");
        assert_eq!(processor_err.raw_body(), Some("{\"updates\":"));
    }

    /// 401 responses become authentication errors
    #[tokio::test]
    async fn test_401_returns_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/verify_credentials.json"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "request": "/1/account/verify_credentials.json",
                "error": "Could not authenticate you."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("bad-token"));
        let err = client
            .query(&query_type(AccountType::VerifyCredentials))
            .await
            .expect_err("Query should fail");

        assert!(err.to_string().contains("401"));
        assert!(format_api_error(&err).starts_with("Authentication failed"));
    }

    /// 429 responses become rate limit errors
    #[tokio::test]
    async fn test_rate_limit_429() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/settings.json"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .query(&query_type(AccountType::Settings))
            .await
            .expect_err("Query should fail");

        assert!(format_api_error(&err).starts_with("Rate limit exceeded"));
    }

    /// Queries without a Type never reach the network
    #[tokio::test]
    async fn test_missing_type_fails_before_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .query(&QueryExpression::eq("SkipStatus", true))
            .await
            .expect_err("Query should fail");

        let processor_err = err
            .downcast_ref::<twaccount::ProcessorError>()
            .expect("Processor error");
        assert_eq!(processor_err.param_name(), Some("Type"));
    }
}
