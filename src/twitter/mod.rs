//! Twitter API interaction module
//!
//! Transport for account requests. The processors never touch the network;
//! this module sends the [`Request`](crate::processor::Request) they build and
//! hands the raw body back to them.
//!
//! # Module Structure
//!
//! - [`client`] - Main client combining processor and HTTP transport
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use twaccount::account::AccountType;
//! use twaccount::query::QueryExpression;
//! use twaccount::twitter::client::TwitterClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = TwitterClient::new("https://api.twitter.com/1/", None)?;
//!     let accounts = client
//!         .query(&QueryExpression::eq("Type", AccountType::Totals))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
