//! Account payload models
//!
//! Field names follow the REST API. Every field is optional on the wire and
//! decodes to its type's default when absent.

use super::dto::{lenient, lenient_string, twitter_time};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile returned by `verify_credentials`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_str: String,
    #[serde(default, deserialize_with = "lenient")]
    pub screen_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub protected: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub verified: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub geo_enabled: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub contributors_enabled: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub is_translator: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub following: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub follow_request_sent: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub notifications: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub followers_count: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub friends_count: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub favourites_count: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub statuses_count: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub listed_count: i64,
    /// Seconds east of UTC
    #[serde(default, deserialize_with = "lenient")]
    pub utc_offset: i32,
    #[serde(default, deserialize_with = "lenient")]
    pub time_zone: String,
    #[serde(default, deserialize_with = "lenient")]
    pub lang: String,
    #[serde(default, deserialize_with = "twitter_time")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub default_profile: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub default_profile_image: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_image_url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_image_url_https: String,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_background_color: String,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_text_color: String,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_link_color: String,
    /// Most recent tweet, absent when `skip_status` was requested
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<Status>,
}

/// Latest tweet embedded in a user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_str: String,
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "twitter_time")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub retweet_count: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub favorited: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub retweeted: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub truncated: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub possibly_sensitive: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub in_reply_to_screen_name: Option<String>,
}

/// Hourly request budget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub remaining_hits: i32,
    #[serde(default, deserialize_with = "lenient")]
    pub hourly_limit: i32,
    /// Unix epoch seconds of the next reset
    #[serde(default, deserialize_with = "lenient")]
    pub reset_time_in_seconds: i64,
    #[serde(default, deserialize_with = "twitter_time")]
    pub reset_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default, deserialize_with = "lenient")]
    pub updates: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub friends: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub favorites: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub followers: i64,
}

/// Account settings. Built from the wire shape in `dto`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    pub trend_location: Option<TrendLocation>,
    pub sleep_time: SleepTime,
    pub time_zone: Option<TimeZone>,
    pub geo_enabled: bool,
    pub language: String,
    pub screen_name: String,
    pub always_use_https: bool,
    pub discoverable_by_email: bool,
    pub protected: bool,
    pub show_all_inline_media: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendLocation {
    /// Yahoo! Where On Earth ID
    pub woe_id: String,
    pub name: String,
    pub place_type_name_code: i32,
    pub place_type_name: String,
    pub country_code: String,
    pub country: String,
    pub url: String,
    pub parent_id: i64,
}

/// Quiet hours; hours are 0 when unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SleepTime {
    pub enabled: bool,
    pub start_hour: i32,
    pub end_hour: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZone {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub tzinfo_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub utc_offset: i32,
}

/// Answer to `end_session`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSessionStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub request: String,
    #[serde(default, deserialize_with = "lenient")]
    pub error: String,
}
