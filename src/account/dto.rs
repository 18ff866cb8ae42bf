//! Wire shapes and lenient field decoders
//!
//! The account endpoints do not promise complete objects. Every field goes
//! through [`lenient`] (or one of its siblings) so a missing, `null` or
//! mistyped value decodes to the field type's default instead of failing the
//! whole response.

use super::models::{Settings, SleepTime, TimeZone, TrendLocation};
use super::timestamp::parse_twitter_time;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `T`, falling back to `T::default()` for null or mistyped input.
pub(super) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode a string that the API sometimes sends as a number.
pub(super) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Decode an external timestamp; unparsable values become `None`.
pub(super) fn twitter_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => {
            let parsed = parse_twitter_time(&s);
            if parsed.is_none() {
                tracing::warn!("Unrecognized timestamp '{}', leaving unset", s);
            }
            Ok(parsed)
        }
        Value::Null => Ok(None),
        other => {
            tracing::warn!("Expected timestamp string, got {}", other);
            Ok(None)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SettingsDto {
    #[serde(default, deserialize_with = "lenient")]
    trend_location: Vec<TrendLocationDto>,
    #[serde(default, deserialize_with = "lenient")]
    sleep_time: SleepTimeDto,
    #[serde(default, deserialize_with = "lenient")]
    time_zone: Option<TimeZone>,
    #[serde(default, deserialize_with = "lenient")]
    geo_enabled: bool,
    #[serde(default, deserialize_with = "lenient")]
    language: String,
    #[serde(default, deserialize_with = "lenient")]
    screen_name: String,
    #[serde(default, deserialize_with = "lenient")]
    always_use_https: bool,
    #[serde(default, deserialize_with = "lenient")]
    discoverable_by_email: bool,
    #[serde(default, deserialize_with = "lenient")]
    protected: bool,
    #[serde(default, deserialize_with = "lenient")]
    show_all_inline_media: bool,
}

#[derive(Debug, Default, Deserialize)]
struct TrendLocationDto {
    #[serde(default, deserialize_with = "lenient_string")]
    woeid: String,
    #[serde(default, deserialize_with = "lenient")]
    name: String,
    #[serde(default, rename = "placeType", deserialize_with = "lenient")]
    place_type: PlaceTypeDto,
    #[serde(default, rename = "countryCode", deserialize_with = "lenient")]
    country_code: String,
    #[serde(default, deserialize_with = "lenient")]
    country: String,
    #[serde(default, deserialize_with = "lenient")]
    url: String,
    #[serde(default, deserialize_with = "lenient")]
    parentid: i64,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceTypeDto {
    #[serde(default, deserialize_with = "lenient")]
    name: String,
    #[serde(default, deserialize_with = "lenient")]
    code: i32,
}

#[derive(Debug, Default, Deserialize)]
struct SleepTimeDto {
    #[serde(default, deserialize_with = "lenient")]
    enabled: bool,
    #[serde(default, deserialize_with = "lenient")]
    start_time: i32,
    #[serde(default, deserialize_with = "lenient")]
    end_time: i32,
}

impl SettingsDto {
    /// Only the first trend location is meaningful to callers.
    pub(super) fn into_settings(self) -> Settings {
        Settings {
            trend_location: self
                .trend_location
                .into_iter()
                .next()
                .map(TrendLocationDto::into_trend_location),
            sleep_time: SleepTime {
                enabled: self.sleep_time.enabled,
                start_hour: self.sleep_time.start_time,
                end_hour: self.sleep_time.end_time,
            },
            time_zone: self.time_zone,
            geo_enabled: self.geo_enabled,
            language: self.language,
            screen_name: self.screen_name,
            always_use_https: self.always_use_https,
            discoverable_by_email: self.discoverable_by_email,
            protected: self.protected,
            show_all_inline_media: self.show_all_inline_media,
        }
    }
}

impl TrendLocationDto {
    fn into_trend_location(self) -> TrendLocation {
        TrendLocation {
            woe_id: self.woeid,
            name: self.name,
            place_type_name_code: self.place_type.code,
            place_type_name: self.place_type.name,
            country_code: self.country_code,
            country: self.country,
            url: self.url,
            parent_id: self.parentid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient")]
        hits: i32,
        #[serde(default, deserialize_with = "lenient_string")]
        id: String,
        #[serde(default, deserialize_with = "twitter_time")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_missing_null_and_mistyped_fields_default() {
        let missing: Sample = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.hits, 0);
        assert!(missing.at.is_none());

        let null: Sample = serde_json::from_value(json!({"hits": null, "at": null})).unwrap();
        assert_eq!(null.hits, 0);

        let mistyped: Sample = serde_json::from_value(json!({"hits": "many", "at": 5})).unwrap();
        assert_eq!(mistyped.hits, 0);
        assert!(mistyped.at.is_none());
    }

    #[test]
    fn test_lenient_string_accepts_numbers() {
        let sample: Sample = serde_json::from_value(json!({"id": 23424977})).unwrap();
        assert_eq!(sample.id, "23424977");
    }

    #[test]
    fn test_settings_without_trend_location() {
        let dto: SettingsDto = serde_json::from_value(json!({"geo_enabled": true})).unwrap();
        let settings = dto.into_settings();

        assert!(settings.trend_location.is_none());
        assert!(settings.geo_enabled);
        assert_eq!(settings.sleep_time, SleepTime::default());
    }

    #[test]
    fn test_sleep_time_hours_map_to_start_and_end() {
        let dto: SettingsDto = serde_json::from_value(json!({
            "sleep_time": {"start_time": 22, "end_time": 7, "enabled": true}
        }))
        .unwrap();
        let settings = dto.into_settings();

        assert_eq!(
            settings.sleep_time,
            SleepTime {
                enabled: true,
                start_hour: 22,
                end_hour: 7,
            }
        );
    }
}
