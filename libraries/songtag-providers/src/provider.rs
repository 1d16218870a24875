//! Provider traits and the JSON request helper shared by every adapter.

use crate::cache::ReleaseDetailCache;
use crate::error::{ProviderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use songtag_core::MetadataRecord;
use tracing::debug;

/// A metadata source searched by artist and title.
///
/// `search` never fails: transport errors, bad statuses and malformed
/// payloads all yield an empty list.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Provider name, used as the `source` of its records
    fn name(&self) -> &'static str;

    async fn search(&self, artist: &str, title: &str) -> Vec<MetadataRecord>;
}

/// The primary catalog: recording search with release lookups, plus cover art.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Search recordings, memoizing release lookups in `cache`
    async fn search_recordings(
        &self,
        artist: &str,
        title: &str,
        cache: &mut ReleaseDetailCache,
    ) -> Vec<MetadataRecord>;

    /// Cover image URL for a release, if the archive has any image
    async fn cover_art_url(&self, release_id: &str) -> Option<String>;
}

/// GET a JSON document.
///
/// Non-success statuses become [`ProviderError::Status`]; bodies that fail
/// to decode become [`ProviderError::Parse`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    provider: &'static str,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    debug!(provider, url = %url, "Provider request");

    let response = http.get(url).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ProviderError::Parse {
        provider,
        message: e.to_string(),
    })
}

/// Deserialize a field some providers send as a string and others as a number.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(i64),
        Float(f64),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }),
    )
}

/// First four characters of a date-like value, or empty when too short.
pub(crate) fn leading_year(value: Option<&str>) -> String {
    match value {
        Some(value) if value.chars().count() >= 4 => value.chars().take(4).collect(),
        _ => String::new(),
    }
}

/// Treat empty strings the same as missing values.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_string")]
        value: Option<String>,
    }

    #[test]
    fn lenient_string_accepts_strings_numbers_and_null() {
        let s: Sample = serde_json::from_str(r#"{"value":"11"}"#).unwrap();
        assert_eq!(s.value.as_deref(), Some("11"));

        let s: Sample = serde_json::from_str(r#"{"value":11}"#).unwrap();
        assert_eq!(s.value.as_deref(), Some("11"));

        let s: Sample = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(s.value.is_none());

        let s: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert!(s.value.is_none());
    }

    #[test]
    fn leading_year_requires_four_characters() {
        assert_eq!(leading_year(Some("1975-10-31")), "1975");
        assert_eq!(leading_year(Some("1975")), "1975");
        assert_eq!(leading_year(Some("75")), "");
        assert_eq!(leading_year(None), "");
    }

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some(" ".into())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
