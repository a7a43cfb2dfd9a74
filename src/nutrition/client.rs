//! SmoothieFroot HTTP client

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::LookupError;
use crate::config::NutritionConfig;

/// Source of nutrition facts, keyed by lookup key
#[async_trait]
pub trait NutritionSource: Send + Sync {
    /// Fetch the JSON document for `search_key` (an object or an array of objects).
    async fn fetch(&self, search_key: &str) -> Result<Value, LookupError>;
}

/// HTTP client for the `/api/fruit/{name}` endpoint
pub struct FrootClient {
    http: reqwest::Client,
    base_url: String,
}

impl FrootClient {
    pub fn new(config: &NutritionConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a key: lowercased, then form-encoded (spaces become `+`).
    pub fn lookup_url(&self, search_key: &str) -> String {
        let encoded: String =
            form_urlencoded::byte_serialize(search_key.to_lowercase().as_bytes()).collect();
        format!("{}/{}", self.base_url, encoded)
    }
}

#[async_trait]
impl NutritionSource for FrootClient {
    async fn fetch(&self, search_key: &str) -> Result<Value, LookupError> {
        let url = self.lookup_url(search_key);
        debug!(%url, "GET nutrition");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> FrootClient {
        FrootClient::new(&NutritionConfig {
            base_url: base_url.to_string(),
            timeout_secs: 1,
            cache_ttl_secs: 60,
        })
        .unwrap()
    }

    #[test]
    fn test_lookup_url_lowercases_and_encodes() {
        let c = client("https://my.smoothiefroot.com/api/fruit");
        assert_eq!(
            c.lookup_url("Dragon Fruit"),
            "https://my.smoothiefroot.com/api/fruit/dragon+fruit"
        );
        assert_eq!(
            c.lookup_url("Kiwi"),
            "https://my.smoothiefroot.com/api/fruit/kiwi"
        );
    }

    #[test]
    fn test_lookup_url_escapes_reserved_characters() {
        let c = client("http://localhost/api/fruit/");
        assert_eq!(
            c.lookup_url("a/b?c"),
            "http://localhost/api/fruit/a%2Fb%3Fc"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) is not expected to serve HTTP
        let c = client("http://127.0.0.1:9/api/fruit");
        let err = c.fetch("kiwi").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }
}
