use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::orders::FormatStyle;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// PostgreSQL connection URL. Without it the service runs on the in-memory store.
    #[serde(default)]
    pub postgres_url: Option<String>,
    #[serde(default)]
    pub nutrition: NutritionConfig,
    #[serde(default)]
    pub order: OrderConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Remote nutrition endpoint settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NutritionConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://my.smoothiefroot.com/api/fruit".to_string(),
            timeout_secs: 10,
            cache_ttl_secs: 3600,
        }
    }
}

/// Order intake rules
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderConfig {
    #[serde(default)]
    pub format_style: FormatStyle,
    pub max_selections: usize,
    pub max_ingredients_len: usize,
    pub max_name_len: usize,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            format_style: FormatStyle::default(),
            max_selections: 5,
            max_ingredients_len: 200,
            max_name_len: 100,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "smoothie.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            gateway: GatewayConfig::default(),
            postgres_url: None,
            nutrition: NutritionConfig::default(),
            order: OrderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`. `DATABASE_URL` overrides `postgres_url`.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config yaml: {}", config_path))?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                config.postgres_url = Some(url);
            }
        }
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_deserialize() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: smoothie.log
use_json: true
rotation: hourly
gateway:
  host: "127.0.0.1"
  port: 9090
postgres_url: "postgres://localhost/smoothies"
nutrition:
  base_url: "http://127.0.0.1:3000/api/fruit"
  timeout_secs: 2
  cache_ttl_secs: 60
order:
  format_style: space
  max_selections: 5
  max_ingredients_len: 200
  max_name_len: 100
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.gateway.port, 9090);
        assert!(config.use_json);
        assert_eq!(
            config.postgres_url.as_deref(),
            Some("postgres://localhost/smoothies")
        );
        assert_eq!(config.nutrition.cache_ttl_secs, 60);
        assert_eq!(config.order.format_style, FormatStyle::Space);
    }

    #[test]
    fn test_optional_sections_default() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: smoothie.log
use_json: false
rotation: never
gateway:
  host: "0.0.0.0"
  port: 8080
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();

        assert!(config.postgres_url.is_none());
        assert_eq!(config.nutrition.timeout_secs, 10);
        assert_eq!(config.nutrition.cache_ttl_secs, 3600);
        assert_eq!(config.order.format_style, FormatStyle::English);
        assert_eq!(config.order.max_selections, 5);
    }
}
