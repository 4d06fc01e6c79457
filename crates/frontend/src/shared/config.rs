use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Явный адрес бэкенда; пустая строка = взять из `window.location`
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
"#;

pub static CLIENT_CONFIG: Lazy<ClientConfig> =
    Lazy::new(|| ClientConfig::load(option_env!("API_BASE_URL")));

impl ClientConfig {
    /// Embedded config, with `API_BASE_URL` (compile time) overriding `base_url`
    pub fn load(base_url_override: Option<&str>) -> Self {
        let mut config: ClientConfig = match toml::from_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid embedded client config: {}", e);
                ClientConfig {
                    api: ApiConfig {
                        base_url: String::new(),
                        port: default_port(),
                    },
                }
            }
        };

        if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
            config.api.base_url = url.to_string();
        }
        config
    }

    /// Base URL without a trailing slash
    pub fn resolve_base(&self, protocol: &str, hostname: &str) -> String {
        if self.api.base_url.is_empty() {
            format!("{}//{}:{}", protocol, hostname, self.api.port)
        } else {
            self.api.base_url.trim_end_matches('/').to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ClientConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_base_from_location() {
        let config = ClientConfig::load(None);
        assert_eq!(
            config.resolve_base("https:", "example.com"),
            "https://example.com:3000"
        );
    }

    #[test]
    fn test_override_wins() {
        let config = ClientConfig::load(Some("http://10.0.0.5:8000/"));
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000/");
        assert_eq!(config.resolve_base("https:", "example.com"), "http://10.0.0.5:8000");

        let blank = ClientConfig::load(Some("  "));
        assert_eq!(blank.api.base_url, "");
    }
}
