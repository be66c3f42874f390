use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Application settings stored in TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Outbound HTTP configuration
    #[serde(default)]
    pub http: HttpSettings,
    /// Provider endpoints and credentials
    #[serde(default)]
    pub providers: ProviderSettings,
    /// Placeholder returned when providers are unreachable
    #[serde(default)]
    pub mock: MockSettings,
    /// Extra name corrections (alias = "canonical name"), merged over the
    /// built-in table
    #[serde(default)]
    pub corrections: BTreeMap<String, String>,
}

/// Outbound HTTP configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "HttpSettings::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "HttpSettings::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Proxy URL (e.g., http://127.0.0.1:7890). Empty disables the proxy.
    #[serde(default)]
    pub proxy: String,
    /// User-Agent sent to the HTML price sites
    #[serde(default = "HttpSettings::default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: Self::default_timeout_secs(),
            connect_timeout_secs: Self::default_connect_timeout_secs(),
            proxy: String::new(),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl HttpSettings {
    fn default_timeout_secs() -> u64 {
        15
    }

    fn default_connect_timeout_secs() -> u64 {
        5
    }

    fn default_user_agent() -> String {
        pricecharting::BROWSER_USER_AGENT.to_string()
    }
}

/// Provider endpoints. Empty base URLs use each client's public default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub pricecharting_url: String,
    #[serde(default)]
    pub tcgplayer_url: String,
    #[serde(default)]
    pub pokemontcg_url: String,
    /// Optional key for the Pokemon TCG API (raises rate limits)
    #[serde(default)]
    pub pokemontcg_api_key: String,
    #[serde(default)]
    pub pokeapi_url: String,
}

/// Placeholder returned when providers are unreachable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockSettings {
    /// Lowest placeholder price (inclusive)
    #[serde(default = "MockSettings::default_min_price")]
    pub min_price: u32,
    /// Highest placeholder price (exclusive)
    #[serde(default = "MockSettings::default_max_price")]
    pub max_price: u32,
    #[serde(default = "MockSettings::default_image")]
    pub image: String,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            min_price: Self::default_min_price(),
            max_price: Self::default_max_price(),
            image: Self::default_image(),
        }
    }
}

impl MockSettings {
    fn default_min_price() -> u32 {
        10
    }

    fn default_max_price() -> u32 {
        110
    }

    fn default_image() -> String {
        "/placeholder.svg?height=200&width=150".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [http]
            timeout_secs = 30

            [corrections]
            charzard = "charizard"
            "#,
        )
        .unwrap();

        assert_eq!(settings.http.timeout_secs, 30);
        assert_eq!(settings.http.connect_timeout_secs, 5);
        assert_eq!(settings.mock, MockSettings::default());
        assert_eq!(settings.corrections.get("charzard").map(String::as_str), Some("charizard"));
        assert!(settings.providers.pricecharting_url.is_empty());
    }

    #[test]
    fn test_user_agent_defaults_to_browser() {
        let settings: Settings = toml::from_str("[http]\ntimeout_secs = 30\n").unwrap();
        assert_eq!(settings.http.user_agent, pricecharting::BROWSER_USER_AGENT);

        let settings: Settings =
            toml::from_str("[http]\nuser_agent = \"cardex/0.1\"\n").unwrap();
        assert_eq!(settings.http.user_agent, "cardex/0.1");
        assert_eq!(settings.http.timeout_secs, 15);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
