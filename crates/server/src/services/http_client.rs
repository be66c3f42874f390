use std::time::Duration;

use reqwest::{Client, Proxy};
use thiserror::Error;

use crate::models::HttpSettings;

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),
}

/// Owns the shared HTTP client used by every provider.
///
/// Every request is bounded by the configured timeouts so a stalled provider
/// cannot hold a lookup open indefinitely.
pub struct HttpClientService {
    client: Client,
    proxy: Option<String>,
}

impl HttpClientService {
    pub fn new(settings: &HttpSettings) -> Result<Self, HttpClientError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs));

        let proxy = Some(settings.proxy.trim().to_string()).filter(|p| !p.is_empty());
        if let Some(url) = &proxy {
            let proxy = Proxy::all(url.as_str())
                .map_err(|e| HttpClientError::InvalidProxy(format!("{}: {}", url, e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("HTTP client initialized with proxy");
        } else {
            tracing::debug!("HTTP client initialized without proxy");
        }

        Ok(Self {
            client: builder.build()?,
            proxy,
        })
    }

    /// Get the HTTP client (cheap clone sharing the connection pool)
    pub fn get_client(&self) -> Client {
        self.client.clone()
    }

    /// Get current proxy URL (for debugging/display)
    pub fn current_proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_proxy() {
        let service = HttpClientService::new(&HttpSettings::default()).unwrap();
        assert_eq!(service.current_proxy(), None);
    }

    #[test]
    fn test_with_proxy() {
        let settings = HttpSettings {
            proxy: " http://127.0.0.1:7890 ".to_string(),
            ..HttpSettings::default()
        };
        let service = HttpClientService::new(&settings).unwrap();
        assert_eq!(service.current_proxy(), Some("http://127.0.0.1:7890"));
    }

    #[test]
    fn test_invalid_proxy() {
        let settings = HttpSettings {
            proxy: "http://[bad".to_string(),
            ..HttpSettings::default()
        };
        assert!(matches!(
            HttpClientService::new(&settings),
            Err(HttpClientError::InvalidProxy(_))
        ));
    }
}
