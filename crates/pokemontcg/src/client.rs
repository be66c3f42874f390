use reqwest::Client;

use crate::error::PokemonTcgError;

const BASE_URL: &str = "https://api.pokemontcg.io";
pub(crate) const API_KEY_HEADER: &str = "X-Api-Key";

pub struct PokemonTcgClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PokemonTcgClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key: None,
        }
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Send the key with every request. An empty key is ignored.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|k| !k.is_empty());
        self
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// Read the body and decode it. `Ok(None)` means the API answered 404.
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<Option<(T, String)>> {
        let status = response.status();
        let body = response.text().await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PokemonTcgError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let value = serde_path_to_error::deserialize(deserializer).map_err(|e| {
            PokemonTcgError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            }
        })?;
        Ok(Some((value, body)))
    }
}
