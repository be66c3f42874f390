use reqwest::Client;

use crate::{error::PokeApiError, models::SpeciesLookup, Pokemon};

const BASE_URL: &str = "https://pokeapi.co";

pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Look up a species by name. The API keys species by lowercase name.
    pub async fn get_pokemon(&self, name: &str) -> crate::Result<SpeciesLookup> {
        let key = name.trim().to_lowercase();
        let url = format!(
            "{}/api/v2/pokemon/{}",
            self.base_url,
            urlencoding::encode(&key)
        );
        tracing::debug!("PokeAPI lookup: {}", key);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Unknown names are answered with 404
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(SpeciesLookup { pokemon: None, body });
        }
        if !status.is_success() {
            return Err(PokeApiError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let pokemon: Pokemon =
            serde_path_to_error::deserialize(deserializer).map_err(|e| PokeApiError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            })?;

        Ok(SpeciesLookup {
            pokemon: Some(pokemon),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NINETALES: &str = r#"{
        "id": 38,
        "name": "ninetales",
        "height": 11,
        "sprites": {
            "front_default": "https://sprites.example/38.png",
            "other": {
                "official-artwork": { "front_default": "https://sprites.example/artwork/38.png" },
                "home": { "front_default": null }
            }
        }
    }"#;

    #[tokio::test]
    async fn test_get_pokemon_lowercases_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/pokemon/ninetales")
            .with_status(200)
            .with_body(NINETALES)
            .create_async()
            .await;

        let client = PokeApiClient::with_base_url(reqwest::Client::new(), server.url());
        let lookup = client.get_pokemon(" Ninetales ").await.unwrap();

        mock.assert_async().await;
        let pokemon = lookup.pokemon.unwrap();
        assert_eq!(pokemon.name, "ninetales");
        assert_eq!(pokemon.artwork_url(), Some("https://sprites.example/artwork/38.png"));
        assert_eq!(lookup.body, NINETALES);
    }

    #[tokio::test]
    async fn test_get_pokemon_encodes_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/pokemon/mr.%20mime")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let client = PokeApiClient::with_base_url(reqwest::Client::new(), server.url());
        let lookup = client.get_pokemon("Mr. Mime").await.unwrap();

        mock.assert_async().await;
        assert!(lookup.pokemon.is_none());
        assert_eq!(lookup.body, "Not Found");
    }

    #[tokio::test]
    async fn test_get_pokemon_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v2/pokemon/pikachu")
            .with_status(502)
            .create_async()
            .await;

        let client = PokeApiClient::with_base_url(reqwest::Client::new(), server.url());
        let err = client.get_pokemon("pikachu").await.unwrap_err();
        assert!(matches!(err, PokeApiError::Api { status_code: 502, .. }));
    }

    #[test]
    fn test_artwork_falls_back_to_default_sprite() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{"id": 25, "name": "pikachu", "sprites": {"front_default": "https://sprites.example/25.png", "other": {}}}"#,
        )
        .unwrap();
        assert_eq!(pokemon.artwork_url(), Some("https://sprites.example/25.png"));
    }
}
